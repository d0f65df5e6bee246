//! Print a sample scope chart as SVG.
//!
//! Usage: `cargo run --example scope --features tracing -- [x_max] [y_max]`

use scopechart::{Annotation, Chart, DataPoint, Scope};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1).map(|a| a.parse::<f64>());
    let x_max = args.next().and_then(Result::ok).unwrap_or(7.0);
    let y_max = args.next().and_then(Result::ok).unwrap_or(4.0);

    let points = [
        DataPoint::new(1.5, 0.5),
        DataPoint::new(2.0, 1.5),
        DataPoint::new(4.0, 3.0),
        DataPoint::new(6.5, 1.0),
    ];

    let chart = Scope::new(1.0, 3.0, 0.0, 2.0).and_then(|scope| {
        let inside = points.iter().filter(|p| scope.contains(**p)).count();
        Ok(Chart::fitted(x_max, y_max)?
            .with_labels(true)
            .with_scope(scope)
            .with_points(points)
            .with_annotation(Annotation::new(
                glam::dvec2(200.0, 14.0),
                format!("{inside} of {} points in scope", points.len()),
            )))
    });

    match chart.and_then(|c| c.to_svg()) {
        Ok(svg) => println!("{}", svg),
        Err(e) => eprintln!("Error: {:?}", miette::Report::new(e)),
    }
}
