use camino::Utf8PathBuf;
use glam::dvec2;
use scopechart::{Annotation, Chart, ChartLayout, DataPoint, Scope, Steps};
use std::fs;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  gallery    Render sample charts into gallery.html");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "gallery" => gallery(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

/// Sample charts covering labels, scopes, markers and odd extents
fn samples() -> Vec<(&'static str, scopechart::Result<Chart>)> {
    let points = [
        DataPoint::new(0.5, 0.5),
        DataPoint::new(2.0, 1.0),
        DataPoint::new(3.0, 2.0),
        DataPoint::new(5.5, 3.5),
    ];

    vec![
        ("axes only", Chart::fitted(5.0, 3.0)),
        ("labelled axes", Chart::fitted(7.0, 4.0).map(|c| c.with_labels(true))),
        (
            "scope with points",
            Scope::new(1.0, 3.0, 0.0, 2.0).and_then(|scope| {
                Ok(Chart::fitted(7.0, 4.0)?
                    .with_labels(true)
                    .with_scope(scope)
                    .with_points(points))
            }),
        ),
        (
            "fixed steps",
            Steps::uniform(50.0).and_then(|steps| {
                Ok(Chart::new(ChartLayout::default(), steps, 5.0, 3.0)
                    .with_labels(true)
                    .with_scope(Scope::new(1.0, 3.0, 0.0, 2.0)?)
                    .with_points(points)
                    .with_annotation(Annotation::new(dvec2(200.0, 14.0), "steps 50/50")))
            }),
        ),
        ("fractional extent", Chart::fitted(4.5, 2.5).map(|c| c.with_labels(true))),
    ]
}

fn gallery() {
    let manifest_dir = Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let output_path = manifest_dir.join("../gallery.html");

    let mut html = String::new();
    html.push_str(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>scopechart gallery</title>
    <style>
        body { font-family: system-ui, sans-serif; background: #eee; color: #333; margin: 0; }
        .page { max-width: 1200px; margin: 0 auto; padding: 24px; }
        .card { background: white; border-radius: 8px; margin-bottom: 16px; padding: 12px 16px; }
        .title { font-weight: 600; font-size: 13px; margin-bottom: 8px; }
        .error { color: #991b1b; font-family: monospace; }
    </style>
</head>
<body>
<div class="page">
<h1>scopechart gallery</h1>
"#,
    );

    for (name, chart) in samples() {
        eprintln!("Rendering {}...", name);
        let body = match chart.and_then(|c| c.to_svg()) {
            Ok(svg) => svg,
            Err(e) => format!(r#"<div class="error">Error: {}</div>"#, e),
        };
        html.push_str(&format!(
            "<div class=\"card\">\n<div class=\"title\">{}</div>\n{}</div>\n",
            name, body
        ));
    }

    html.push_str("</div>\n</body>\n</html>\n");

    fs::write(&output_path, html).expect("Failed to write gallery");
    eprintln!("Wrote {}", output_path);
}
