//! Default layout and styling, in pixels for a 400×300 canvas

pub const WIDTH: f64 = 400.0;
pub const HEIGHT: f64 = 300.0;
pub const ORIGIN_X: f64 = 40.0;
pub const BASELINE_Y: f64 = 260.0;
pub const MARGIN_LEFT: f64 = 10.0;
pub const MARGIN_RIGHT: f64 = 10.0;
pub const MARGIN_TOP: f64 = 20.0;
pub const TICK_LENGTH: f64 = 5.0;
pub const X_LABEL_OFFSET: f64 = 20.0;
pub const Y_LABEL_X: f64 = 20.0;
pub const LABEL_FONT_SIZE: f64 = 12.0;
pub const AXIS_STROKE_WIDTH: f64 = 2.0;
pub const AXIS_STROKE: &str = "black";
pub const REGION_FILL: &str = "lightgray";
pub const MARKER_RADIUS: f64 = 5.0;
pub const MARKER_INSIDE_FILL: &str = "green";
pub const MARKER_OUTSIDE_FILL: &str = "red";
pub const TEXT_FILL: &str = "black";
