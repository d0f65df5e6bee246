//! Chart rendering
//!
//! This module is organized into submodules:
//! - `defaults`: Default sizes and colors
//! - `layout`: `ChartLayout`, where things sit on the canvas
//! - `geometry`: data ↔ canvas mapping and the hit test
//! - `primitive`: line/rect/circle/text marks and their emission
//! - `axes`, `region`, `marker`, `text`: the renderers
//! - `svg`: in-memory SVG document and serialization

pub mod axes;
pub mod defaults;
pub mod geometry;
pub mod layout;
pub mod marker;
pub mod primitive;
pub mod region;
pub mod svg;
pub mod text;

// Re-export commonly used items
pub use axes::{AxisStats, MAX_TICKS, axis_primitives, draw_axes};
pub use geometry::{is_inside_region, map_to_canvas, map_to_data, region_rect};
pub use layout::ChartLayout;
pub use marker::{MarkerStyle, draw_point};
pub use primitive::{Draw, Primitive};
pub use region::draw_region;
pub use svg::SvgDocument;
pub use text::add_text;
