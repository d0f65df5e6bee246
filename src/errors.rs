//! Error types with diagnostic codes using miette
//!
//! Rendering is mostly infallible arithmetic; these errors cover the inputs
//! that would otherwise produce a broken chart or never terminate.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::Axis;

/// Result alias used throughout the crate
pub type Result<T, E = ChartError> = std::result::Result<T, E>;

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur while building or drawing a chart
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("no scope to draw")]
    #[diagnostic(
        code(scopechart::render::missing_scope),
        help("set a scope on the chart before drawing the region")
    )]
    MissingScope,

    #[error("{what} must be finite, got {value}")]
    #[diagnostic(code(scopechart::render::non_finite))]
    NonFinite { what: &'static str, value: f64 },

    #[error("{axis} extent must not be negative, got {value}")]
    #[diagnostic(code(scopechart::render::negative_extent))]
    NegativeExtent { axis: Axis, value: f64 },

    #[error("{axis} extent {value} needs more than {limit} ticks")]
    #[diagnostic(
        code(scopechart::render::too_many_ticks),
        help("ticks are drawn at every whole unit; rescale the data to a smaller range")
    )]
    TooManyTicks { axis: Axis, value: f64, limit: u64 },

    #[error("{axis} extent is zero, cannot fit a step to it")]
    #[diagnostic(
        code(scopechart::render::empty_extent),
        help("pick the step by hand or use an extent of at least one unit")
    )]
    EmptyExtent { axis: Axis },

    #[error("scope is inverted on the {axis} axis: min {min} > max {max}")]
    #[diagnostic(code(scopechart::render::inverted_scope))]
    InvertedScope { axis: Axis, min: f64, max: f64 },
}

/// Reject NaN and infinities, naming the offending input
pub(crate) fn ensure_finite(what: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ChartError::NonFinite { what, value })
    }
}
