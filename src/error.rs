//! Error taxonomy for validating constructors and setters.
//!
//! All variants are raised synchronously while building or reconfiguring a
//! controller and propagate to the caller unchanged. Event handlers (press,
//! motion, release, scroll) never fail: an event that misses its axes or
//! arrives while another controller holds the drag lock is silently ignored.

use thiserror::Error;

/// Everything that can go wrong when wiring up interactive plot controllers.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The given line id does not refer to a line on the surface.
    #[error("line handle does not refer to a plotted line")]
    NotALine,

    /// The given axes id does not refer to an axes on the surface.
    #[error("axes handle does not refer to a known axes")]
    NotAnAxes,

    /// The supplied function does not map numbers to numbers. The probe call
    /// at 0.0 may legally return an infinity (the function is allowed one
    /// singular point) but a NaN result is rejected.
    #[error("function must map a number to a number, probe at 0.0 returned NaN")]
    NotAFunction,

    /// Label count and point count disagree.
    #[error("need one label per data point, got {labels} labels for {points} points")]
    DimensionMismatch { labels: usize, points: usize },

    /// Label input was neither a list, a single string, nor a number.
    #[error("labels must be a list of strings, a single string, or a number")]
    BadLabelInput,

    /// Zoom factors must be strictly positive.
    #[error("zoom factor must be positive, got {0}")]
    BadZoomScale(f64),
}
