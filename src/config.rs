//! Shared configuration for interactive plot controllers.

use serde::{Deserialize, Serialize};

use crate::look::{CurveLook, HighlightLook};

/// Tunables shared by all controllers attached to one workspace.
///
/// The defaults reproduce the behavior users expect from the stock
/// controllers: a click selects a point within 0.1 axes-normalized units
/// (0.03 for curve-bound drags), the scroll wheel zooms by 1.05 per tick,
/// and the zoom buttons step by 1.5.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractiveConfig {
    /// Pick tolerance for free drags, in axes-normalized units.
    pub select_radius: f64,
    /// Pick tolerance for curve-bound drags. Tighter, since the points sit
    /// directly on the studied curve.
    pub curve_select_radius: f64,
    /// Per-tick zoom ratio for the scroll wheel. Scroll-up widens both
    /// visible ranges by this factor, scroll-down narrows by its reciprocal.
    pub scroll_zoom_ratio: f64,
    /// Zoom ratio applied by the X/Y toolbar buttons.
    pub button_zoom_ratio: f64,
    /// Default sample count for zoomable function curves. Floored at 2.
    pub zoom_npoints: usize,
    /// Point label font size.
    pub label_size: f32,
    /// Screen-space label displacement from its data point, in points:
    /// [right, up]. Keeps the text off the marker.
    pub label_offset: [f32; 2],
    /// Selection marker size relative to the series marker size.
    pub marker_scale: f32,
    /// Selection marker opacity.
    pub marker_alpha: f32,
    /// Look for function curves created by zoom controllers.
    pub curve: CurveLook,
    /// Border drawn around the selected zoom axes.
    pub highlight: HighlightLook,
}

impl Default for InteractiveConfig {
    fn default() -> Self {
        Self {
            select_radius: 0.1,
            curve_select_radius: 0.03,
            scroll_zoom_ratio: 1.05,
            button_zoom_ratio: 1.5,
            zoom_npoints: 100,
            label_size: 20.0,
            label_offset: [3.0, 2.0],
            marker_scale: 3.0,
            marker_alpha: 0.4,
            curve: CurveLook::default(),
            highlight: HighlightLook::default(),
        }
    }
}
