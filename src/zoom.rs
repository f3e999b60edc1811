//! Per-axes zoom over a sampled function curve.
//!
//! A zoom controller owns the function under study and a uniform sample of
//! it across the visible x interval. Changing the x range resamples the
//! function and refits the y range to the new sample; zooming is a pure
//! interval transform around the midpoint. Which controller responds to
//! buttons and the scroll wheel is decided by the workspace-wide zoom
//! selection, see [`crate::workspace`].

use crate::config::InteractiveConfig;
use crate::error::PlotError;
use crate::look::{CurveLook, HighlightLook};
use crate::surface::{AxesId, LineId, PlotSurface};
use crate::validate::{self, CurveFn};
use crate::workspace::ControllerId;

/// Customary step for programmatic [`ZoomController::scale_x`] and
/// [`crate::workspace::Workspace::scale_y`] calls. The toolbar buttons and
/// the scroll wheel use their own configured ratios.
pub const DEFAULT_ZOOM_FACTOR: f64 = 1.2;

/// Rescale an interval around its midpoint: the half-width is multiplied by
/// `alpha`, the midpoint stays put. `alpha` above 1 zooms out, below 1
/// zooms in.
pub fn rescale_interval(min: f64, max: f64, alpha: f64) -> Result<(f64, f64), PlotError> {
    if alpha <= 0.0 {
        return Err(PlotError::BadZoomScale(alpha));
    }
    let length = max - min;
    let mid_point = (max + min) / 2.0;
    Ok((
        mid_point - 0.5 * length * alpha,
        mid_point + 0.5 * length * alpha,
    ))
}

/// `n` evenly spaced values from `min` to `max` inclusive. `n` must be at
/// least 2; the endpoints are hit exactly.
pub(crate) fn linspace(min: f64, max: f64, n: usize) -> Vec<f64> {
    let step = (max - min) / (n - 1) as f64;
    (0..n)
        .map(|i| if i == n - 1 { max } else { min + step * i as f64 })
        .collect()
}

/// Smallest and largest finite-or-infinite value in a sample (NaNs are
/// skipped).
fn extent(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}

pub struct ZoomController {
    id: ControllerId,
    axes: AxesId,
    f: CurveFn,
    npoints: usize,
    xs: Vec<f64>,
    ys: Vec<f64>,
    line: LineId,
    highlight: HighlightLook,
}

impl ZoomController {
    /// Validate the axes and function, sample `[x_min, x_max]`, render the
    /// curve, fit the visible ranges to the sample, and tag the axes as
    /// zoom-enabled.
    pub(crate) fn new<F>(
        surface: &mut dyn PlotSurface,
        id: ControllerId,
        axes: AxesId,
        f: F,
        x_min: f64,
        x_max: f64,
        npoints: usize,
        cfg: &InteractiveConfig,
    ) -> Result<Self, PlotError>
    where
        F: Fn(f64) -> f64 + 'static,
    {
        let axes = validate::validate_axes(surface, axes)?;
        let f = validate::validate_function(f)?;
        let npoints = npoints.max(2);

        let xs = linspace(x_min, x_max, npoints);
        let ys: Vec<f64> = xs.iter().map(|&x| f(x)).collect();
        let line = surface.add_line(axes, xs.clone(), ys.clone(), cfg.curve);

        let (y_min, y_max) = extent(&ys);
        surface.set_axes_x_range(axes, x_min, x_max);
        surface.set_axes_y_range(axes, y_min, y_max);
        surface.set_zoom_tag(axes, true);

        Ok(Self {
            id,
            axes,
            f,
            npoints,
            xs,
            ys,
            line,
            highlight: cfg.highlight,
        })
    }

    pub fn id(&self) -> ControllerId {
        self.id
    }

    pub fn axes(&self) -> AxesId {
        self.axes
    }

    pub fn line(&self) -> LineId {
        self.line
    }

    pub fn npoints(&self) -> usize {
        self.npoints
    }

    /// The current sample, x and y sequences side by side.
    pub fn sample(&self) -> (&[f64], &[f64]) {
        (&self.xs, &self.ys)
    }

    /// x extent of the current sample.
    pub fn x_extent(&self) -> (f64, f64) {
        extent(&self.xs)
    }

    /// y extent of the current sample.
    pub fn y_extent(&self) -> (f64, f64) {
        extent(&self.ys)
    }

    pub(crate) fn highlight(&self) -> HighlightLook {
        self.highlight
    }

    /// Replace the function under study. The existing sample stays on
    /// screen until the next range change resamples it.
    pub fn set_function<F>(&mut self, f: F) -> Result<(), PlotError>
    where
        F: Fn(f64) -> f64 + 'static,
    {
        self.f = validate::validate_function(f)?;
        Ok(())
    }

    /// Resample the function over the new x interval, update the rendered
    /// curve, and fit the visible ranges to the fresh sample.
    pub fn set_x_range(
        &mut self,
        surface: &mut dyn PlotSurface,
        x_min: f64,
        x_max: f64,
        redraw: bool,
    ) {
        self.xs = linspace(x_min, x_max, self.npoints);
        self.ys = self.xs.iter().map(|&x| (self.f)(x)).collect();
        surface.set_line_xdata(self.line, self.xs.clone());
        surface.set_line_ydata(self.line, self.ys.clone());

        surface.set_axes_x_range(self.axes, x_min, x_max);
        let (y_min, y_max) = extent(&self.ys);
        surface.set_axes_y_range(self.axes, y_min, y_max);

        if redraw {
            surface.redraw();
        }
    }

    /// Set the visible y range only; no resampling.
    pub fn set_y_range(
        &mut self,
        surface: &mut dyn PlotSurface,
        y_min: f64,
        y_max: f64,
        redraw: bool,
    ) {
        surface.set_axes_y_range(self.axes, y_min, y_max);
        if redraw {
            surface.redraw();
        }
    }

    /// Change the sample density and resample over the current x extent.
    /// Leaves the visible ranges alone.
    pub fn set_npoints(&mut self, surface: &mut dyn PlotSurface, npoints: usize) {
        self.npoints = npoints.max(2);
        let (x_min, x_max) = extent(&self.xs);
        self.xs = linspace(x_min, x_max, self.npoints);
        self.ys = self.xs.iter().map(|&x| (self.f)(x)).collect();
        surface.set_line_xdata(self.line, self.xs.clone());
        surface.set_line_ydata(self.line, self.ys.clone());
    }

    /// Restyle the rendered curve.
    pub fn set_look(&mut self, surface: &mut dyn PlotSurface, look: CurveLook) {
        surface.set_line_look(self.line, look);
        surface.redraw();
    }

    /// Zoom this controller's x axis around its midpoint and resample.
    pub fn scale_x(
        &mut self,
        surface: &mut dyn PlotSurface,
        alpha: f64,
        redraw: bool,
    ) -> Result<(), PlotError> {
        let (x_min, x_max) = surface.axes_x_range(self.axes);
        let (new_min, new_max) = rescale_interval(x_min, x_max, alpha)?;
        self.set_x_range(surface, new_min, new_max, redraw);
        Ok(())
    }
}
