//! Collaborator interface to the host rendering surface.
//!
//! The interaction core never draws pixels itself. Everything it needs from
//! the host plotting toolkit is expressed by [`PlotSurface`]: line and text
//! artists addressed by numeric ids, per-axes visible ranges, a small canvas
//! protocol for incremental redraws, and button placement. Two
//! implementations ship with the crate:
//! - [`crate::headless::HeadlessSurface`], a retained in-memory surface that
//!   also records canvas traffic for tests
//! - the egui binding in [`crate::ui`], which drives the same retained state
//!   through egui_plot every frame
//!
//! Input reaches the core as [`SurfaceEvent`] values fed to
//! [`crate::workspace::Workspace::dispatch`] on the UI thread.

use crate::look::{CurveLook, HighlightLook};

pub type AxesId = u32;
pub type LineId = u32;
pub type TextId = u32;
pub type ButtonId = u32;
/// Opaque token for a captured background region, returned by
/// [`PlotSurface::copy_background`].
pub type BackgroundId = u32;

/// A pointer event in data coordinates, tagged with the axes under the
/// pointer (or `None` when the pointer is outside every axes).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub axes: Option<AxesId>,
}

/// Input events delivered by the host toolkit's event loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceEvent {
    Press(PointerEvent),
    Motion(PointerEvent),
    Release(PointerEvent),
    /// Scroll wheel movement. Positive `ticks` is scroll-up.
    Scroll { ticks: f64, at: PointerEvent },
    ButtonPressed(ButtonId),
}

/// Button placement in normalized figure coordinates (0..=1, origin at the
/// bottom left). Hosts with flowing layouts may treat this as a hint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Everything the interaction core asks of the host rendering surface.
///
/// Getters on unknown ids return inert defaults and setters on unknown ids
/// are ignored; id validity is checked once, at controller construction,
/// via [`crate::validate`].
pub trait PlotSurface {
    // ── Lines ───────────────────────────────────────────────────────────

    fn add_line(&mut self, axes: AxesId, xs: Vec<f64>, ys: Vec<f64>, look: CurveLook) -> LineId;
    /// The axes a line lives in, or `None` for an unknown id.
    fn line_axes(&self, line: LineId) -> Option<AxesId>;
    fn line_xdata(&self, line: LineId) -> Vec<f64>;
    fn line_ydata(&self, line: LineId) -> Vec<f64>;
    fn set_line_xdata(&mut self, line: LineId, xs: Vec<f64>);
    fn set_line_ydata(&mut self, line: LineId, ys: Vec<f64>);
    /// Animated artists are left out of full redraws and only appear when
    /// explicitly drawn over a restored background.
    fn set_line_animated(&mut self, line: LineId, animated: bool);
    fn line_look(&self, line: LineId) -> CurveLook;
    fn set_line_look(&mut self, line: LineId, look: CurveLook);

    // ── Axes ────────────────────────────────────────────────────────────

    fn has_axes(&self, axes: AxesId) -> bool;
    fn axes_x_range(&self, axes: AxesId) -> (f64, f64);
    fn axes_y_range(&self, axes: AxesId) -> (f64, f64);
    fn set_axes_x_range(&mut self, axes: AxesId, min: f64, max: f64);
    fn set_axes_y_range(&mut self, axes: AxesId, min: f64, max: f64);
    /// Create a text annotation anchored at a data point, displaced by
    /// `offset` screen points ([right, up]).
    fn add_text(
        &mut self,
        axes: AxesId,
        x: f64,
        y: f64,
        text: &str,
        size: f32,
        offset: [f32; 2],
    ) -> TextId;
    fn set_text_x(&mut self, text: TextId, x: f64);
    fn set_text_y(&mut self, text: TextId, y: f64);
    fn set_text_animated(&mut self, text: TextId, animated: bool);
    /// Mark or unmark an axes as zoom-enabled.
    fn set_zoom_tag(&mut self, axes: AxesId, tagged: bool);
    fn zoom_tag(&self, axes: AxesId) -> bool;
    /// Border stroke around the axes, `None` to clear.
    fn set_axes_highlight(&mut self, axes: AxesId, highlight: Option<HighlightLook>);

    // ── Canvas ──────────────────────────────────────────────────────────

    /// Full redraw of every non-animated artist.
    fn redraw(&mut self);
    /// Capture the rendered content of an axes, minus animated artists.
    fn copy_background(&mut self, axes: AxesId) -> BackgroundId;
    fn restore_background(&mut self, background: BackgroundId);
    /// Draw a single artist on top of whatever is currently composited.
    fn draw_line(&mut self, line: LineId);
    fn draw_text(&mut self, text: TextId);
    /// Composite the region of an axes to the screen.
    fn blit(&mut self, axes: AxesId);

    // ── Buttons ─────────────────────────────────────────────────────────

    fn add_button(&mut self, rect: ButtonRect, label: &str) -> ButtonId;
}
