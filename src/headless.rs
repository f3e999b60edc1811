//! Retained in-memory implementation of [`PlotSurface`].
//!
//! This is the surface the egui binding renders from every frame, and the
//! one the integration tests drive directly. Canvas operations keep two
//! pieces of bookkeeping:
//! - `overlay`: the artists currently composited on top of the captured
//!   background (the draw-artist-then-blit protocol used during drags)
//! - `ops`: a log of canvas traffic so tests can assert redraw behavior;
//!   the GUI clears it once per frame
//!
//! On an immediate-mode host the background capture itself is free, so
//! [`copy_background`](PlotSurface::copy_background) only hands out a token
//! and resets the overlay; `blit` and `redraw` raise the repaint flag.

use crate::look::{CurveLook, HighlightLook};
use crate::surface::{
    AxesId, BackgroundId, ButtonId, ButtonRect, LineId, PlotSurface, TextId,
};

#[derive(Debug, Clone)]
pub(crate) struct AxesState {
    pub(crate) x_range: (f64, f64),
    pub(crate) y_range: (f64, f64),
    pub(crate) zoom_tag: bool,
    pub(crate) highlight: Option<HighlightLook>,
}

#[derive(Debug, Clone)]
pub(crate) struct LineState {
    pub(crate) axes: AxesId,
    pub(crate) xs: Vec<f64>,
    pub(crate) ys: Vec<f64>,
    pub(crate) look: CurveLook,
    pub(crate) animated: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct TextState {
    pub(crate) axes: AxesId,
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) text: String,
    pub(crate) size: f32,
    pub(crate) offset: [f32; 2],
    pub(crate) animated: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct ButtonState {
    pub(crate) rect: ButtonRect,
    pub(crate) label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Artist {
    Line(LineId),
    Text(TextId),
}

/// One entry of canvas traffic, in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasOp {
    Redraw,
    CopyBackground(AxesId, BackgroundId),
    RestoreBackground(BackgroundId),
    DrawLine(LineId),
    DrawText(TextId),
    Blit(AxesId),
}

/// Retained plot surface with no rendering attached.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    pub(crate) axes: Vec<AxesState>,
    pub(crate) lines: Vec<LineState>,
    pub(crate) texts: Vec<TextState>,
    pub(crate) buttons: Vec<ButtonState>,
    pub(crate) overlay: Vec<Artist>,
    ops: Vec<CanvasOp>,
    next_background: BackgroundId,
    needs_repaint: bool,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new axes with a unit visible range.
    pub fn add_axes(&mut self) -> AxesId {
        self.axes.push(AxesState {
            x_range: (0.0, 1.0),
            y_range: (0.0, 1.0),
            zoom_tag: false,
            highlight: None,
        });
        (self.axes.len() - 1) as AxesId
    }

    /// Canvas traffic since the last [`clear_ops`](Self::clear_ops).
    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Take and reset the repaint flag raised by `redraw`/`blit`.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }

    pub fn line_animated(&self, line: LineId) -> bool {
        self.lines
            .get(line as usize)
            .map(|l| l.animated)
            .unwrap_or(false)
    }

    pub fn text_pos(&self, text: TextId) -> (f64, f64) {
        self.texts
            .get(text as usize)
            .map(|t| (t.x, t.y))
            .unwrap_or((0.0, 0.0))
    }

    pub fn text_animated(&self, text: TextId) -> bool {
        self.texts
            .get(text as usize)
            .map(|t| t.animated)
            .unwrap_or(false)
    }

    pub fn axes_highlight(&self, axes: AxesId) -> Option<HighlightLook> {
        self.axes.get(axes as usize).and_then(|a| a.highlight)
    }

    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    pub fn button_label(&self, button: ButtonId) -> Option<&str> {
        self.buttons.get(button as usize).map(|b| b.label.as_str())
    }

    pub(crate) fn overlay_has(&self, artist: Artist) -> bool {
        self.overlay.contains(&artist)
    }
}

impl PlotSurface for HeadlessSurface {
    fn add_line(&mut self, axes: AxesId, xs: Vec<f64>, ys: Vec<f64>, look: CurveLook) -> LineId {
        self.lines.push(LineState {
            axes,
            xs,
            ys,
            look,
            animated: false,
        });
        (self.lines.len() - 1) as LineId
    }

    fn line_axes(&self, line: LineId) -> Option<AxesId> {
        self.lines.get(line as usize).map(|l| l.axes)
    }

    fn line_xdata(&self, line: LineId) -> Vec<f64> {
        self.lines
            .get(line as usize)
            .map(|l| l.xs.clone())
            .unwrap_or_default()
    }

    fn line_ydata(&self, line: LineId) -> Vec<f64> {
        self.lines
            .get(line as usize)
            .map(|l| l.ys.clone())
            .unwrap_or_default()
    }

    fn set_line_xdata(&mut self, line: LineId, xs: Vec<f64>) {
        if let Some(l) = self.lines.get_mut(line as usize) {
            l.xs = xs;
        }
    }

    fn set_line_ydata(&mut self, line: LineId, ys: Vec<f64>) {
        if let Some(l) = self.lines.get_mut(line as usize) {
            l.ys = ys;
        }
    }

    fn set_line_animated(&mut self, line: LineId, animated: bool) {
        if let Some(l) = self.lines.get_mut(line as usize) {
            l.animated = animated;
        }
    }

    fn line_look(&self, line: LineId) -> CurveLook {
        self.lines
            .get(line as usize)
            .map(|l| l.look)
            .unwrap_or_default()
    }

    fn set_line_look(&mut self, line: LineId, look: CurveLook) {
        if let Some(l) = self.lines.get_mut(line as usize) {
            l.look = look;
        }
    }

    fn has_axes(&self, axes: AxesId) -> bool {
        (axes as usize) < self.axes.len()
    }

    fn axes_x_range(&self, axes: AxesId) -> (f64, f64) {
        self.axes
            .get(axes as usize)
            .map(|a| a.x_range)
            .unwrap_or((0.0, 1.0))
    }

    fn axes_y_range(&self, axes: AxesId) -> (f64, f64) {
        self.axes
            .get(axes as usize)
            .map(|a| a.y_range)
            .unwrap_or((0.0, 1.0))
    }

    fn set_axes_x_range(&mut self, axes: AxesId, min: f64, max: f64) {
        if let Some(a) = self.axes.get_mut(axes as usize) {
            a.x_range = (min, max);
        }
    }

    fn set_axes_y_range(&mut self, axes: AxesId, min: f64, max: f64) {
        if let Some(a) = self.axes.get_mut(axes as usize) {
            a.y_range = (min, max);
        }
    }

    fn add_text(
        &mut self,
        axes: AxesId,
        x: f64,
        y: f64,
        text: &str,
        size: f32,
        offset: [f32; 2],
    ) -> TextId {
        self.texts.push(TextState {
            axes,
            x,
            y,
            text: text.to_string(),
            size,
            offset,
            animated: false,
        });
        (self.texts.len() - 1) as TextId
    }

    fn set_text_x(&mut self, text: TextId, x: f64) {
        if let Some(t) = self.texts.get_mut(text as usize) {
            t.x = x;
        }
    }

    fn set_text_y(&mut self, text: TextId, y: f64) {
        if let Some(t) = self.texts.get_mut(text as usize) {
            t.y = y;
        }
    }

    fn set_text_animated(&mut self, text: TextId, animated: bool) {
        if let Some(t) = self.texts.get_mut(text as usize) {
            t.animated = animated;
        }
    }

    fn set_zoom_tag(&mut self, axes: AxesId, tagged: bool) {
        if let Some(a) = self.axes.get_mut(axes as usize) {
            a.zoom_tag = tagged;
        }
    }

    fn zoom_tag(&self, axes: AxesId) -> bool {
        self.axes
            .get(axes as usize)
            .map(|a| a.zoom_tag)
            .unwrap_or(false)
    }

    fn set_axes_highlight(&mut self, axes: AxesId, highlight: Option<HighlightLook>) {
        if let Some(a) = self.axes.get_mut(axes as usize) {
            a.highlight = highlight;
        }
    }

    fn redraw(&mut self) {
        // a full pass renders non-animated artists only, dropping any overlay
        self.overlay.clear();
        self.ops.push(CanvasOp::Redraw);
        self.needs_repaint = true;
    }

    fn copy_background(&mut self, axes: AxesId) -> BackgroundId {
        let id = self.next_background;
        self.next_background = self.next_background.wrapping_add(1);
        self.overlay.clear();
        self.ops.push(CanvasOp::CopyBackground(axes, id));
        id
    }

    fn restore_background(&mut self, background: BackgroundId) {
        // the capture never contains animated artists
        self.overlay.clear();
        self.ops.push(CanvasOp::RestoreBackground(background));
    }

    fn draw_line(&mut self, line: LineId) {
        let artist = Artist::Line(line);
        if !self.overlay.contains(&artist) {
            self.overlay.push(artist);
        }
        self.ops.push(CanvasOp::DrawLine(line));
    }

    fn draw_text(&mut self, text: TextId) {
        let artist = Artist::Text(text);
        if !self.overlay.contains(&artist) {
            self.overlay.push(artist);
        }
        self.ops.push(CanvasOp::DrawText(text));
    }

    fn blit(&mut self, axes: AxesId) {
        self.ops.push(CanvasOp::Blit(axes));
        self.needs_repaint = true;
    }

    fn add_button(&mut self, rect: ButtonRect, label: &str) -> ButtonId {
        self.buttons.push(ButtonState {
            rect,
            label: label.to_string(),
        });
        (self.buttons.len() - 1) as ButtonId
    }
}
