//! Press-to-select, motion-to-move, release-to-drop point dragging.
//!
//! Each controller is a small state machine: `Idle` until a press lands
//! close enough to one of its points while no other controller is dragging,
//! then `Dragging(index)` until the release. While dragging, redraws are
//! incremental: the controller snapshots the rendered background once (with
//! the moving artists excluded), then on every motion restores it, redraws
//! just the moving artists, and blits the axes region.
//!
//! How the dragged point moves is a policy, not a subtype: a free drag
//! follows the pointer, a curve-bound drag keeps y glued to a supplied
//! function of x, clamped into the visible vertical range.

use crate::config::InteractiveConfig;
use crate::error::PlotError;
use crate::series::LabeledSeries;
use crate::surface::{BackgroundId, LineId, PlotSurface, PointerEvent};
use crate::validate::{CurveFn, LabelInput};
use crate::workspace::{ControllerId, InteractionSession};

/// How a dragged point follows the pointer.
pub enum MovePolicy {
    /// Both coordinates track the pointer.
    Free,
    /// x tracks the pointer, y is recomputed from the function and clamped
    /// into the axes' visible vertical range so the marker stays in view.
    OnCurve(CurveFn),
}

pub struct DragController {
    id: ControllerId,
    series: LabeledSeries,
    marker: LineId,
    policy: MovePolicy,
    select_radius: f64,
    index: Option<usize>,
    background: Option<BackgroundId>,
}

impl DragController {
    pub(crate) fn new(
        surface: &mut dyn PlotSurface,
        id: ControllerId,
        line: LineId,
        labels: Option<LabelInput>,
        policy: MovePolicy,
        select_radius: f64,
        cfg: &InteractiveConfig,
    ) -> Result<Self, PlotError> {
        let series = LabeledSeries::new(surface, line, labels, cfg.label_size, cfg.label_offset)?;
        let marker = Self::make_marker(surface, &series, cfg);
        Ok(Self {
            id,
            series,
            marker,
            policy,
            select_radius,
            index: None,
            background: None,
        })
    }

    /// Build the selection marker: same color as the series, 3x the marker
    /// size, semi-transparent. Born animated so it stays invisible until a
    /// point is picked.
    fn make_marker(
        surface: &mut dyn PlotSurface,
        series: &LabeledSeries,
        cfg: &InteractiveConfig,
    ) -> LineId {
        let mut look = surface.line_look(series.line());
        look.show_line = false;
        look.show_points = true;
        look.point_size *= cfg.marker_scale;
        look.alpha = cfg.marker_alpha;
        let marker = surface.add_line(series.axes(), vec![0.0], vec![0.0], look);
        surface.set_line_animated(marker, true);
        marker
    }

    pub fn id(&self) -> ControllerId {
        self.id
    }

    pub fn series(&self) -> &LabeledSeries {
        &self.series
    }

    /// Index of the point currently being dragged, if any.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn select_radius(&self) -> f64 {
        self.select_radius
    }

    /// The selection marker artist.
    pub fn marker(&self) -> LineId {
        self.marker
    }

    pub(crate) fn on_press(
        &mut self,
        surface: &mut dyn PlotSurface,
        session: &mut InteractionSession,
        ev: &PointerEvent,
    ) {
        if ev.axes != Some(self.series.axes()) {
            return;
        }
        if session.drag_lock().is_some() {
            return;
        }

        let Some((index, distance)) = self.series.nearest_normalized(surface, ev.x, ev.y) else {
            return;
        };
        if !(distance <= self.select_radius) {
            return;
        }

        session.acquire_drag(self.id);
        self.index = Some(index);

        let line = self.series.line();
        surface.set_line_animated(line, true);
        if let Some(text) = self.series.text(index) {
            surface.set_text_animated(text, true);
        }

        // park the selection marker on the picked point
        let xs = surface.line_xdata(line);
        let ys = surface.line_ydata(line);
        surface.set_line_xdata(self.marker, vec![xs[index]]);
        surface.set_line_ydata(self.marker, vec![ys[index]]);

        // render everything else once, keep it as the drag background, then
        // composite the moving artists on top
        surface.redraw();
        self.background = Some(surface.copy_background(self.series.axes()));
        surface.draw_line(line);
        if let Some(text) = self.series.text(index) {
            surface.draw_text(text);
        }
        surface.draw_line(self.marker);
        surface.blit(self.series.axes());
    }

    pub(crate) fn on_motion(
        &mut self,
        surface: &mut dyn PlotSurface,
        session: &mut InteractionSession,
        ev: &PointerEvent,
    ) {
        if ev.axes != Some(self.series.axes()) {
            return;
        }
        let Some(index) = self.index else {
            return;
        };
        if !session.holds_drag(self.id) {
            return;
        }

        self.move_point(surface, ev.x, ev.y);

        if let Some(background) = self.background {
            surface.restore_background(background);
        }
        surface.draw_line(self.series.line());
        if let Some(text) = self.series.text(index) {
            surface.draw_text(text);
        }
        surface.draw_line(self.marker);
        surface.blit(self.series.axes());
    }

    pub(crate) fn on_release(
        &mut self,
        surface: &mut dyn PlotSurface,
        session: &mut InteractionSession,
        ev: &PointerEvent,
    ) {
        if ev.axes != Some(self.series.axes()) {
            return;
        }
        if !session.holds_drag(self.id) {
            return;
        }

        surface.set_line_animated(self.series.line(), false);
        if let Some(background) = self.background {
            surface.restore_background(background);
        }
        surface.draw_line(self.series.line());
        if let Some(index) = self.index {
            if let Some(text) = self.series.text(index) {
                surface.set_text_animated(text, false);
                surface.draw_text(text);
            }
        }
        surface.blit(self.series.axes());

        self.index = None;
        self.background = None;
        session.release_drag(self.id);
    }

    /// Move the dragged point according to the policy, then keep the
    /// selection marker on top of it.
    fn move_point(&mut self, surface: &mut dyn PlotSurface, new_x: f64, new_y: f64) {
        let Some(i) = self.index else {
            return;
        };

        let mut xs = self.series.xdata(surface);
        let mut ys = self.series.ydata(surface);
        xs[i] = new_x;
        ys[i] = match &self.policy {
            MovePolicy::Free => new_y,
            MovePolicy::OnCurve(f) => {
                let (axis_min, axis_max) = surface.axes_y_range(self.series.axes());
                let mut y = f(new_x);
                if y > axis_max {
                    y = axis_max;
                }
                if y < axis_min {
                    y = axis_min;
                }
                y
            }
        };
        let (marker_x, marker_y) = (xs[i], ys[i]);
        self.series.set_xdata(surface, xs);
        self.series.set_ydata(surface, ys);

        surface.set_line_xdata(self.marker, vec![marker_x]);
        surface.set_line_ydata(self.marker, vec![marker_y]);
    }
}
