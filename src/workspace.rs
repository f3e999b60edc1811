//! Controller registry, shared selection state, and event dispatch.
//!
//! A `Workspace` owns every controller attached to one figure and the two
//! pieces of cross-controller state:
//! - the drag lock: at most one drag controller is mid-drag at a time
//! - the zoom selection: the axes currently targeted by zoom buttons
//!
//! The host binding feeds input to [`Workspace::dispatch`]; adding a
//! controller returns its [`ControllerId`], and [`Workspace::remove`] is
//! the matching disconnect. All dispatch happens on the UI thread; on a
//! multi-threaded toolkit, marshal events onto one thread first.

use crate::config::InteractiveConfig;
use crate::drag::{DragController, MovePolicy};
use crate::error::PlotError;
use crate::surface::{AxesId, ButtonId, ButtonRect, LineId, PlotSurface, PointerEvent, SurfaceEvent};
use crate::validate::{self, LabelInput};
use crate::zoom::{rescale_interval, ZoomController};

pub type ControllerId = u32;

/// Cross-controller selection state, shared by everything in one workspace.
#[derive(Debug, Default)]
pub struct InteractionSession {
    drag_lock: Option<ControllerId>,
    zoom_selection: Option<ControllerId>,
}

impl InteractionSession {
    /// Controller currently holding the drag lock, if any.
    pub fn drag_lock(&self) -> Option<ControllerId> {
        self.drag_lock
    }

    pub fn holds_drag(&self, id: ControllerId) -> bool {
        self.drag_lock == Some(id)
    }

    pub(crate) fn acquire_drag(&mut self, id: ControllerId) {
        self.drag_lock = Some(id);
    }

    pub(crate) fn release_drag(&mut self, id: ControllerId) {
        if self.drag_lock == Some(id) {
            self.drag_lock = None;
        }
    }

    /// Zoom controller currently targeted by button commands, if any.
    pub fn selected_zoom(&self) -> Option<ControllerId> {
        self.zoom_selection
    }

    pub(crate) fn select_zoom(&mut self, id: ControllerId) {
        self.zoom_selection = Some(id);
    }

    pub(crate) fn clear_zoom(&mut self, id: ControllerId) {
        if self.zoom_selection == Some(id) {
            self.zoom_selection = None;
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ZoomButtons {
    x_in: ButtonId,
    x_out: ButtonId,
    y_in: ButtonId,
    y_out: ButtonId,
}

pub struct Workspace {
    cfg: InteractiveConfig,
    session: InteractionSession,
    drags: Vec<DragController>,
    zooms: Vec<ZoomController>,
    buttons: Option<ZoomButtons>,
    next_id: ControllerId,
}

impl Workspace {
    pub fn new() -> Self {
        Self::with_config(InteractiveConfig::default())
    }

    pub fn with_config(cfg: InteractiveConfig) -> Self {
        Self {
            cfg,
            session: InteractionSession::default(),
            drags: Vec::new(),
            zooms: Vec::new(),
            buttons: None,
            next_id: 1,
        }
    }

    pub fn config(&self) -> &InteractiveConfig {
        &self.cfg
    }

    pub fn session(&self) -> &InteractionSession {
        &self.session
    }

    pub fn selected_zoom(&self) -> Option<ControllerId> {
        self.session.selected_zoom()
    }

    pub fn drag(&self, id: ControllerId) -> Option<&DragController> {
        self.drags.iter().find(|d| d.id() == id)
    }

    pub fn zoom(&self, id: ControllerId) -> Option<&ZoomController> {
        self.zooms.iter().find(|z| z.id() == id)
    }

    pub fn zoom_mut(&mut self, id: ControllerId) -> Option<&mut ZoomController> {
        self.zooms.iter_mut().find(|z| z.id() == id)
    }

    /// Attach a free drag controller to a point line. Labels, when given,
    /// must match the line's point count.
    pub fn add_drag(
        &mut self,
        surface: &mut dyn PlotSurface,
        line: LineId,
        labels: Option<LabelInput>,
    ) -> Result<ControllerId, PlotError> {
        let id = self.next_id;
        let controller = DragController::new(
            surface,
            id,
            line,
            labels,
            MovePolicy::Free,
            self.cfg.select_radius,
            &self.cfg,
        )?;
        self.next_id += 1;
        self.drags.push(controller);
        Ok(id)
    }

    /// Attach a drag controller whose points stay glued to `f`: the dragged
    /// point's y is recomputed as `f(x)` and clamped into the visible
    /// vertical range.
    pub fn add_curve_drag<F>(
        &mut self,
        surface: &mut dyn PlotSurface,
        line: LineId,
        f: F,
        labels: Option<LabelInput>,
    ) -> Result<ControllerId, PlotError>
    where
        F: Fn(f64) -> f64 + 'static,
    {
        let f = validate::validate_function(f)?;
        let id = self.next_id;
        let controller = DragController::new(
            surface,
            id,
            line,
            labels,
            MovePolicy::OnCurve(f),
            self.cfg.curve_select_radius,
            &self.cfg,
        )?;
        self.next_id += 1;
        self.drags.push(controller);
        Ok(id)
    }

    /// Attach a zoom controller to an axes, sampling `f` over
    /// `[x_min, x_max]` with the configured point count.
    pub fn add_zoom<F>(
        &mut self,
        surface: &mut dyn PlotSurface,
        axes: AxesId,
        f: F,
        x_min: f64,
        x_max: f64,
    ) -> Result<ControllerId, PlotError>
    where
        F: Fn(f64) -> f64 + 'static,
    {
        let id = self.next_id;
        let controller = ZoomController::new(
            surface,
            id,
            axes,
            f,
            x_min,
            x_max,
            self.cfg.zoom_npoints,
            &self.cfg,
        )?;
        self.next_id += 1;
        self.zooms.push(controller);
        Ok(id)
    }

    /// Place the four zoom buttons on the figure. Attaching twice is a
    /// no-op; one set of buttons serves every zoom axes.
    pub fn add_zoom_buttons(&mut self, surface: &mut dyn PlotSurface) {
        if self.buttons.is_some() {
            return;
        }
        const W: f32 = 0.08;
        const H: f32 = 0.05;
        let x_in = surface.add_button(ButtonRect { x: 0.58, y: 0.94, w: W, h: H }, "X +");
        let x_out = surface.add_button(ButtonRect { x: 0.68, y: 0.94, w: W, h: H }, "X -");
        let y_in = surface.add_button(ButtonRect { x: 0.78, y: 0.94, w: W, h: H }, "Y +");
        let y_out = surface.add_button(ButtonRect { x: 0.88, y: 0.94, w: W, h: H }, "Y -");
        self.buttons = Some(ZoomButtons { x_in, x_out, y_in, y_out });
    }

    /// Detach a controller. A held drag lock or zoom selection is released;
    /// the controller's artists stay on the surface.
    pub fn remove(&mut self, surface: &mut dyn PlotSurface, id: ControllerId) {
        if let Some(pos) = self.drags.iter().position(|d| d.id() == id) {
            self.drags.remove(pos);
            self.session.release_drag(id);
        }
        if let Some(pos) = self.zooms.iter().position(|z| z.id() == id) {
            let controller = self.zooms.remove(pos);
            if self.session.selected_zoom() == Some(id) {
                surface.set_axes_highlight(controller.axes(), None);
                self.session.clear_zoom(id);
            }
        }
    }

    /// Route one input event to every interested controller. Events that
    /// miss their axes or arrive under someone else's lock are ignored;
    /// this never fails.
    pub fn dispatch(&mut self, surface: &mut dyn PlotSurface, event: &SurfaceEvent) {
        match event {
            SurfaceEvent::Press(ev) => {
                self.select_zoom_at(surface, ev);
                for drag in &mut self.drags {
                    drag.on_press(surface, &mut self.session, ev);
                }
            }
            SurfaceEvent::Motion(ev) => {
                for drag in &mut self.drags {
                    drag.on_motion(surface, &mut self.session, ev);
                }
            }
            SurfaceEvent::Release(ev) => {
                for drag in &mut self.drags {
                    drag.on_release(surface, &mut self.session, ev);
                }
            }
            SurfaceEvent::Scroll { ticks, at } => self.scroll_zoom(surface, *ticks, at),
            SurfaceEvent::ButtonPressed(button) => self.on_button(surface, *button),
        }
    }

    /// Zoom a specific controller's x axis.
    pub fn scale_x(
        &mut self,
        surface: &mut dyn PlotSurface,
        id: ControllerId,
        alpha: f64,
        redraw: bool,
    ) -> Result<(), PlotError> {
        match self.zooms.iter_mut().find(|z| z.id() == id) {
            Some(z) => z.scale_x(surface, alpha, redraw),
            None => Ok(()),
        }
    }

    /// Zoom the y axis of the *currently selected* zoom controller, no
    /// matter which controller a button or caller nominally addressed. With
    /// nothing selected this is a no-op. Surprising but deliberate: the
    /// zoom buttons always act on whatever the user last clicked.
    pub fn scale_y(
        &mut self,
        surface: &mut dyn PlotSurface,
        alpha: f64,
        redraw: bool,
    ) -> Result<(), PlotError> {
        let Some(selected) = self.session.selected_zoom() else {
            return Ok(());
        };
        let Some(z) = self.zooms.iter_mut().find(|z| z.id() == selected) else {
            return Ok(());
        };
        let (y_min, y_max) = surface.axes_y_range(z.axes());
        let (new_min, new_max) = rescale_interval(y_min, y_max, alpha)?;
        z.set_y_range(surface, new_min, new_max, redraw);
        Ok(())
    }

    /// A press inside a zoom-enabled axes moves the zoom selection there
    /// and walks the highlight border over.
    fn select_zoom_at(&mut self, surface: &mut dyn PlotSurface, ev: &PointerEvent) {
        let Some(axes) = ev.axes else {
            return;
        };
        if !surface.zoom_tag(axes) {
            return;
        }
        let Some(pos) = self.zooms.iter().position(|z| z.axes() == axes) else {
            return;
        };
        let id = self.zooms[pos].id();
        if self.session.selected_zoom() == Some(id) {
            return;
        }

        if let Some(previous) = self.session.selected_zoom() {
            if let Some(prev) = self.zooms.iter().find(|z| z.id() == previous) {
                surface.set_axes_highlight(prev.axes(), None);
            }
        }
        self.session.select_zoom(id);
        let highlight = self.zooms[pos].highlight();
        surface.set_axes_highlight(axes, Some(highlight));
        surface.redraw();
    }

    /// Scroll zooms both axes of the selected controller, but only while
    /// the pointer is over its own axes. One redraw at the end.
    fn scroll_zoom(&mut self, surface: &mut dyn PlotSurface, ticks: f64, at: &PointerEvent) {
        let Some(axes) = at.axes else {
            return;
        };
        let Some(selected) = self.session.selected_zoom() else {
            return;
        };
        let ratio = self.cfg.scroll_zoom_ratio;
        let Some(z) = self.zooms.iter_mut().find(|z| z.id() == selected) else {
            return;
        };
        if z.axes() != axes {
            return;
        }

        // scroll-up (positive ticks) zooms out, scroll-down zooms in
        let alpha = ratio.powf(ticks);
        if z.scale_x(surface, alpha, false).is_ok() {
            let (y_min, y_max) = surface.axes_y_range(axes);
            if let Ok((new_min, new_max)) = rescale_interval(y_min, y_max, alpha) {
                z.set_y_range(surface, new_min, new_max, false);
            }
        }
        surface.redraw();
    }

    fn on_button(&mut self, surface: &mut dyn PlotSurface, button: ButtonId) {
        let Some(buttons) = self.buttons else {
            return;
        };
        let ratio = self.cfg.button_zoom_ratio;

        if button == buttons.x_in || button == buttons.x_out {
            let alpha = if button == buttons.x_in { 1.0 / ratio } else { ratio };
            let Some(selected) = self.session.selected_zoom() else {
                return;
            };
            let _ = self.scale_x(surface, selected, alpha, true);
        } else if button == buttons.y_in || button == buttons.y_out {
            let alpha = if button == buttons.y_in { 1.0 / ratio } else { ratio };
            let _ = self.scale_y(surface, alpha, true);
        }
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
