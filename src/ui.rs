//! egui binding: renders the retained surface through egui_plot and feeds
//! pointer input back into the workspace.
//!
//! One [`InteractivePlot`] holds the surface and the workspace for one
//! figure. Call [`InteractivePlot::show`] once per frame; it
//! - renders the zoom button toolbar (when attached)
//! - renders each axes as an egui_plot `Plot`, with animated artists only
//!   drawn while they sit on the composited overlay
//! - translates presses, drags, releases and scroll wheel movement into
//!   [`SurfaceEvent`]s and dispatches them
//!
//! egui repaints the whole plot every frame, so the surface's background
//! capture and blit calls come back out of `show` as repaint scheduling
//! rather than pixel copies.

use egui_plot::{Line, MarkerShape, Plot, PlotPoint, Points};

use crate::config::InteractiveConfig;
use crate::headless::{Artist, HeadlessSurface};
use crate::surface::{AxesId, ButtonId, PlotSurface, PointerEvent, SurfaceEvent, TextId};
use crate::workspace::Workspace;

pub struct InteractivePlot {
    surface: HeadlessSurface,
    workspace: Workspace,
}

impl InteractivePlot {
    pub fn new() -> Self {
        Self::with_config(InteractiveConfig::default())
    }

    pub fn with_config(cfg: InteractiveConfig) -> Self {
        Self {
            surface: HeadlessSurface::new(),
            workspace: Workspace::with_config(cfg),
        }
    }

    pub fn surface(&self) -> &HeadlessSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut HeadlessSurface {
        &mut self.surface
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Both halves at once, for setup code that wires controllers to lines:
    /// `let (surface, workspace) = plot.parts();`
    pub fn parts(&mut self) -> (&mut HeadlessSurface, &mut Workspace) {
        (&mut self.surface, &mut self.workspace)
    }

    /// Render the figure and process this frame's input.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        let mut events: Vec<SurfaceEvent> = Vec::new();

        self.show_toolbar(ui, &mut events);

        let n_axes = self.surface.axes.len();
        if n_axes > 0 {
            let plot_height = (ui.available_height() / n_axes as f32 - 4.0).max(120.0);
            for axes in 0..n_axes as AxesId {
                self.show_axes(ui, axes, plot_height, &mut events);
            }
        }

        for event in &events {
            self.workspace.dispatch(&mut self.surface, event);
        }

        // the GUI consumes canvas traffic as repaint scheduling
        self.surface.clear_ops();
        if self.surface.take_repaint() {
            ui.ctx().request_repaint();
        }
    }

    fn show_toolbar(&self, ui: &mut egui::Ui, events: &mut Vec<SurfaceEvent>) {
        if self.surface.buttons.is_empty() {
            return;
        }
        // flowing layout: the placement rects only decide left-to-right order
        let mut order: Vec<usize> = (0..self.surface.buttons.len()).collect();
        order.sort_by(|&a, &b| {
            let ax = self.surface.buttons[a].rect.x;
            let bx = self.surface.buttons[b].rect.x;
            ax.partial_cmp(&bx).unwrap_or(std::cmp::Ordering::Equal)
        });
        ui.horizontal(|ui| {
            for i in order {
                let button = &self.surface.buttons[i];
                let icon = if button.label.contains('+') {
                    egui_phosphor::regular::MAGNIFYING_GLASS_PLUS
                } else {
                    egui_phosphor::regular::MAGNIFYING_GLASS_MINUS
                };
                if ui.button(format!("{icon} {}", button.label)).clicked() {
                    events.push(SurfaceEvent::ButtonPressed(i as ButtonId));
                }
            }
        });
    }

    fn show_axes(
        &self,
        ui: &mut egui::Ui,
        axes: AxesId,
        height: f32,
        events: &mut Vec<SurfaceEvent>,
    ) {
        let surface = &self.surface;
        let (x_min, x_max) = surface.axes_x_range(axes);
        let (y_min, y_max) = surface.axes_y_range(axes);

        let response = Plot::new(format!("dragplot_axes_{axes}"))
            .height(height)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(x_min..=x_max);
                plot_ui.set_plot_bounds_y(y_min..=y_max);

                for (i, line) in surface.lines.iter().enumerate() {
                    let id = i as u32;
                    if line.axes != axes {
                        continue;
                    }
                    if line.animated && !surface.overlay_has(Artist::Line(id)) {
                        continue;
                    }
                    let pts: Vec<[f64; 2]> = line
                        .xs
                        .iter()
                        .zip(&line.ys)
                        .map(|(&x, &y)| [x, y])
                        .collect();
                    if line.look.show_line {
                        plot_ui.line(
                            Line::new(format!("line_{id}"), pts.clone())
                                .color(line.look.color32())
                                .width(line.look.width.max(0.1)),
                        );
                    }
                    if line.look.show_points {
                        plot_ui.points(
                            Points::new(format!("points_{id}"), pts)
                                .radius(line.look.point_size.max(0.5))
                                .shape(MarkerShape::Circle)
                                .color(line.look.color32()),
                        );
                    }
                }
            });

        // labels carry a screen-space offset, so they go through the
        // painter rather than the plot's data space
        let painter = ui.painter().with_clip_rect(response.response.rect);
        let text_color = ui.visuals().strong_text_color();
        for (i, text) in surface.texts.iter().enumerate() {
            let id = i as TextId;
            if text.axes != axes {
                continue;
            }
            if text.animated && !surface.overlay_has(Artist::Text(id)) {
                continue;
            }
            let anchor = response
                .transform
                .position_from_point(&PlotPoint::new(text.x, text.y));
            let pos = anchor + egui::vec2(text.offset[0], -text.offset[1]);
            painter.text(
                pos,
                egui::Align2::LEFT_BOTTOM,
                &text.text,
                egui::FontId::proportional(text.size),
                text_color,
            );
        }

        if let Some(highlight) = surface.axes_highlight(axes) {
            ui.painter().rect_stroke(
                response.response.rect.shrink(1.0),
                egui::CornerRadius::same(2),
                egui::Stroke::new(highlight.width, highlight.color32()),
                egui::StrokeKind::Inside,
            );
        }

        self.collect_events(&response, axes, events);
    }

    fn collect_events(
        &self,
        response: &egui_plot::PlotResponse<()>,
        axes: AxesId,
        events: &mut Vec<SurfaceEvent>,
    ) {
        let resp = &response.response;
        let to_data = |pos: egui::Pos2| {
            let value = response.transform.value_from_position(pos);
            PointerEvent {
                x: value.x,
                y: value.y,
                axes: Some(axes),
            }
        };

        let primary = egui::PointerButton::Primary;
        if resp.drag_started_by(primary) || resp.clicked() {
            if let Some(pos) = resp.interact_pointer_pos() {
                events.push(SurfaceEvent::Press(to_data(pos)));
            }
        }
        if resp.dragged_by(primary) {
            if let Some(pos) = resp.interact_pointer_pos() {
                events.push(SurfaceEvent::Motion(to_data(pos)));
            }
        }
        if resp.drag_stopped_by(primary) || resp.clicked() {
            if let Some(pos) = resp.interact_pointer_pos() {
                events.push(SurfaceEvent::Release(to_data(pos)));
            }
        }
        if resp.hovered() {
            let scroll = resp.ctx.input(|i| i.raw_scroll_delta);
            if scroll.y != 0.0 {
                if let Some(pos) = resp.hover_pos() {
                    // one wheel notch is roughly 50 logical points
                    events.push(SurfaceEvent::Scroll {
                        ticks: (scroll.y / 50.0) as f64,
                        at: to_data(pos),
                    });
                }
            }
        }
    }
}

impl Default for InteractivePlot {
    fn default() -> Self {
        Self::new()
    }
}
