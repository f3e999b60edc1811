//! Top-level entry point for running an interactive figure as a native
//! window.
//!
//! [`run_interactive`] is the primary public API for standalone use: it
//! builds an [`InteractivePlot`], hands it to the caller's setup closure to
//! create axes and attach controllers, then opens a native window and
//! enters the eframe event loop. The call blocks until the window closes.

use eframe::egui;

use crate::ui::InteractivePlot;

pub struct InteractiveApp {
    plot: InteractivePlot,
}

impl InteractiveApp {
    pub fn new(plot: InteractivePlot) -> Self {
        Self { plot }
    }
}

impl eframe::App for InteractiveApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.plot.show(ui);
        });
    }
}

/// Launch a native window around one interactive figure.
///
/// ```no_run
/// dragplot::run_interactive("points", |plot| {
///     let (surface, workspace) = plot.parts();
///     let axes = surface.add_axes();
///     let _ = workspace.add_zoom(surface, axes, f64::sin, 0.0, 6.28);
/// })
/// .unwrap();
/// ```
pub fn run_interactive(
    title: &str,
    build: impl FnOnce(&mut InteractivePlot),
) -> eframe::Result<()> {
    let mut plot = InteractivePlot::new();
    build(&mut plot);

    let mut opts = eframe::NativeOptions::default();
    opts.viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(1000.0, 700.0));

    eframe::run_native(
        title,
        opts,
        Box::new(move |cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(InteractiveApp::new(plot)))
        }),
    )
}
