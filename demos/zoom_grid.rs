//! Example: several zoomable function plots in one figure
//!
//! What it demonstrates
//! - One zoom controller per axes, sharing a figure-wide selection: click
//!   an axes to select it (highlight border), then zoom it with the
//!   toolbar buttons or the scroll wheel.
//!
//! How to run
//! ```bash
//! cargo run --example zoom_grid
//! ```

use dragplot::run_interactive;

fn main() -> eframe::Result<()> {
    run_interactive("dragplot - zoomable plots", |plot| {
        let (surface, workspace) = plot.parts();

        let ax1 = surface.add_axes();
        let ax2 = surface.add_axes();
        let ax3 = surface.add_axes();

        workspace
            .add_zoom(surface, ax1, |x: f64| 1.0 / (x.sin() + 2.0), 0.0, 2.0 * std::f64::consts::PI)
            .expect("zoom setup ax1");
        workspace
            .add_zoom(surface, ax2, |x: f64| x, 0.0, 1.0)
            .expect("zoom setup ax2");
        workspace
            .add_zoom(
                surface,
                ax3,
                |x: f64| x.sin() * (-0.1 * x).exp(),
                0.0,
                4.0 * std::f64::consts::PI,
            )
            .expect("zoom setup ax3");

        workspace.add_zoom_buttons(surface);
    })
}
