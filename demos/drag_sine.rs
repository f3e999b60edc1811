//! Example: draggable labeled points over a sine curve
//!
//! What it demonstrates
//! - Attaching a free drag controller to a marker-only point series.
//! - Label validation: the mismatch error is recovered by retrying without
//!   labels, so a sloppy label list never kills the figure.
//!
//! How to run
//! ```bash
//! cargo run --example drag_sine
//! ```
//! Click a red marker and drag it anywhere; its label follows.

use dragplot::{run_interactive, CurveLook, LabelInput, PlotError, PlotSurface};

fn main() -> eframe::Result<()> {
    run_interactive("dragplot - drag points", |plot| {
        let (surface, workspace) = plot.parts();
        let axes = surface.add_axes();

        // background curve
        let n = 200;
        let xs: Vec<f64> = (0..n)
            .map(|i| i as f64 / (n - 1) as f64 * 4.0 * std::f64::consts::PI)
            .collect();
        let ys: Vec<f64> = xs.iter().map(|&x| x.sin()).collect();
        surface.add_line(axes, xs, ys, CurveLook::default());

        // the points to drag around
        let px: Vec<f64> = vec![0.8, 2.3, 5.1, 7.7, 11.0];
        let py: Vec<f64> = px.iter().map(|&x| x.sin()).collect();
        let points = surface.add_line(axes, px, py, CurveLook::points([220, 60, 60], 6.0));

        surface.set_axes_x_range(axes, 0.0, 4.0 * std::f64::consts::PI);
        surface.set_axes_y_range(axes, -1.5, 1.5);

        let labels = LabelInput::from(vec!["a", "b", "c", "d", "hi"]);
        match workspace.add_drag(surface, points, Some(labels)) {
            Ok(_) => {}
            Err(PlotError::DimensionMismatch { .. }) => {
                // wrong label count: fall back to an unlabeled series
                workspace
                    .add_drag(surface, points, None)
                    .expect("unlabeled drag construction");
            }
            Err(e) => panic!("drag setup failed: {e}"),
        }
    })
}
