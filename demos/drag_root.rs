//! Example: points glued to the curve they study
//!
//! What it demonstrates
//! - A curve-bound drag controller: the dragged point's y is recomputed
//!   from f(x) = 1000 sin x, so the marker slides along the curve instead
//!   of floating freely, and is clamped to the visible vertical range.
//!
//! How to run
//! ```bash
//! cargo run --example drag_root
//! ```

use dragplot::{run_interactive, CurveLook, LabelInput, PlotSurface};

fn main() -> eframe::Result<()> {
    run_interactive("dragplot - drag along a curve", |plot| {
        let (surface, workspace) = plot.parts();
        let axes = surface.add_axes();

        let f = |x: f64| 1000.0 * x.sin();

        let n = 100;
        let xs: Vec<f64> = (0..n)
            .map(|i| i as f64 / (n - 1) as f64 * 2.0 * std::f64::consts::PI)
            .collect();
        let ys: Vec<f64> = xs.iter().map(|&x| f(x)).collect();
        surface.add_line(axes, xs, ys, CurveLook::default());

        let px = vec![0.4, 1.1, 1.9, 2.6, 3.0];
        let py: Vec<f64> = px.iter().map(|&x| f(x)).collect();
        let points = surface.add_line(axes, px, py, CurveLook::points([220, 60, 60], 6.0));

        surface.set_axes_x_range(axes, 0.0, 2.0 * std::f64::consts::PI);
        surface.set_axes_y_range(axes, -1100.0, 1100.0);

        workspace
            .add_curve_drag(
                surface,
                points,
                f,
                Some(LabelInput::from(vec!["a", "b", "c", "d", "hi"])),
            )
            .expect("curve drag setup");
    })
}
