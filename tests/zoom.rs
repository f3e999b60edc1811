use std::f64::consts::PI;

use dragplot::{
    rescale_interval, HeadlessSurface, PlotError, PlotSurface, PointerEvent, SurfaceEvent,
    Workspace, DEFAULT_ZOOM_FACTOR,
};

fn press_in(axes: u32) -> SurfaceEvent {
    SurfaceEvent::Press(PointerEvent {
        x: 0.5,
        y: 0.5,
        axes: Some(axes),
    })
}

fn scroll_in(axes: u32, ticks: f64) -> SurfaceEvent {
    SurfaceEvent::Scroll {
        ticks,
        at: PointerEvent {
            x: 0.5,
            y: 0.5,
            axes: Some(axes),
        },
    }
}

#[test]
fn rescale_preserves_midpoint_and_scales_width() {
    let (min, max) = rescale_interval(2.0, 10.0, 1.5).unwrap();
    assert_eq!((min, max), (0.0, 12.0));
    assert_eq!((min + max) / 2.0, 6.0);

    // identity factor leaves the interval untouched
    assert_eq!(rescale_interval(2.0, 10.0, 1.0).unwrap(), (2.0, 10.0));

    // shrink symmetrically
    let (min, max) = rescale_interval(0.0, 8.0, 0.5).unwrap();
    assert_eq!((min, max), (2.0, 6.0));
}

#[test]
fn rescale_rejects_non_positive_factors() {
    assert!(matches!(
        rescale_interval(0.0, 1.0, 0.0),
        Err(PlotError::BadZoomScale(_))
    ));
    assert!(matches!(
        rescale_interval(0.0, 1.0, -1.5),
        Err(PlotError::BadZoomScale(_))
    ));
}

#[test]
fn sine_sample_covers_the_full_swing() {
    let mut surface = HeadlessSurface::new();
    let axes = surface.add_axes();
    let mut workspace = Workspace::new();
    let id = workspace
        .add_zoom(&mut surface, axes, f64::sin, 0.0, 2.0 * PI)
        .unwrap();

    let zoom = workspace.zoom(id).unwrap();
    let (xs, _ys) = zoom.sample();
    assert_eq!(xs.len(), 100);
    assert!(xs.windows(2).all(|w| w[0] < w[1]), "x must increase strictly");
    assert_eq!(xs[0], 0.0);
    assert_eq!(xs[99], 2.0 * PI);

    let (y_min, y_max) = zoom.y_extent();
    assert!((y_min + 1.0).abs() < 1e-3, "y_min {y_min}");
    assert!((y_max - 1.0).abs() < 1e-3, "y_max {y_max}");

    // the axes were fitted to the sample
    assert_eq!(surface.axes_x_range(axes), (0.0, 2.0 * PI));
    assert_eq!(surface.axes_y_range(axes), (y_min, y_max));
}

#[test]
fn set_x_range_resamples_and_refits_y() {
    let mut surface = HeadlessSurface::new();
    let axes = surface.add_axes();
    let mut workspace = Workspace::new();
    let id = workspace
        .add_zoom(&mut surface, axes, f64::sin, 0.0, 2.0 * PI)
        .unwrap();
    let line = workspace.zoom(id).unwrap().line();

    let zoom = workspace.zoom_mut(id).unwrap();
    zoom.set_x_range(&mut surface, 0.0, PI / 2.0, false);

    assert_eq!(surface.axes_x_range(axes), (0.0, PI / 2.0));
    let xs = surface.line_xdata(line);
    assert_eq!(xs.len(), 100);
    assert_eq!(xs[99], PI / 2.0);
    // sin is nonnegative on [0, pi/2], so the refitted y floor is 0
    let (y_min, y_max) = surface.axes_y_range(axes);
    assert_eq!(y_min, 0.0);
    assert!((y_max - 1.0).abs() < 1e-3);
}

#[test]
fn set_y_range_leaves_the_sample_alone() {
    let mut surface = HeadlessSurface::new();
    let axes = surface.add_axes();
    let mut workspace = Workspace::new();
    let id = workspace
        .add_zoom(&mut surface, axes, f64::sin, 0.0, 2.0 * PI)
        .unwrap();

    let before = workspace.zoom(id).unwrap().sample().0.to_vec();
    let zoom = workspace.zoom_mut(id).unwrap();
    zoom.set_y_range(&mut surface, -5.0, 5.0, false);

    assert_eq!(surface.axes_y_range(axes), (-5.0, 5.0));
    assert_eq!(surface.axes_x_range(axes), (0.0, 2.0 * PI));
    assert_eq!(workspace.zoom(id).unwrap().sample().0, before.as_slice());
}

#[test]
fn set_function_defers_resampling_to_the_next_range_change() {
    let mut surface = HeadlessSurface::new();
    let axes = surface.add_axes();
    let mut workspace = Workspace::new();
    let id = workspace
        .add_zoom(&mut surface, axes, f64::sin, 0.0, 2.0 * PI)
        .unwrap();

    let zoom = workspace.zoom_mut(id).unwrap();
    zoom.set_function(f64::cos).unwrap();
    // still the sine sample
    assert_eq!(zoom.sample().1[0], 0.0);

    zoom.set_x_range(&mut surface, 0.0, 2.0 * PI, false);
    assert_eq!(zoom.sample().1[0], 1.0);
}

#[test]
fn set_npoints_resamples_in_place() {
    let mut surface = HeadlessSurface::new();
    let axes = surface.add_axes();
    let mut workspace = Workspace::new();
    let id = workspace
        .add_zoom(&mut surface, axes, f64::sin, 0.0, 2.0 * PI)
        .unwrap();
    surface.set_axes_y_range(axes, -3.0, 3.0);

    let zoom = workspace.zoom_mut(id).unwrap();
    zoom.set_npoints(&mut surface, 11);

    let (xs, ys) = zoom.sample();
    assert_eq!(xs.len(), 11);
    assert_eq!(ys.len(), 11);
    assert_eq!(zoom.x_extent(), (0.0, 2.0 * PI));
    // visible ranges are untouched
    assert_eq!(surface.axes_y_range(axes), (-3.0, 3.0));
}

#[test]
fn sample_count_is_floored_at_two() {
    let mut surface = HeadlessSurface::new();
    let axes = surface.add_axes();
    let mut workspace = Workspace::new();
    let id = workspace
        .add_zoom(&mut surface, axes, f64::sin, 0.0, 2.0 * PI)
        .unwrap();

    let zoom = workspace.zoom_mut(id).unwrap();
    zoom.set_npoints(&mut surface, 0);
    assert_eq!(zoom.npoints(), 2);
    assert_eq!(zoom.sample().0.len(), 2);
}

#[test]
fn singular_functions_are_accepted_but_nan_makers_are_not() {
    let mut surface = HeadlessSurface::new();
    let axes = surface.add_axes();
    let mut workspace = Workspace::new();

    // 1/x is singular at the probe point; allowed
    assert!(workspace
        .add_zoom(&mut surface, axes, |x: f64| 1.0 / x, 1.0, 2.0)
        .is_ok());

    let err = workspace
        .add_zoom(&mut surface, axes, |x: f64| (x - 1.0).sqrt(), 1.0, 2.0)
        .unwrap_err();
    assert!(matches!(err, PlotError::NotAFunction));
}

#[test]
fn press_moves_the_selection_and_the_highlight() {
    let mut surface = HeadlessSurface::new();
    let ax_a = surface.add_axes();
    let ax_b = surface.add_axes();
    let mut workspace = Workspace::new();
    let id_a = workspace
        .add_zoom(&mut surface, ax_a, f64::sin, 0.0, 2.0 * PI)
        .unwrap();
    let id_b = workspace.add_zoom(&mut surface, ax_b, |x| x, 0.0, 1.0).unwrap();

    assert_eq!(workspace.selected_zoom(), None);

    workspace.dispatch(&mut surface, &press_in(ax_a));
    assert_eq!(workspace.selected_zoom(), Some(id_a));
    assert!(surface.axes_highlight(ax_a).is_some());

    workspace.dispatch(&mut surface, &press_in(ax_b));
    assert_eq!(workspace.selected_zoom(), Some(id_b));
    assert!(surface.axes_highlight(ax_a).is_none());
    assert!(surface.axes_highlight(ax_b).is_some());

    // clicking the selected axes again changes nothing
    workspace.dispatch(&mut surface, &press_in(ax_b));
    assert_eq!(workspace.selected_zoom(), Some(id_b));
    assert!(surface.axes_highlight(ax_b).is_some());
}

#[test]
fn press_in_untagged_axes_does_not_select() {
    let mut surface = HeadlessSurface::new();
    let ax_zoom = surface.add_axes();
    let ax_plain = surface.add_axes();
    let mut workspace = Workspace::new();
    workspace
        .add_zoom(&mut surface, ax_zoom, f64::sin, 0.0, 2.0 * PI)
        .unwrap();

    workspace.dispatch(&mut surface, &press_in(ax_plain));
    assert_eq!(workspace.selected_zoom(), None);
}

#[test]
fn scroll_zooms_both_axes_of_the_selected_plot() {
    let mut surface = HeadlessSurface::new();
    let axes = surface.add_axes();
    let mut workspace = Workspace::new();
    workspace.add_zoom(&mut surface, axes, |x| x, 0.0, 1.0).unwrap();

    // not selected yet: scrolling is a no-op
    workspace.dispatch(&mut surface, &scroll_in(axes, 1.0));
    assert_eq!(surface.axes_x_range(axes), (0.0, 1.0));

    workspace.dispatch(&mut surface, &press_in(axes));
    workspace.dispatch(&mut surface, &scroll_in(axes, 1.0));

    // scroll-up zooms out by 1.05 around the midpoint; for the identity
    // function the refitted y extent equals the new x interval, which is
    // then itself rescaled
    let (ex_min, ex_max) = rescale_interval(0.0, 1.0, 1.05).unwrap();
    let (x_min, x_max) = surface.axes_x_range(axes);
    assert!((x_min - ex_min).abs() < 1e-12);
    assert!((x_max - ex_max).abs() < 1e-12);

    let (ey_min, ey_max) = rescale_interval(ex_min, ex_max, 1.05).unwrap();
    let (y_min, y_max) = surface.axes_y_range(axes);
    assert!((y_min - ey_min).abs() < 1e-12);
    assert!((y_max - ey_max).abs() < 1e-12);
}

#[test]
fn scale_x_steps_a_specific_controller() {
    let mut surface = HeadlessSurface::new();
    let ax_a = surface.add_axes();
    let ax_b = surface.add_axes();
    let mut workspace = Workspace::new();
    let id_a = workspace.add_zoom(&mut surface, ax_a, |x| x, 0.0, 1.0).unwrap();
    workspace.add_zoom(&mut surface, ax_b, |x| x, 0.0, 1.0).unwrap();

    // unlike scale_y, scale_x addresses the controller it is called for,
    // selected or not
    workspace
        .scale_x(&mut surface, id_a, DEFAULT_ZOOM_FACTOR, false)
        .unwrap();
    let expected = rescale_interval(0.0, 1.0, DEFAULT_ZOOM_FACTOR).unwrap();
    assert_eq!(surface.axes_x_range(ax_a), expected);
    assert_eq!(surface.axes_x_range(ax_b), (0.0, 1.0));

    assert!(matches!(
        workspace.scale_x(&mut surface, id_a, 0.0, false),
        Err(PlotError::BadZoomScale(_))
    ));
}

#[test]
fn scroll_over_someone_elses_axes_is_ignored() {
    let mut surface = HeadlessSurface::new();
    let ax_a = surface.add_axes();
    let ax_b = surface.add_axes();
    let mut workspace = Workspace::new();
    workspace
        .add_zoom(&mut surface, ax_a, f64::sin, 0.0, 2.0 * PI)
        .unwrap();
    workspace.add_zoom(&mut surface, ax_b, |x| x, 0.0, 1.0).unwrap();

    workspace.dispatch(&mut surface, &press_in(ax_a));
    // pointer over B while A is selected: nobody zooms
    workspace.dispatch(&mut surface, &scroll_in(ax_b, 1.0));
    assert_eq!(surface.axes_x_range(ax_a), (0.0, 2.0 * PI));
    assert_eq!(surface.axes_x_range(ax_b), (0.0, 1.0));
}

#[test]
fn scale_y_acts_on_the_selected_plot_only() {
    let mut surface = HeadlessSurface::new();
    let ax_a = surface.add_axes();
    let ax_b = surface.add_axes();
    let mut workspace = Workspace::new();
    workspace.add_zoom(&mut surface, ax_a, |x| x, 0.0, 1.0).unwrap();
    workspace.add_zoom(&mut surface, ax_b, |x| x, 0.0, 1.0).unwrap();

    // nothing selected: no-op, not an error, even for a factor that would
    // fail validation (the selection check runs first)
    workspace.scale_y(&mut surface, 2.0, false).unwrap();
    assert!(workspace.scale_y(&mut surface, -1.0, false).is_ok());
    assert_eq!(surface.axes_y_range(ax_a), (0.0, 1.0));
    assert_eq!(surface.axes_y_range(ax_b), (0.0, 1.0));

    workspace.dispatch(&mut surface, &press_in(ax_a));
    workspace.scale_y(&mut surface, 2.0, false).unwrap();
    assert_eq!(surface.axes_y_range(ax_a), (-0.5, 1.5));
    assert_eq!(surface.axes_y_range(ax_b), (0.0, 1.0));

    // with a selection in place the factor is validated
    assert!(matches!(
        workspace.scale_y(&mut surface, -1.0, false),
        Err(PlotError::BadZoomScale(_))
    ));
}

#[test]
fn zoom_buttons_attach_once_and_drive_the_selection() {
    let mut surface = HeadlessSurface::new();
    let axes = surface.add_axes();
    let mut workspace = Workspace::new();
    workspace.add_zoom(&mut surface, axes, |x| x, 0.0, 1.0).unwrap();

    workspace.add_zoom_buttons(&mut surface);
    workspace.add_zoom_buttons(&mut surface);
    assert_eq!(surface.button_count(), 4, "attaching twice is a no-op");

    // button ids in placement order: X+, X-, Y+, Y-
    // with no selection the buttons do nothing
    workspace.dispatch(&mut surface, &SurfaceEvent::ButtonPressed(1));
    assert_eq!(surface.axes_x_range(axes), (0.0, 1.0));

    workspace.dispatch(&mut surface, &press_in(axes));
    workspace.dispatch(&mut surface, &SurfaceEvent::ButtonPressed(1));
    let expected = rescale_interval(0.0, 1.0, 1.5).unwrap();
    assert_eq!(surface.axes_x_range(axes), expected);

    workspace.dispatch(&mut surface, &SurfaceEvent::ButtonPressed(2));
    let (y_min, y_max) = surface.axes_y_range(axes);
    let (ey_min, ey_max) = rescale_interval(expected.0, expected.1, 1.0 / 1.5).unwrap();
    assert!((y_min - ey_min).abs() < 1e-12);
    assert!((y_max - ey_max).abs() < 1e-12);
}

#[test]
fn removing_the_selected_zoom_clears_selection_and_highlight() {
    let mut surface = HeadlessSurface::new();
    let axes = surface.add_axes();
    let mut workspace = Workspace::new();
    let id = workspace.add_zoom(&mut surface, axes, |x| x, 0.0, 1.0).unwrap();

    workspace.dispatch(&mut surface, &press_in(axes));
    assert_eq!(workspace.selected_zoom(), Some(id));

    workspace.remove(&mut surface, id);
    assert_eq!(workspace.selected_zoom(), None);
    assert!(surface.axes_highlight(axes).is_none());
    // scrolling the orphaned axes no longer zooms
    workspace.dispatch(&mut surface, &scroll_in(axes, 1.0));
    assert_eq!(surface.axes_x_range(axes), (0.0, 1.0));
}
