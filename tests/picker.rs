use dragplot::picker::{nearest, nearest_normalized};

#[test]
fn nearest_returns_closest_point() {
    let xs = [0.0, 10.0, 10.0, 0.0];
    let ys = [0.0, 0.0, 10.0, 10.0];
    let (i, px, py) = nearest(&xs, &ys, 6.0, 6.0).unwrap();
    assert_eq!(i, 2);
    assert_eq!((px, py), (10.0, 10.0));
}

#[test]
fn nearest_tie_breaks_to_lowest_index() {
    // (5, 5) is equidistant from all four corners
    let xs = [0.0, 10.0, 10.0, 0.0];
    let ys = [0.0, 0.0, 10.0, 10.0];
    let (i, px, py) = nearest(&xs, &ys, 5.0, 5.0).unwrap();
    assert_eq!(i, 0, "ties resolve to the first point in insertion order");
    assert_eq!((px, py), (0.0, 0.0));
}

#[test]
fn nearest_empty_series_is_none() {
    assert!(nearest(&[], &[], 1.0, 2.0).is_none());
    assert!(nearest_normalized(&[], &[], 1.0, 2.0, 1.0, 1.0).is_none());
}

#[test]
fn normalized_pick_follows_screen_proximity() {
    // x spans 1000 units, y spans 1: a 50-unit x offset looks tiny on
    // screen while a 9-unit y offset is enormous
    let xs = [950.0, 1000.0];
    let ys = [10.0, 1.0];
    let (i, d) = nearest_normalized(&xs, &ys, 950.0, 1.0, 1000.0, 1.0).unwrap();
    assert_eq!(i, 1);
    assert!((d - 0.05).abs() < 1e-12, "expected 0.05, got {d}");
}

#[test]
fn normalized_pick_invariant_under_uniform_range_change() {
    let xs = [0.0, 3.0];
    let ys = [4.0, 0.0];
    let (i1, d1) = nearest_normalized(&xs, &ys, 0.0, 0.0, 10.0, 1.0).unwrap();
    let (i2, d2) = nearest_normalized(&xs, &ys, 0.0, 0.0, 20.0, 2.0).unwrap();
    assert_eq!(i1, i2);
    assert!((d1 - 2.0 * d2).abs() < 1e-12);
}

#[test]
fn normalized_pick_changes_when_one_range_changes() {
    let xs = [0.0, 3.0];
    let ys = [4.0, 0.0];
    // equal ranges: the y-offset point is closer
    let (i, _) = nearest_normalized(&xs, &ys, 0.0, 0.0, 1.0, 1.0).unwrap();
    assert_eq!(i, 1);
    // stretch the y range and the x-offset point loses
    let (i, _) = nearest_normalized(&xs, &ys, 0.0, 0.0, 1.0, 10.0).unwrap();
    assert_eq!(i, 0);
}

#[test]
fn normalized_pick_with_zero_range_never_matches() {
    let xs = [1.0, 2.0];
    let ys = [1.0, 2.0];
    // distances degenerate to non-finite; no index may be reported as a
    // finite-distance match
    if let Some((_, d)) = nearest_normalized(&xs, &ys, 0.0, 0.0, 0.0, 1.0) {
        assert!(!(d <= 0.1), "zero-range distance must not select: {d}");
    }
}
