//! Nearest-point queries over a point series.

/// Index and coordinates of the point closest to `(x, y)` in raw data
/// units. Ties resolve to the lowest index (first point in insertion
/// order). Returns `None` for an empty series.
pub fn nearest(xs: &[f64], ys: &[f64], x: f64, y: f64) -> Option<(usize, f64, f64)> {
    let n = xs.len().min(ys.len());
    let mut best_i = None;
    let mut best_d = f64::INFINITY;
    for i in 0..n {
        let d = (x - xs[i]).hypot(y - ys[i]);
        if d < best_d {
            best_d = d;
            best_i = Some(i);
        }
    }
    best_i.map(|i| (i, xs[i], ys[i]))
}

/// Like [`nearest`], but each axis delta is divided by that axis's visible
/// range first, so proximity is judged as it appears on screen rather than
/// in data units. Returns the index and the normalized distance.
///
/// A zero visible range makes the normalized distances non-finite; callers
/// comparing the result against a select radius then never match, which is
/// the safe outcome.
pub fn nearest_normalized(
    xs: &[f64],
    ys: &[f64],
    x: f64,
    y: f64,
    x_range: f64,
    y_range: f64,
) -> Option<(usize, f64)> {
    let n = xs.len().min(ys.len());
    let mut best_i = None;
    let mut best_d = f64::INFINITY;
    for i in 0..n {
        let d = ((x - xs[i]) / x_range).hypot((y - ys[i]) / y_range);
        if d < best_d {
            best_d = d;
            best_i = Some(i);
        }
    }
    best_i.map(|i| (i, best_d))
}
