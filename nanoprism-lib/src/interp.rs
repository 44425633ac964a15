/// Local cubic interpolation through four neighbouring samples.
///
/// The bracket index `i` is the last abscissa not above `x`, searched from
/// index 1. When every abscissa past the first is `<= x` (a query at or past
/// the end of the table) the bracket falls back to 0. The index is then
/// clamped to `[1, N - 3]` and the Lagrange cubic through
/// `xp[i - 1..=i + 2]` is evaluated at `x`. Queries outside the table are
/// extrapolated from that window; nothing is rejected here.
///
/// `xp` must be strictly increasing and `fp` must have the same length.
///
/// # Panics
/// Panics if `xp` holds fewer than 4 points or `fp` is shorter than `xp`.
/// [`OpticalConstantTable`](crate::tables::OpticalConstantTable) checks both
/// on construction.
pub fn interp_local(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    assert!(xp.len() >= 4, "local cubic interpolation needs at least 4 points");
    debug_assert_eq!(xp.len(), fp.len(), "xp and fp must have equal length");
    let i = bracket(x, xp);
    lagrange4(x, &xp[i - 1..i + 3], &fp[i - 1..i + 3])
}

/// Interpolates `fp` at every point of `x` (see [`interp_local`], including
/// its panics).
pub fn interp_local_many(x: &[f64], xp: &[f64], fp: &[f64]) -> Vec<f64> {
    x.iter().map(|&xi| interp_local(xi, xp, fp)).collect()
}

/// Start index of the 4-point window; the window is `i - 1..=i + 2`.
pub(crate) fn bracket(x: f64, xp: &[f64]) -> usize {
    let n = xp.len();
    debug_assert!(n >= 4, "local cubic interpolation needs at least 4 points");

    // First j >= 1 with xp[j] > x
    let j = 1 + xp[1..].partition_point(|&v| v <= x);
    let i = if j < n { j - 1 } else { 0 };
    i.clamp(1, n - 3)
}

fn lagrange4(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    (0..4)
        .map(|a| {
            let weight: f64 = (0..4)
                .filter(|&b| b != a)
                .map(|b| (x - xs[b]) / (xs[a] - xs[b]))
                .product();
            weight * ys[a]
        })
        .sum()
}
