//! Convex (barycentric) expansion of points in a simplex frame.

use nalgebra::DMatrix;

/// Barycentric coordinates of the columns of `points` w.r.t. the vertices of `frame`.
///
/// Solves `[frame; 1ᵀ] X = [points; 1ᵀ]`; column `j` of `X` sums to 1 and
/// `frame * X = points`. Returns `None` if `frame` is affinely degenerate
/// (singular to working precision).
pub fn convex_expansion(frame: &DMatrix<f64>, points: &DMatrix<f64>) -> Option<DMatrix<f64>> {
    let n = frame.nrows();
    let a = frame.clone().insert_row(n, 1.0);
    let sv = a.singular_values();
    if sv.min() <= f64::EPSILON * sv.max() * (n + 1) as f64 {
        return None;
    }
    let b = points.clone().insert_row(points.nrows(), 1.0);
    let x = a.lu().solve(&b)?;
    if x.iter().any(|v| !v.is_finite()) {
        return None;
    }
    Some(x)
}
