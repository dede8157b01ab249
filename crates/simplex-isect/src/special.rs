//! Named simplices used in tests, benches and the CLI sampler.
//!
//! All constructors return `N×(N+1)` matrices (one column per vertex).

use nalgebra::{DMatrix, DVector};

/// Standard simplex `conv{0, e_1, …, e_N}` scaled by `a`.
pub fn standard_simplex(dim: usize, a: f64) -> DMatrix<f64> {
    DMatrix::from_fn(dim, dim + 1, |r, c| if c == r + 1 { a } else { 0.0 })
}

/// Simplex given by its vertex list (each of length N).
///
/// Returns `None` unless there are exactly N+1 vertices of equal length N.
pub fn from_vertices(vertices: &[Vec<f64>]) -> Option<DMatrix<f64>> {
    let n = vertices.len().checked_sub(1)?;
    if vertices.iter().any(|v| v.len() != n) {
        return None;
    }
    Some(DMatrix::from_fn(n, n + 1, |r, c| vertices[c][r]))
}

/// Translate every vertex by `offset`.
pub fn translated(s: &DMatrix<f64>, offset: &DVector<f64>) -> DMatrix<f64> {
    let mut out = s.clone();
    for mut col in out.column_iter_mut() {
        col += offset;
    }
    out
}

/// Scale about the centroid by `factor`.
pub fn scaled_about_centroid(s: &DMatrix<f64>, factor: f64) -> DMatrix<f64> {
    let c = centroid(s);
    let mut out = s.clone();
    for mut col in out.column_iter_mut() {
        let v = &c + (&col - &c) * factor;
        col.copy_from(&v);
    }
    out
}

/// Vertex centroid.
pub fn centroid(s: &DMatrix<f64>) -> DVector<f64> {
    s.column_mean()
}

/// N-dimensional volume `|det(v_1 - v_0, …, v_N - v_0)| / N!`.
pub fn volume(s: &DMatrix<f64>) -> f64 {
    let n = s.nrows();
    let v0 = s.column(0);
    let edges = DMatrix::from_fn(n, n, |r, c| s[(r, c + 1)] - v0[r]);
    let fact: f64 = (1..=n).map(|k| k as f64).product();
    edges.determinant().abs() / fact
}
