//! Preparation of a raw simplex pair, and the full vertex set of `s1 ∩ s2`.
//!
//! Purpose
//! - `prepare` turns two coordinate tables into the `SimplexPair` the
//!   intersection pipeline reads: both convex expansions, the shared vertices,
//!   the inside/outside split and the two vertex orderings.
//! - `polytope_vertices` adds the vertices of each simplex lying in the other
//!   to the boundary crossings, giving every vertex of the intersection
//!   polytope with its dual barycentric coordinates.
//!
//! Conventions
//! - Shared vertex: a column of `s1_in_s2` within `tol` of a unit vector.
//! - Inside vertex: every barycentric weight in the other frame is `>= -tol`.
//!   Shared vertices count as inside for both simplices.
//! - Orderings: shared vertices first (paired by position), then the other
//!   inside vertices, then the outside ones, each group ascending by index.

mod classify;
mod expansion;
mod vertices;

pub use classify::{classify, Classification};
pub use expansion::convex_expansion;
pub use vertices::polytope_vertices;

use nalgebra::DMatrix;
use thiserror::Error;

use crate::intersect::{Side, SimplexPair, MAX_DIM};

/// Errors from `prepare`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PrepError {
    #[error("tolerance must be finite and > 0, got {0}")]
    InvalidTolerance(f64),
    #[error("simplex {side} is {rows}x{cols}, expected Nx(N+1) with N = {dim}")]
    Shape {
        side: Side,
        rows: usize,
        cols: usize,
        dim: usize,
    },
    #[error("dimension {dim} outside the supported range 1..={max}")]
    Dimension { dim: usize, max: usize },
    #[error("simplex {side} is degenerate (vertices affinely dependent)")]
    Degenerate { side: Side },
}

/// Build the full `SimplexPair` for two `N×(N+1)` simplices.
pub fn prepare(s1: &DMatrix<f64>, s2: &DMatrix<f64>, tol: f64) -> Result<SimplexPair, PrepError> {
    if !(tol.is_finite() && tol > 0.0) {
        return Err(PrepError::InvalidTolerance(tol));
    }
    let n = s1.nrows();
    if n == 0 || n > MAX_DIM {
        return Err(PrepError::Dimension {
            dim: n,
            max: MAX_DIM,
        });
    }
    for (side, s) in [(Side::S1, s1), (Side::S2, s2)] {
        if s.nrows() != n || s.ncols() != n + 1 {
            return Err(PrepError::Shape {
                side,
                rows: s.nrows(),
                cols: s.ncols(),
                dim: n,
            });
        }
    }
    let s2_in_s1 = convex_expansion(s1, s2).ok_or(PrepError::Degenerate { side: Side::S1 })?;
    let s1_in_s2 = convex_expansion(s2, s1).ok_or(PrepError::Degenerate { side: Side::S2 })?;
    let c = classify(&s2_in_s1, &s1_in_s2, tol);
    tracing::debug!(
        dim = n,
        shared = c.ncomm,
        num1in2 = c.num1in2,
        num2in1 = c.num2in1,
        "prepared simplex pair"
    );
    Ok(SimplexPair {
        s1: s1.clone(),
        s2: s2.clone(),
        s2_in_s1,
        s1_in_s2,
        order1: c.order1,
        order2: c.order2,
        num1in2: c.num1in2,
        num2in1: c.num2in1,
        ncomm: c.ncomm,
    })
}

#[cfg(test)]
mod tests;
