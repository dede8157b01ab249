//! Orientation of a candidate pair and the minimality/rank test.
//!
//! Math
//! - Let the reference face `R` (r vertices) belong to simplex A and the target
//!   face `T` (s vertices) to simplex B. A point `x = Σ λ_j b_j` (`j ∈ T`,
//!   `Σ λ = 1`) expands in A's frame as `E λ`, with `E` the expansion of B's
//!   vertices in A. `x` lies in the affine hull of `R` iff `E λ` vanishes on
//!   every A-vertex outside `R`.
//! - Γ is `E` restricted to rows `A ∖ R` and columns `T`. The hulls meet in
//!   exactly one point iff the system `Γ λ = 0, 1ᵀλ = 1` has a unique solution:
//!   `rank(Γ) = s - 1` and `rank([Γ;1ᵀ]) = rank(Γ) + 1`.

use nalgebra::{DMatrix, SVD};

use super::error::{Rejection, Side};
use super::types::SimplexPair;
use crate::boundary::{BoundaryLabel, CandidatePair};

/// Candidate pair split into reference (larger) and target (smaller) face.
///
/// All index lists hold *original* vertex indices, in ascending ordered-position order.
#[derive(Clone, Debug)]
pub struct Oriented<'a> {
    pub reference_side: Side,
    /// Vertices spanning the reference face.
    pub reference: Vec<usize>,
    /// Reference-simplex vertices outside the reference face (rows of Γ).
    pub outside: Vec<usize>,
    /// Vertices spanning the target face (columns of Γ).
    pub target: Vec<usize>,
    /// Target simplex's vertices expanded in the reference simplex's frame.
    pub expansion: &'a DMatrix<f64>,
}

impl<'a> Oriented<'a> {
    /// Orient `cand`; ties in face size make the `s1` face the reference.
    pub fn new(pair: &'a SimplexPair, cand: CandidatePair) -> Self {
        let (reference_side, ref_label, target_label) = if cand.s1.count() >= cand.s2.count() {
            (Side::S1, cand.s1, cand.s2)
        } else {
            (Side::S2, cand.s2, cand.s1)
        };
        let ref_order = pair.ordering(reference_side);
        let target_order = pair.ordering(reference_side.other());
        Self {
            reference_side,
            reference: to_vertices(&ref_label, ref_order, false),
            outside: to_vertices(&ref_label, ref_order, true),
            target: to_vertices(&target_label, target_order, false),
            expansion: pair.expansion_in(reference_side),
        }
    }

    #[inline]
    pub fn target_side(&self) -> Side {
        self.reference_side.other()
    }

    /// Γ: expansion rows outside the reference face, columns of the target face.
    pub fn gamma(&self) -> DMatrix<f64> {
        self.expansion
            .select_rows(&self.outside)
            .select_columns(&self.target)
    }

    /// β: expansion rows of the reference face except its first vertex, target columns.
    pub fn beta(&self) -> DMatrix<f64> {
        self.expansion
            .select_rows(&self.reference[1..])
            .select_columns(&self.target)
    }
}

fn to_vertices(label: &BoundaryLabel, order: &[usize], complement: bool) -> Vec<usize> {
    if complement {
        label.complement().map(|p| order[p]).collect()
    } else {
        label.positions().map(|p| order[p]).collect()
    }
}

/// Outcome of the rank test on Γ.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankTest {
    pub rank: usize,
    pub rank_aug: usize,
    /// Minimum over Γ's columns of the column's largest absolute entry.
    pub min_col_max: f64,
    /// Column count of Γ (target face size `s`).
    pub cols: usize,
}

impl RankTest {
    pub fn run(gamma: &DMatrix<f64>, tol: f64) -> Self {
        let min_col_max = gamma
            .column_iter()
            .map(|c| c.amax())
            .fold(f64::INFINITY, f64::min);
        Self {
            rank: svd_rank(gamma.clone(), tol),
            rank_aug: svd_rank(augment_ones(gamma), tol),
            min_col_max,
            cols: gamma.ncols(),
        }
    }

    /// Unique, well-defined crossing of the two affine hulls.
    pub fn check(&self, tol: f64) -> Result<(), Rejection> {
        if self.rank_aug != self.rank + 1 || self.rank + 1 != self.cols {
            return Err(Rejection::RankCondition {
                rank: self.rank,
                rank_aug: self.rank_aug,
                cols: self.cols,
            });
        }
        if !(self.min_col_max > tol) {
            return Err(Rejection::VanishingColumn {
                min_col_max: self.min_col_max,
            });
        }
        Ok(())
    }
}

/// `[Γ ; 1ᵀ]`: Γ with an all-ones row appended.
pub fn augment_ones(gamma: &DMatrix<f64>) -> DMatrix<f64> {
    gamma.clone().insert_row(gamma.nrows(), 1.0)
}

/// Numerical rank: singular values `> tol`.
pub(crate) fn svd_rank(m: DMatrix<f64>, tol: f64) -> usize {
    if m.is_empty() {
        return 0;
    }
    SVD::new(m, false, false).rank(tol)
}
