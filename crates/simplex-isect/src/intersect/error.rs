//! Precondition failures and per-pair rejection reasons.

use std::fmt;

use thiserror::Error;

use crate::boundary::LabelError;

/// Which of the two simplices an error or a boundary refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    S1,
    S2,
}

impl Side {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Side::S1 => Side::S2,
            Side::S2 => Side::S1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::S1 => write!(f, "s1"),
            Side::S2 => write!(f, "s2"),
        }
    }
}

/// Precondition violations. Geometric degeneracy is never an error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IntersectError {
    #[error("tolerance must be finite and > 0, got {0}")]
    InvalidTolerance(f64),
    #[error("dimension {dim} outside the supported range 1..={max}")]
    Dimension { dim: usize, max: usize },
    #[error("simplex {side} is {rows}x{cols}, expected {expected_rows}x{expected_cols}")]
    SimplexShape {
        side: Side,
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },
    #[error("simplex {side} has non-finite coordinates")]
    NonFiniteSimplex { side: Side },
    #[error("expansion of {side} vertices is {rows}x{cols}, expected {n}x{n}")]
    ExpansionShape {
        side: Side,
        rows: usize,
        cols: usize,
        n: usize,
    },
    #[error("expansion of {side} vertices: column {col} sums to {sum}, expected 1")]
    ExpansionNotConvex { side: Side, col: usize, sum: f64 },
    #[error("ordering of {side} is not a permutation of 0..={max}")]
    NotAPermutation { side: Side, max: usize },
    #[error("{name} = {value} out of range 0..={max}")]
    CountOutOfRange {
        name: &'static str,
        value: usize,
        max: usize,
    },
    #[error(transparent)]
    Label(#[from] LabelError),
}

impl IntersectError {
    pub(crate) fn count(name: &'static str, value: usize, max: usize) -> Self {
        Self::CountOutOfRange { name, value, max }
    }
}

/// Why a candidate pair produced no point. The pipeline only logs these.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rejection {
    /// `rank([Γ;1ᵀ]) - rank(Γ) != 1` or `rank(Γ) != s - 1`.
    RankCondition { rank: usize, rank_aug: usize, cols: usize },
    /// Some target vertex has an all-zero column in Γ.
    VanishingColumn { min_col_max: f64 },
    /// The SVD solve failed.
    Solve,
    /// A reference or target weight is not strictly positive.
    NonPositiveWeight,
    /// Fewer than two non-zero reference weights.
    NonMinimal { nonzero: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::RankCondition {
                rank,
                rank_aug,
                cols,
            } => write!(
                f,
                "rank condition failed (rank {rank}, augmented {rank_aug}, columns {cols})"
            ),
            Rejection::VanishingColumn { min_col_max } => {
                write!(f, "vanishing column (max abs {min_col_max:e})")
            }
            Rejection::Solve => write!(f, "least-squares solve failed"),
            Rejection::NonPositiveWeight => write!(f, "non-positive weight"),
            Rejection::NonMinimal { nonzero } => {
                write!(f, "non-minimal pair ({nonzero} non-zero reference weights)")
            }
        }
    }
}
