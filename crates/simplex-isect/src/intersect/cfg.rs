//! Tolerance defaults and limits for the boundary-intersection pipeline.
//!
//! Policy
//! - One tolerance drives rank decisions, zero detection and the SVD solve, so
//!   the rank test and the solve always agree on what counts as zero.
//! - Defaults are fixed constants; callers override through `IntersectCfg`.

/// Default tolerance for rank, zero detection and solve cut-off.
pub const DEFAULT_TOL: f64 = 1e-10;
/// Floor for the column-sum check on convex-expansion tables.
pub const EXPANSION_SUM_EPS: f64 = 1e-6;
/// Largest supported ambient dimension. The candidate-pair product grows like
/// `4^(N+1)`, which is already impractical well below this bound.
pub const MAX_DIM: usize = 16;

/// Pipeline configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectCfg {
    /// Singular values and weights with magnitude `<= tol` count as zero.
    pub tol: f64,
    /// Verify that both expansion tables have columns summing to 1.
    pub check_expansions: bool,
}

impl Default for IntersectCfg {
    fn default() -> Self {
        Self {
            tol: DEFAULT_TOL,
            check_expansions: true,
        }
    }
}

impl IntersectCfg {
    #[inline]
    pub fn with_tol(tol: f64) -> Self {
        Self {
            tol,
            ..Self::default()
        }
    }

    /// Allowed deviation of an expansion column sum from 1.
    #[inline]
    pub(crate) fn expansion_sum_eps(&self) -> f64 {
        self.tol.max(EXPANSION_SUM_EPS)
    }
}
