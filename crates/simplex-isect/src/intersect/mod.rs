//! Boundary–boundary intersection points of two N-simplices.
//!
//! Purpose
//! - Find every point where a face of `s1` crosses a face of `s2`, with dual
//!   barycentric coordinates on both simplices, as input to exact
//!   intersection volumes.
//!
//! Pipeline (per call)
//! - Enumerate face labels of both simplices (`boundary::enumerate_labels`).
//! - Stream the admissible pairs (`boundary::admissible_pairs`).
//! - Orient each pair, run the rank test on Γ (`rank`), solve and gate (`solve`).
//! - Append accepted points to an `IntersectionPoints` buffer.
//!
//! Numerics
//! - Rank and solve both use `IntersectCfg::tol` as the singular-value cut-off.
//! - Degenerate pairs yield nothing; only precondition violations are errors.
//! - Pairs are independent and read only the immutable `SimplexPair`, so the
//!   loop is a plain filter-map and could be split across threads unchanged.

mod cfg;
mod error;
mod rank;
mod solve;
mod types;

pub use cfg::{IntersectCfg, DEFAULT_TOL, EXPANSION_SUM_EPS, MAX_DIM};
pub use error::{IntersectError, Rejection, Side};
pub use rank::{augment_ones, Oriented, RankTest};
pub use solve::{solve, Solution};
pub use types::{IntersectionPoints, IntersectionVertex, SimplexPair};

use crate::boundary::{admissible_pairs, enumerate_labels, CandidatePair};

/// Boundary intersections of `pair` with tolerance `tol` (other settings default).
pub fn boundary_intersections(
    pair: &SimplexPair,
    tol: f64,
) -> Result<IntersectionPoints, IntersectError> {
    boundary_intersections_with_cfg(pair, &IntersectCfg::with_tol(tol))
}

/// Boundary intersections of `pair` under `cfg`.
///
/// Returns one row per crossing point; `points()` is `D×N`, `coeffs()` is
/// `D×(2N+2)`, and `D` may be zero.
#[tracing::instrument(level = "debug", skip_all, fields(dim = pair.dim(), tol = cfg.tol))]
pub fn boundary_intersections_with_cfg(
    pair: &SimplexPair,
    cfg: &IntersectCfg,
) -> Result<IntersectionPoints, IntersectError> {
    pair.validate(cfg)?;
    let n = pair.dim();
    let labels1 = enumerate_labels(n, pair.num1in2)?;
    let labels2 = enumerate_labels(n, pair.num2in1)?;

    let mut out = IntersectionPoints::new(n);
    let mut admitted = 0usize;
    for cand in admissible_pairs(&labels1, &labels2, n, pair.ncomm) {
        admitted += 1;
        match evaluate_pair(pair, cand, cfg.tol) {
            Ok(v) => out.push(v),
            Err(reason) => {
                tracing::trace!(s1 = %cand.s1, s2 = %cand.s2, %reason, "pair rejected");
            }
        }
    }
    tracing::debug!(
        labels1 = labels1.len(),
        labels2 = labels2.len(),
        admitted,
        accepted = out.len(),
        "boundary intersections"
    );
    Ok(out)
}

/// Run the rank test and the solve for one admitted pair.
///
/// `pair` must have passed `SimplexPair::validate`.
pub fn evaluate_pair(
    pair: &SimplexPair,
    cand: CandidatePair,
    tol: f64,
) -> Result<IntersectionVertex, Rejection> {
    let oriented = Oriented::new(pair, cand);
    let gamma = oriented.gamma();
    RankTest::run(&gamma, tol).check(tol)?;
    let sol = solve(pair, &oriented, &gamma, tol)?;
    Ok(sol.into_vertex(&oriented, pair.dim()))
}
