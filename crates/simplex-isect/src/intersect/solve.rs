//! Constrained solve for the target weights and reconstruction of the point.

use nalgebra::{DMatrix, DVector, SVD};

use super::error::{Rejection, Side};
use super::rank::{augment_ones, Oriented};
use super::types::{IntersectionVertex, SimplexPair};

/// Weights of an accepted crossing, in the oriented faces' vertex order.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// Reference-face weights (length r).
    pub alpha: DVector<f64>,
    /// Target-face weights (length s).
    pub lambda: DVector<f64>,
    pub point: DVector<f64>,
}

/// Solve `[Γ;1ᵀ] λ = [0;1]` by SVD least squares, derive α, and gate on positivity.
///
/// α is recovered from the expansion: `α[1..] = β λ`, `α[0] = 1 - Σ α[1..]`.
/// Entries with `|x| <= tol` are zeroed before the gate. Accepted only if every
/// α and λ entry is strictly positive and at least two α entries are non-zero;
/// a zero weight means the point lies on a smaller face and belongs to that
/// (smaller) pair instead.
pub fn solve(
    pair: &SimplexPair,
    oriented: &Oriented<'_>,
    gamma: &DMatrix<f64>,
    tol: f64,
) -> Result<Solution, Rejection> {
    let aug = augment_ones(gamma);
    let mut rhs = DVector::<f64>::zeros(aug.nrows());
    rhs[aug.nrows() - 1] = 1.0;
    let svd = SVD::new(aug, true, true);
    let mut lambda = svd.solve(&rhs, tol).map_err(|_| Rejection::Solve)?;
    if lambda.iter().any(|x| !x.is_finite()) {
        return Err(Rejection::Solve);
    }

    let tail = oriented.beta() * &lambda;
    let mut alpha = DVector::<f64>::zeros(oriented.reference.len());
    alpha[0] = 1.0 - tail.sum();
    alpha.rows_mut(1, tail.len()).copy_from(&tail);

    zero_small(&mut alpha, tol);
    zero_small(&mut lambda, tol);
    if alpha.iter().chain(lambda.iter()).any(|&x| x <= 0.0) {
        return Err(Rejection::NonPositiveWeight);
    }
    let nonzero = alpha.iter().filter(|&&x| x != 0.0).count();
    if nonzero < 2 {
        return Err(Rejection::NonMinimal { nonzero });
    }

    let target_vertices = pair
        .simplex(oriented.target_side())
        .select_columns(&oriented.target);
    let point = target_vertices * &lambda;
    Ok(Solution {
        alpha,
        lambda,
        point,
    })
}

impl Solution {
    /// Scatter α and λ into the `2N+2` dual barycentric vector.
    pub fn into_vertex(self, oriented: &Oriented<'_>, dim: usize) -> IntersectionVertex {
        let width = dim + 1;
        let offset = |side: Side| match side {
            Side::S1 => 0,
            Side::S2 => width,
        };
        let mut coeffs = DVector::<f64>::zeros(2 * width);
        let ref_off = offset(oriented.reference_side);
        for (k, &v) in oriented.reference.iter().enumerate() {
            coeffs[ref_off + v] = self.alpha[k];
        }
        let target_off = offset(oriented.target_side());
        for (k, &v) in oriented.target.iter().enumerate() {
            coeffs[target_off + v] = self.lambda[k];
        }
        IntersectionVertex {
            point: self.point,
            coeffs,
        }
    }
}

fn zero_small(v: &mut DVector<f64>, tol: f64) {
    for x in v.iter_mut() {
        if x.abs() <= tol {
            *x = 0.0;
        }
    }
}
