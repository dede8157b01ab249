//! Vertex set of the intersection polytope `s1 ∩ s2`.

use nalgebra::DVector;

use crate::intersect::{
    boundary_intersections, IntersectError, IntersectionPoints, IntersectionVertex, Side,
    SimplexPair,
};

/// All vertices of `s1 ∩ s2` with dual barycentric coordinates.
///
/// Rows, in order: the `s1` vertices inside `s2` (shared ones once), the
/// non-shared `s2` vertices inside `s1`, then the boundary crossings. Weights
/// within `tol` of zero are set to zero.
pub fn polytope_vertices(pair: &SimplexPair, tol: f64) -> Result<IntersectionPoints, IntersectError> {
    let crossings = boundary_intersections(pair, tol)?;
    let n = pair.dim();
    let width = n + 1;
    let mut out = IntersectionPoints::new(n);

    for (k, &i) in pair.order1[..pair.num1in2].iter().enumerate() {
        let mut coeffs = DVector::<f64>::zeros(2 * width);
        coeffs[i] = 1.0;
        if k < pair.ncomm {
            coeffs[width + pair.order2[k]] = 1.0;
        } else {
            scatter_cleaned(&mut coeffs, width, pair.s1_in_s2.column(i).iter(), tol);
        }
        out.push(IntersectionVertex {
            point: pair.simplex(Side::S1).column(i).into_owned(),
            coeffs,
        });
    }
    for &j in &pair.order2[pair.ncomm..pair.num2in1] {
        let mut coeffs = DVector::<f64>::zeros(2 * width);
        scatter_cleaned(&mut coeffs, 0, pair.s2_in_s1.column(j).iter(), tol);
        coeffs[width + j] = 1.0;
        out.push(IntersectionVertex {
            point: pair.simplex(Side::S2).column(j).into_owned(),
            coeffs,
        });
    }
    let inside = out.len();
    out.extend(crossings);
    tracing::debug!(inside, total = out.len(), "intersection polytope vertices");
    Ok(out)
}

fn scatter_cleaned<'a>(
    coeffs: &mut DVector<f64>,
    offset: usize,
    weights: impl Iterator<Item = &'a f64>,
    tol: f64,
) {
    for (k, &w) in weights.enumerate() {
        coeffs[offset + k] = if w.abs() <= tol { 0.0 } else { w };
    }
}
