//! Shared/inside vertex classification and the two vertex orderings.

use nalgebra::DMatrix;

/// Orderings and counts derived from the two convex expansions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub order1: Vec<usize>,
    pub order2: Vec<usize>,
    pub num1in2: usize,
    pub num2in1: usize,
    pub ncomm: usize,
}

/// Classify the vertices of both simplices from their mutual expansions.
///
/// `s2_in_s1` column `j` is vertex `j` of `s2` in `s1`'s frame; `s1_in_s2`
/// likewise. Vertex `i` of `s1` is shared with vertex `j` of `s2` when its
/// `s2`-frame column is the unit vector `e_j` up to `tol`.
pub fn classify(s2_in_s1: &DMatrix<f64>, s1_in_s2: &DMatrix<f64>, tol: f64) -> Classification {
    let width = s1_in_s2.ncols();

    let mut shared: Vec<(usize, usize)> = Vec::new();
    let mut taken = vec![false; width];
    for i in 0..width {
        if let Some(j) = unit_index(s1_in_s2.column(i).iter().copied(), tol) {
            if !taken[j] {
                taken[j] = true;
                shared.push((i, j));
            }
        }
    }
    let ncomm = shared.len();
    let shared1: Vec<usize> = shared.iter().map(|&(i, _)| i).collect();
    let shared2: Vec<usize> = shared.iter().map(|&(_, j)| j).collect();

    let inside1: Vec<bool> = (0..width)
        .map(|i| s1_in_s2.column(i).iter().all(|&w| w >= -tol))
        .collect();
    let inside2: Vec<bool> = (0..width)
        .map(|j| s2_in_s1.column(j).iter().all(|&w| w >= -tol))
        .collect();

    let (order1, num1in2) = ordering(&shared1, &inside1);
    let (order2, num2in1) = ordering(&shared2, &inside2);
    Classification {
        order1,
        order2,
        num1in2,
        num2in1,
        ncomm,
    }
}

/// Shared first (in the given order), then inside, then outside.
fn ordering(shared: &[usize], inside: &[bool]) -> (Vec<usize>, usize) {
    let mut order = shared.to_vec();
    let rest = (0..inside.len()).filter(|i| !shared.contains(i));
    let (ins, outs): (Vec<usize>, Vec<usize>) = rest.partition(|&i| inside[i]);
    order.extend(&ins);
    let count = order.len();
    order.extend(outs);
    (order, count)
}

/// Index `j` if `col ≈ e_j` within `tol`.
fn unit_index(col: impl Iterator<Item = f64>, tol: f64) -> Option<usize> {
    let mut hit = None;
    for (k, w) in col.enumerate() {
        if (w - 1.0).abs() <= tol {
            if hit.is_some() {
                return None;
            }
            hit = Some(k);
        } else if w.abs() > tol {
            return None;
        }
    }
    hit
}
