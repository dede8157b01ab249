//! Candidate face pairs and the generic-position filter.

use super::labels::BoundaryLabel;

/// A face of simplex 1 paired with a face of simplex 2. Evaluated once, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CandidatePair {
    pub s1: BoundaryLabel,
    pub s2: BoundaryLabel,
}

/// O(1) admission test for a face pair in an N-simplex pair.
///
/// Rejects pairs sharing a position in the common prefix `0..ncomm` (they meet
/// at the shared vertex, which is not a boundary crossing) and pairs spanned by
/// more than N+2 vertices in total (generically their crossing is not a point).
#[inline]
pub fn is_admissible(l1: &BoundaryLabel, l2: &BoundaryLabel, dim: usize, ncomm: usize) -> bool {
    let common = if ncomm >= 32 {
        u32::MAX
    } else {
        (1u32 << ncomm) - 1
    };
    let no_common_vertex = l1.mask() & l2.mask() & common == 0;
    let total_vertex_count = l1.count() + l2.count();
    no_common_vertex && total_vertex_count <= dim + 2
}

/// Lazily iterate the admissible part of `labels1 × labels2` (labels1 outer).
pub fn admissible_pairs<'a>(
    labels1: &'a [BoundaryLabel],
    labels2: &'a [BoundaryLabel],
    dim: usize,
    ncomm: usize,
) -> impl Iterator<Item = CandidatePair> + 'a {
    labels1.iter().flat_map(move |l1| {
        labels2
            .iter()
            .filter(move |l2| is_admissible(l1, l2, dim, ncomm))
            .map(move |l2| CandidatePair { s1: *l1, s2: *l2 })
    })
}
