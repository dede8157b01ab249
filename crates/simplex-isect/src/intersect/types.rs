//! Input bundle and output records.

use nalgebra::{DMatrix, DVector};

use super::cfg::{IntersectCfg, MAX_DIM};
use super::error::{IntersectError, Side};

/// Everything the pipeline reads about a simplex pair.
///
/// Invariants (checked by `validate`):
/// - `s1`, `s2` are `N×(N+1)`, one column per vertex.
/// - `s2_in_s1` column `j` holds vertex `j` of `s2` in barycentric
///   coordinates of `s1` (rows = `s1` vertices); `s1_in_s2` likewise.
/// - `order1`, `order2` are permutations of `0..=N`. For `k < ncomm`,
///   `order1[k]` and `order2[k]` are the same physical vertex. The first
///   `num1in2` entries of `order1` are the `s1` vertices inside `s2`, shared
///   ones first; `num2in1` and `order2` likewise.
#[derive(Clone, Debug, PartialEq)]
pub struct SimplexPair {
    pub s1: DMatrix<f64>,
    pub s2: DMatrix<f64>,
    pub s2_in_s1: DMatrix<f64>,
    pub s1_in_s2: DMatrix<f64>,
    pub order1: Vec<usize>,
    pub order2: Vec<usize>,
    pub num1in2: usize,
    pub num2in1: usize,
    pub ncomm: usize,
}

impl SimplexPair {
    /// Ambient dimension N.
    #[inline]
    pub fn dim(&self) -> usize {
        self.s1.nrows()
    }

    #[inline]
    pub fn simplex(&self, side: Side) -> &DMatrix<f64> {
        match side {
            Side::S1 => &self.s1,
            Side::S2 => &self.s2,
        }
    }

    /// Expansion of the *other* simplex's vertices in `frame`'s coordinates.
    #[inline]
    pub fn expansion_in(&self, frame: Side) -> &DMatrix<f64> {
        match frame {
            Side::S1 => &self.s2_in_s1,
            Side::S2 => &self.s1_in_s2,
        }
    }

    #[inline]
    pub fn ordering(&self, side: Side) -> &[usize] {
        match side {
            Side::S1 => &self.order1,
            Side::S2 => &self.order2,
        }
    }

    /// Same pair with the roles of the two simplices exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            s1: self.s2.clone(),
            s2: self.s1.clone(),
            s2_in_s1: self.s1_in_s2.clone(),
            s1_in_s2: self.s2_in_s1.clone(),
            order1: self.order2.clone(),
            order2: self.order1.clone(),
            num1in2: self.num2in1,
            num2in1: self.num1in2,
            ncomm: self.ncomm,
        }
    }

    /// Fail fast on shape, range and ordering violations.
    pub fn validate(&self, cfg: &IntersectCfg) -> Result<(), IntersectError> {
        if !(cfg.tol.is_finite() && cfg.tol > 0.0) {
            return Err(IntersectError::InvalidTolerance(cfg.tol));
        }
        let n = self.dim();
        if n == 0 || n > MAX_DIM {
            return Err(IntersectError::Dimension {
                dim: n,
                max: MAX_DIM,
            });
        }
        for side in [Side::S1, Side::S2] {
            let s = self.simplex(side);
            if s.nrows() != n || s.ncols() != n + 1 {
                return Err(IntersectError::SimplexShape {
                    side,
                    rows: s.nrows(),
                    cols: s.ncols(),
                    expected_rows: n,
                    expected_cols: n + 1,
                });
            }
            if s.iter().any(|x| !x.is_finite()) {
                return Err(IntersectError::NonFiniteSimplex { side });
            }
        }
        // `expansion_in(S1)` expands the s2 vertices; report by the expanded side.
        for frame in [Side::S1, Side::S2] {
            let e = self.expansion_in(frame);
            let side = frame.other();
            if e.nrows() != n + 1 || e.ncols() != n + 1 {
                return Err(IntersectError::ExpansionShape {
                    side,
                    rows: e.nrows(),
                    cols: e.ncols(),
                    n: n + 1,
                });
            }
            if cfg.check_expansions {
                let eps = cfg.expansion_sum_eps();
                for (col, c) in e.column_iter().enumerate() {
                    let sum = c.sum();
                    if !sum.is_finite() || (sum - 1.0).abs() > eps {
                        return Err(IntersectError::ExpansionNotConvex { side, col, sum });
                    }
                }
            }
        }
        for side in [Side::S1, Side::S2] {
            if !is_permutation(self.ordering(side), n + 1) {
                return Err(IntersectError::NotAPermutation { side, max: n });
            }
        }
        if self.num1in2 > n + 1 {
            return Err(IntersectError::count("num1in2", self.num1in2, n + 1));
        }
        if self.num2in1 > n + 1 {
            return Err(IntersectError::count("num2in1", self.num2in1, n + 1));
        }
        let max_comm = self.num1in2.min(self.num2in1);
        if self.ncomm > max_comm {
            return Err(IntersectError::count("ncomm", self.ncomm, max_comm));
        }
        Ok(())
    }
}

fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &i in order {
        if i >= len || seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}

/// One accepted point of `∂s1 ∩ ∂s2` (or, from `prep::polytope_vertices`, of `s1 ∩ s2`).
///
/// `coeffs` has length `2N+2`: entries `0..=N` are weights on the `s1`
/// vertices, entries `N+1..` weights on the `s2` vertices, both indexed by
/// original vertex index and zero outside the generating faces.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionVertex {
    pub point: DVector<f64>,
    pub coeffs: DVector<f64>,
}

impl IntersectionVertex {
    /// Barycentric weights on the vertices of `side`.
    pub fn weights(&self, side: Side) -> DVector<f64> {
        let n1 = self.coeffs.len() / 2;
        match side {
            Side::S1 => self.coeffs.rows(0, n1).into_owned(),
            Side::S2 => self.coeffs.rows(n1, n1).into_owned(),
        }
    }
}

/// Append-only buffer of accepted points. Row order carries no meaning.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntersectionPoints {
    dim: usize,
    vertices: Vec<IntersectionVertex>,
}

impl IntersectionPoints {
    pub(crate) fn new(dim: usize) -> Self {
        Self {
            dim,
            vertices: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, v: IntersectionVertex) {
        debug_assert_eq!(v.point.len(), self.dim);
        debug_assert_eq!(v.coeffs.len(), 2 * self.dim + 2);
        self.vertices.push(v);
    }

    pub(crate) fn extend(&mut self, other: IntersectionPoints) {
        debug_assert_eq!(other.dim, self.dim);
        self.vertices.extend(other.vertices);
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[IntersectionVertex] {
        &self.vertices
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IntersectionVertex> {
        self.vertices.iter()
    }

    pub fn into_vertices(self) -> Vec<IntersectionVertex> {
        self.vertices
    }

    /// `D×N` coordinate table; row `i` is point `i`.
    pub fn points(&self) -> DMatrix<f64> {
        DMatrix::from_fn(self.len(), self.dim, |i, j| self.vertices[i].point[j])
    }

    /// `D×(2N+2)` dual barycentric table; row `i` belongs to point `i`.
    pub fn coeffs(&self) -> DMatrix<f64> {
        DMatrix::from_fn(self.len(), 2 * self.dim + 2, |i, j| {
            self.vertices[i].coeffs[j]
        })
    }
}

impl<'a> IntoIterator for &'a IntersectionPoints {
    type Item = &'a IntersectionVertex;
    type IntoIter = std::slice::Iter<'a, IntersectionVertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}
