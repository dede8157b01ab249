//! Boundary intersections of two N-simplices.
//!
//! Computes every point where a face of one simplex crosses a face of the
//! other, both as Cartesian coordinates and as dual barycentric coordinates
//! (one weight block per simplex). These points, together with the vertices of
//! each simplex lying inside the other, are the vertex set of `s1 ∩ s2` that a
//! downstream volume integration consumes.
//!
//! Layout
//! - `boundary`: face labels and the O(1) candidate-pair filter.
//! - `intersect`: rank test, constrained solve, and the output accumulator.
//! - `prep`: convex expansions, shared vertices and orderings for a raw pair.
//! - `special`, `sample`: fixed and seeded fixtures for tests and benches.
//!
//! Conventions
//! - A simplex is an `N×(N+1)` matrix, one column per vertex.
//! - Vertex indices and ordered positions are 0-based.
//! - A single tolerance drives rank decisions, zero detection and the solve.

pub mod boundary;
pub mod intersect;
pub mod prep;
pub mod sample;
pub mod special;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::boundary::{BoundaryLabel, CandidatePair};
    pub use crate::intersect::{
        boundary_intersections, boundary_intersections_with_cfg, IntersectCfg, IntersectError,
        IntersectionPoints, IntersectionVertex, SimplexPair,
    };
    pub use crate::prep::{polytope_vertices, prepare, PrepError};
    pub use nalgebra::{DMatrix, DVector};
}
