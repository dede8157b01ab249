//! Face labels and candidate face pairs.
//!
//! Purpose
//! - Enumerate the faces of each simplex that can carry a boundary crossing and
//!   pair them up, dropping in O(1) per pair everything that cannot intersect
//!   in generic position.
//!
//! Encoding
//! - A face is a `BoundaryLabel` over the N+1 *ordered* positions of a simplex
//!   (positions come from the caller's vertex ordering, not raw vertex indices).
//! - Bit `b` of the label mask (least significant = bit 0) is position `b`.
//!   Both simplices use the same encoding, so the shared-vertex prefix
//!   `0..ncomm` lines up bit for bit.
//!
//! Complexity
//! - There are up to `2^(N+1)` labels per simplex, so the pair product is
//!   exponential in N. This is inherent to the approach; see `MAX_WIDTH`.

mod labels;
mod pairs;

pub use labels::{enumerate_labels, BoundaryLabel, LabelError, MAX_WIDTH};
pub use pairs::{admissible_pairs, is_admissible, CandidatePair};

#[cfg(test)]
mod tests;
