//! Boundary labels: inclusion masks over ordered vertex positions.

use std::fmt;

use thiserror::Error;

/// Largest label width (N+1) representable by the `u32` mask.
pub const MAX_WIDTH: usize = 31;

/// Errors from label enumeration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LabelError {
    #[error("label width {width} exceeds the supported maximum {max}")]
    TooWide { width: usize, max: usize },
    #[error("inside-vertex count {count} out of range 0..={width}")]
    CountOutOfRange { count: usize, width: usize },
}

/// Face of a simplex, as the set of ordered positions spanning it.
///
/// Invariants:
/// - `mask < 2^width` and `width <= MAX_WIDTH`.
/// - Labels produced by `enumerate_labels` have at least two positions and are
///   never the full simplex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoundaryLabel {
    mask: u32,
    width: u8,
}

impl BoundaryLabel {
    /// Label from a raw mask; `None` if the mask has bits at or past `width`.
    pub fn from_mask(mask: u32, width: usize) -> Option<Self> {
        if width > MAX_WIDTH || mask >> width != 0 {
            return None;
        }
        Some(Self {
            mask,
            width: width as u8,
        })
    }

    /// Label from a list of ordered positions (duplicates are ignored).
    pub fn from_positions(positions: &[usize], width: usize) -> Option<Self> {
        if width > MAX_WIDTH {
            return None;
        }
        let mut mask = 0u32;
        for &p in positions {
            if p >= width {
                return None;
            }
            mask |= 1 << p;
        }
        Some(Self {
            mask,
            width: width as u8,
        })
    }

    #[inline]
    pub fn mask(&self) -> u32 {
        self.mask
    }

    /// Number of positions the label ranges over (N+1).
    #[inline]
    pub fn width(&self) -> usize {
        self.width as usize
    }

    #[inline]
    pub fn contains(&self, pos: usize) -> bool {
        pos < self.width() && self.mask & (1 << pos) != 0
    }

    /// Number of vertices spanning the face.
    #[inline]
    pub fn count(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Ordered positions in the label, ascending.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.width()).filter(move |&p| self.contains(p))
    }

    /// Positions *not* in the label, ascending.
    pub fn complement(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.width()).filter(move |&p| !self.contains(p))
    }

    /// Fixed-size inclusion vector indexed by ordered position.
    pub fn to_bools(&self) -> Vec<bool> {
        (0..self.width()).map(|p| self.contains(p)).collect()
    }
}

impl fmt::Display for BoundaryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, p) in self.positions().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, "}}")
    }
}

/// Faces of an N-simplex that can cross the other simplex's boundary.
///
/// `inside` is the number of leading ordered positions whose vertices lie in
/// the other simplex. A face spanned only by such vertices lies inside the
/// other (convex) simplex and is skipped.
///
/// Yields, in increasing mask order, every mask in `[2^inside, 2^(N+1) - 2]`
/// with at least two bits set: masks below `2^inside` are exactly the subsets
/// of the inside prefix, `2^(N+1) - 1` is the simplex itself, and single bits
/// are vertices, not faces.
pub fn enumerate_labels(dim: usize, inside: usize) -> Result<Vec<BoundaryLabel>, LabelError> {
    let width = dim + 1;
    if width > MAX_WIDTH {
        return Err(LabelError::TooWide {
            width,
            max: MAX_WIDTH,
        });
    }
    if inside > width {
        return Err(LabelError::CountOutOfRange {
            count: inside,
            width,
        });
    }
    let full = (1u32 << width) - 1;
    let lo = 1u32 << inside;
    Ok((lo..full)
        .filter(|m| m.count_ones() >= 2)
        .map(|mask| BoundaryLabel {
            mask,
            width: width as u8,
        })
        .collect())
}
