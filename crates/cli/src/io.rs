//! JSON documents read and written by the runner.
//!
//! Simplices travel as vertex lists (`N+1` vertices of length `N`), which is
//! the transpose of the library's column-per-vertex matrices.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use simplex_isect::intersect::{IntersectionPoints, SimplexPair};
use simplex_isect::nalgebra::DMatrix;
use simplex_isect::prep::{convex_expansion, prepare};
use simplex_isect::special::from_vertices;
use std::fs;
use std::path::Path;

/// Input document: two simplices and an optional precomputed classification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PairInput {
    pub s1: Vec<Vec<f64>>,
    pub s2: Vec<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orderings: Option<OrderingInput>,
}

/// Orderings and counts supplied by the caller instead of being derived.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderingInput {
    pub order1: Vec<usize>,
    pub order2: Vec<usize>,
    pub num1in2: usize,
    pub num2in1: usize,
    pub ncomm: usize,
}

/// Row tables as nested lists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointTable {
    pub points: Vec<Vec<f64>>,
    pub coeffs: Vec<Vec<f64>>,
}

impl From<&IntersectionPoints> for PointTable {
    fn from(pts: &IntersectionPoints) -> Self {
        Self {
            points: pts.iter().map(|v| v.point.iter().copied().collect()).collect(),
            coeffs: pts.iter().map(|v| v.coeffs.iter().copied().collect()).collect(),
        }
    }
}

/// Output document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunOutput {
    pub dim: usize,
    pub tol: f64,
    pub count: usize,
    pub crossings: PointTable,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertices: Option<PointTable>,
}

impl PairInput {
    pub fn from_matrices(s1: &DMatrix<f64>, s2: &DMatrix<f64>) -> Self {
        let rows = |s: &DMatrix<f64>| -> Vec<Vec<f64>> {
            s.column_iter().map(|c| c.iter().copied().collect()).collect()
        };
        Self {
            s1: rows(s1),
            s2: rows(s2),
            orderings: None,
        }
    }

    /// Build the `SimplexPair`, classifying vertices unless orderings were given.
    pub fn to_pair(&self, tol: f64) -> Result<SimplexPair> {
        let s1 = from_vertices(&self.s1).context("s1 must list N+1 vertices of length N")?;
        let s2 = from_vertices(&self.s2).context("s2 must list N+1 vertices of length N")?;
        let Some(ord) = &self.orderings else {
            return Ok(prepare(&s1, &s2, tol)?);
        };
        if s1.shape() != s2.shape() {
            bail!(
                "simplices differ in shape: {:?} vs {:?}",
                s1.shape(),
                s2.shape()
            );
        }
        let s2_in_s1 = convex_expansion(&s1, &s2).context("s1 is degenerate")?;
        let s1_in_s2 = convex_expansion(&s2, &s1).context("s2 is degenerate")?;
        Ok(SimplexPair {
            s1,
            s2,
            s2_in_s1,
            s1_in_s2,
            order1: ord.order1.clone(),
            order2: ord.order2.clone(),
            num1in2: ord.num1in2,
            num2in1: ord.num2in1,
            ncomm: ord.ncomm,
        })
    }
}

pub fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use simplex_isect::intersect::boundary_intersections;
    use tempfile::tempdir;

    fn crossing_input() -> PairInput {
        serde_json::from_str(
            r#"{"s1": [[0,0],[4,0],[0,4]], "s2": [[1,1],[6,1],[5,-3]]}"#,
        )
        .unwrap()
    }

    #[test]
    fn input_builds_prepared_pair() {
        let pair = crossing_input().to_pair(1e-10).unwrap();
        assert_eq!(pair.dim(), 2);
        assert_eq!(pair.s1[(0, 1)], 4.0);
        assert_eq!((pair.num1in2, pair.num2in1, pair.ncomm), (1, 1, 0));
    }

    #[test]
    fn explicit_orderings_are_used_verbatim() {
        let mut input = crossing_input();
        input.orderings = Some(OrderingInput {
            order1: vec![1, 0, 2],
            order2: vec![0, 1, 2],
            num1in2: 1,
            num2in1: 1,
            ncomm: 0,
        });
        let explicit = input.to_pair(1e-10).unwrap();
        let derived = crossing_input().to_pair(1e-10).unwrap();
        assert_eq!(explicit.order1, derived.order1);
        let a = boundary_intersections(&explicit, 1e-10).unwrap();
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn ragged_vertices_are_rejected() {
        let input: PairInput =
            serde_json::from_str(r#"{"s1": [[0,0],[1],[0,1]], "s2": [[0,0],[1,0],[0,1]]}"#)
                .unwrap();
        assert!(input.to_pair(1e-10).is_err());
    }

    #[test]
    fn matrices_round_trip_through_vertex_lists() {
        let pair = crossing_input().to_pair(1e-10).unwrap();
        let back = PairInput::from_matrices(&pair.s1, &pair.s2);
        assert_eq!(back, crossing_input());
    }

    #[test]
    fn output_omits_missing_vertices() {
        let pair = crossing_input().to_pair(1e-10).unwrap();
        let pts = boundary_intersections(&pair, 1e-10).unwrap();
        let out = RunOutput {
            dim: 2,
            tol: 1e-10,
            count: pts.len(),
            crossings: PointTable::from(&pts),
            vertices: None,
        };
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/out.json");
        write_json(&path, &out).unwrap();
        let raw: serde_json::Value = read_json(&path).unwrap();
        assert!(raw.get("vertices").is_none());
        assert_eq!(raw["crossings"]["coeffs"][0].as_array().unwrap().len(), 6);
        let parsed: RunOutput = read_json(&path).unwrap();
        assert_eq!((parsed.dim, parsed.count), (2, 2));
        assert_eq!(parsed.crossings.points.len(), 2);
    }
}
