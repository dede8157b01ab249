use super::*;
use crate::intersect::{boundary_intersections, Side};
use crate::sample::{overlapping_pair, PairReplay};
use crate::special::{from_vertices, standard_simplex, translated};
use nalgebra::{dmatrix, dvector, DMatrix, DVector};

const TOL: f64 = 1e-10;

fn tri(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> DMatrix<f64> {
    from_vertices(&[a.to_vec(), b.to_vec(), c.to_vec()]).unwrap()
}

#[test]
fn expansion_reproduces_points() {
    for seed in 0..8u64 {
        let (s1, s2) = overlapping_pair(PairReplay { seed, dim: 4 });
        let e = convex_expansion(&s1, &s2).unwrap();
        assert_eq!(e.shape(), (5, 5));
        assert!((&s1 * &e - &s2).amax() < 1e-10);
        for c in e.column_iter() {
            assert!((c.sum() - 1.0).abs() < 1e-12);
        }
    }
}

#[test]
fn expansion_of_own_vertices_is_identity() {
    let s = standard_simplex(3, 2.0);
    let e = convex_expansion(&s, &s).unwrap();
    assert!((e - DMatrix::<f64>::identity(4, 4)).amax() < 1e-12);
}

#[test]
fn degenerate_frame_has_no_expansion() {
    let flat = dmatrix![0.0, 1.0, 2.0; 0.0, 1.0, 2.0];
    assert!(convex_expansion(&flat, &standard_simplex(2, 1.0)).is_none());
}

#[test]
fn prepare_fills_both_expansions() {
    let (s1, s2) = overlapping_pair(PairReplay { seed: 5, dim: 3 });
    let pair = prepare(&s1, &s2, TOL).unwrap();
    assert!((&pair.s1 * &pair.s2_in_s1 - &pair.s2).amax() < 1e-10);
    assert!((&pair.s2 * &pair.s1_in_s2 - &pair.s1).amax() < 1e-10);
    assert!(pair.validate(&Default::default()).is_ok());
}

#[test]
fn crossing_triangles_classify_one_inside_each() {
    let s1 = tri([0.0, 0.0], [4.0, 0.0], [0.0, 4.0]);
    let s2 = tri([1.0, 1.0], [6.0, 1.0], [5.0, -3.0]);
    let pair = prepare(&s1, &s2, TOL).unwrap();
    assert_eq!(pair.order1, vec![1, 0, 2]);
    assert_eq!(pair.order2, vec![0, 1, 2]);
    assert_eq!((pair.num1in2, pair.num2in1, pair.ncomm), (1, 1, 0));
}

#[test]
fn shared_vertices_come_first_and_are_paired() {
    // s2 lists the shared vertices in a different index order.
    let s1 = tri([0.0, 0.0], [4.0, 0.0], [0.0, 4.0]);
    let s2 = tri([3.0, 3.0], [4.0, 0.0], [0.0, 0.0]);
    let pair = prepare(&s1, &s2, TOL).unwrap();
    assert_eq!(pair.ncomm, 2);
    assert_eq!(&pair.order1[..2], &[0, 1]);
    assert_eq!(&pair.order2[..2], &[2, 1]);
    for k in 0..pair.ncomm {
        let a = pair.s1.column(pair.order1[k]);
        let b = pair.s2.column(pair.order2[k]);
        assert!((a - b).amax() < 1e-12);
    }
    assert_eq!((pair.num1in2, pair.num2in1), (2, 2));
}

#[test]
fn nested_simplex_is_all_inside() {
    let outer = standard_simplex(2, 4.0);
    let inner = translated(&standard_simplex(2, 1.0), &dvector![0.5, 0.5]);
    let pair = prepare(&outer, &inner, TOL).unwrap();
    assert_eq!((pair.num1in2, pair.num2in1, pair.ncomm), (0, 3, 0));
    assert_eq!(pair.order2, vec![0, 1, 2]);
}

#[test]
fn classify_treats_boundary_points_as_inside() {
    // s2 vertex 0 sits on the edge (0,0)-(4,0) of s1.
    let s1 = tri([0.0, 0.0], [4.0, 0.0], [0.0, 4.0]);
    let s2 = tri([2.0, 0.0], [5.0, -1.0], [5.0, 1.0]);
    let pair = prepare(&s1, &s2, TOL).unwrap();
    assert_eq!(pair.num2in1, 1);
    assert_eq!(pair.order2[0], 0);
    assert_eq!(pair.ncomm, 0);
}

#[test]
fn prepare_rejects_bad_input() {
    let s = standard_simplex(2, 1.0);
    assert_eq!(
        prepare(&s, &s, 0.0).unwrap_err(),
        PrepError::InvalidTolerance(0.0)
    );
    assert_eq!(
        prepare(&s, &standard_simplex(3, 1.0), TOL).unwrap_err(),
        PrepError::Shape {
            side: Side::S2,
            rows: 3,
            cols: 4,
            dim: 2
        }
    );
    assert!(matches!(
        prepare(&DMatrix::zeros(0, 1), &DMatrix::zeros(0, 1), TOL),
        Err(PrepError::Dimension { dim: 0, .. })
    ));
    let flat = dmatrix![0.0, 1.0, 2.0; 0.0, 1.0, 2.0];
    assert_eq!(
        prepare(&flat, &s, TOL).unwrap_err(),
        PrepError::Degenerate { side: Side::S1 }
    );
    assert_eq!(
        prepare(&s, &flat, TOL).unwrap_err(),
        PrepError::Degenerate { side: Side::S2 }
    );
}

#[test]
fn polytope_of_crossing_triangles_has_four_vertices() {
    let s1 = tri([0.0, 0.0], [4.0, 0.0], [0.0, 4.0]);
    let s2 = tri([1.0, 1.0], [6.0, 1.0], [5.0, -3.0]);
    let pair = prepare(&s1, &s2, TOL).unwrap();
    let pts = polytope_vertices(&pair, TOL).unwrap();
    assert_eq!(pts.len(), 4);

    // Inside vertices first: s1's (4,0), then s2's (1,1).
    let v = &pts.vertices()[0];
    assert!((&v.point - dvector![4.0, 0.0]).amax() < 1e-12);
    assert_eq!(v.weights(Side::S1), dvector![0.0, 1.0, 0.0]);
    let v = &pts.vertices()[1];
    assert!((&v.point - dvector![1.0, 1.0]).amax() < 1e-12);
    assert_eq!(v.weights(Side::S2), dvector![1.0, 0.0, 0.0]);

    for v in &pts {
        for side in [Side::S1, Side::S2] {
            let w = v.weights(side);
            assert!(w.iter().all(|&x| x >= 0.0));
            assert!((w.sum() - 1.0).abs() < 1e-9);
            assert!((pair.simplex(side) * &w - &v.point).amax() < 1e-9);
        }
    }
    let crossings = boundary_intersections(&pair, TOL).unwrap();
    assert_eq!(crossings.len(), 2);
}

#[test]
fn polytope_of_nested_pair_is_inner_simplex() {
    let outer = standard_simplex(3, 4.0);
    let inner = translated(&standard_simplex(3, 1.0), &dvector![0.5, 0.5, 0.5]);
    let pair = prepare(&outer, &inner, TOL).unwrap();
    let pts = polytope_vertices(&pair, TOL).unwrap();
    assert_eq!(pts.len(), 4);
    for (j, v) in pts.iter().enumerate() {
        let corner: DVector<f64> = inner.column(j).into_owned();
        assert!((&v.point - &corner).amax() < 1e-12);
        assert_eq!(v.weights(Side::S2)[j], 1.0);
    }
}

#[test]
fn polytope_lists_shared_vertices_once() {
    let s = standard_simplex(2, 1.0);
    let pair = prepare(&s, &s, TOL).unwrap();
    let pts = polytope_vertices(&pair, TOL).unwrap();
    assert_eq!(pts.len(), 3);
    for v in &pts {
        assert_eq!(v.weights(Side::S1), v.weights(Side::S2));
        assert_eq!(v.coeffs.iter().filter(|&&x| x == 1.0).count(), 2);
    }
}
