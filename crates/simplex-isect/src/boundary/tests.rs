use super::*;

fn label(positions: &[usize], width: usize) -> BoundaryLabel {
    BoundaryLabel::from_positions(positions, width).unwrap()
}

#[test]
fn label_counts_without_inside_vertices() {
    // All subsets with >= 2 bits except the full set: 2^(N+1) - (N+1) - 2.
    for dim in 1..=6usize {
        let labels = enumerate_labels(dim, 0).unwrap();
        let expected = (1usize << (dim + 1)) - (dim + 1) - 2;
        assert_eq!(labels.len(), expected, "dim {dim}");
    }
}

#[test]
fn triangle_labels_are_its_edges() {
    let labels = enumerate_labels(2, 0).unwrap();
    let masks: Vec<u32> = labels.iter().map(|l| l.mask()).collect();
    assert_eq!(masks, vec![0b011, 0b101, 0b110]);
}

#[test]
fn inside_prefix_subsets_are_excluded() {
    let dim = 4;
    for inside in 0..=dim + 1 {
        let labels = enumerate_labels(dim, inside).unwrap();
        let prefix = (1u32 << inside) - 1;
        for l in &labels {
            assert!(l.count() >= 2);
            assert!(l.count() < dim + 1);
            assert!(l.mask() & !prefix != 0, "{l} lies in the inside prefix");
        }
        // Complement count: every valid face not contained in the prefix.
        let brute = (0u32..(1 << (dim + 1)))
            .filter(|m| m.count_ones() >= 2 && m.count_ones() <= dim as u32)
            .filter(|m| m & !prefix != 0)
            .count();
        assert_eq!(labels.len(), brute, "inside {inside}");
    }
}

#[test]
fn all_vertices_inside_yields_nothing() {
    assert!(enumerate_labels(3, 4).unwrap().is_empty());
}

#[test]
fn inside_count_out_of_range_is_error() {
    assert_eq!(
        enumerate_labels(2, 4),
        Err(LabelError::CountOutOfRange { count: 4, width: 3 })
    );
}

#[test]
fn too_wide_is_error() {
    assert!(matches!(
        enumerate_labels(MAX_WIDTH, 0),
        Err(LabelError::TooWide { .. })
    ));
}

#[test]
fn label_views_agree() {
    let l = label(&[0, 2, 3], 5);
    assert_eq!(l.mask(), 0b01101);
    assert_eq!(l.count(), 3);
    assert_eq!(l.positions().collect::<Vec<_>>(), vec![0, 2, 3]);
    assert_eq!(l.complement().collect::<Vec<_>>(), vec![1, 4]);
    assert_eq!(l.to_bools(), vec![true, false, true, true, false]);
    assert_eq!(l.to_string(), "{0,2,3}");
    assert!(BoundaryLabel::from_positions(&[5], 5).is_none());
    assert!(BoundaryLabel::from_mask(0b100000, 5).is_none());
}

#[test]
fn filter_rejects_shared_prefix_positions() {
    let dim = 3;
    let a = label(&[0, 2], 4);
    let b = label(&[0, 3], 4);
    assert!(!is_admissible(&a, &b, dim, 1));
    // Position 0 is not shared when ncomm = 0.
    assert!(is_admissible(&a, &b, dim, 0));
    // Overlap outside the shared prefix is fine.
    let c = label(&[2, 3], 4);
    assert!(is_admissible(&a, &c, dim, 2));
}

#[test]
fn filter_rejects_too_many_vertices() {
    let dim = 3;
    let tri = label(&[1, 2, 3], 4);
    let edge = label(&[2, 3], 4);
    assert!(is_admissible(&tri, &edge, dim, 0));
    assert!(!is_admissible(&tri, &tri, dim, 0));
}

#[test]
fn admissible_pairs_match_brute_force() {
    let dim = 3;
    let l1 = enumerate_labels(dim, 1).unwrap();
    let l2 = enumerate_labels(dim, 2).unwrap();
    let ncomm = 1;
    let lazy: Vec<CandidatePair> = admissible_pairs(&l1, &l2, dim, ncomm).collect();
    let mut brute = Vec::new();
    for a in &l1 {
        for b in &l2 {
            if is_admissible(a, b, dim, ncomm) {
                brute.push(CandidatePair { s1: *a, s2: *b });
            }
        }
    }
    assert_eq!(lazy, brute);
    for p in &lazy {
        assert!(p.s1.count() + p.s2.count() <= dim + 2);
        assert!(!(p.s1.contains(0) && p.s2.contains(0)));
    }
}
