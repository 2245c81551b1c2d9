//! The concrete scenarios from spec.md §8 ("Concrete scenarios").

use mesh_stripifier::{assemble_strips, StripError};

#[test]
fn s1_minimal_quad() {
    let strips = assemble_strips(&[0, 1, 2, 2, 1, 3]).unwrap();
    assert_eq!(strips, vec![vec![0, 1, 2, 3]]);
}

#[test]
fn s2_triangle_fan_of_four() {
    let strips = assemble_strips(&[0, 1, 2, 0, 2, 3, 0, 3, 4]).unwrap();
    assert_eq!(strips.len(), 1);
    assert_eq!(strips[0].len(), 5);
}

#[test]
fn s3_two_disjoint_triangles() {
    let strips = assemble_strips(&[0, 1, 2, 3, 4, 5]).unwrap();
    assert_eq!(strips.len(), 2);
    assert!(strips.iter().all(|s| s.len() == 3));
}

#[test]
fn s4_non_manifold_rejection() {
    let err = assemble_strips(&[0, 1, 2, 0, 1, 3, 0, 1, 4]).unwrap_err();
    match err {
        StripError::NonManifold { triangles, .. } => assert_eq!(triangles.len(), 3),
        other => panic!("expected NonManifold, got {other:?}"),
    }
}

#[test]
fn s5_strip_spanning_bowtie() {
    let tris = [0u16, 1, 2, 2, 1, 3, 2, 3, 4, 4, 3, 5, 4, 5, 6, 6, 5, 7];
    let strips = assemble_strips(&tris).unwrap();
    assert_eq!(strips.len(), 1);
    assert_eq!(strips[0].len(), 8);
}

#[test]
fn s6_degenerate_triangle() {
    let err = assemble_strips(&[0, 1, 1]).unwrap_err();
    assert!(matches!(err, StripError::DegenerateTriangle { .. }));
}
