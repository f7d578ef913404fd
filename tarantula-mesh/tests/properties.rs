//! Property-based tests for the invariants named in the domain extraction design:
//! signed-volume antisymmetry, element-element adjacency symmetry, and the
//! no-orphan-vertex guarantee of compaction.

use proptest::prelude::*;
use tarantula_mesh::adjacency::{build_element_element_map, build_node_element_map};
use tarantula_mesh::compact::compact;
use tarantula_mesh::geometry::signed_volume;
use tarantula_mesh::types::{Label, TetMesh, Vertex};

fn finite_coord() -> impl Strategy<Value = f64> {
    -100.0..100.0f64
}

fn vertex() -> impl Strategy<Value = Vertex> {
    (finite_coord(), finite_coord(), finite_coord()).prop_map(|(x, y, z)| [x, y, z])
}

proptest! {
    /// Swapping any two vertices of a tet negates its signed volume, regardless of the
    /// underlying coordinates (§4.2's orientation convention is purely algebraic).
    #[test]
    fn swapping_two_vertices_always_negates_signed_volume(
        x0 in vertex(), x1 in vertex(), x2 in vertex(), x3 in vertex()
    ) {
        let vol = signed_volume(x0, x1, x2, x3);
        let swapped = signed_volume(x0, x1, x3, x2);
        prop_assert!((vol + swapped).abs() < 1e-6, "vol={vol} swapped={swapped}");
    }

    /// A tet is invariant under a uniform translation of all four vertices: the signed
    /// volume formula only depends on pairwise differences.
    #[test]
    fn signed_volume_is_translation_invariant(
        x0 in vertex(), x1 in vertex(), x2 in vertex(), x3 in vertex(),
        shift in vertex(),
    ) {
        let vol = signed_volume(x0, x1, x2, x3);
        let translate = |v: Vertex| [v[0] + shift[0], v[1] + shift[1], v[2] + shift[2]];
        let shifted = signed_volume(translate(x0), translate(x1), translate(x2), translate(x3));
        prop_assert!((vol - shifted).abs() < 1e-6, "vol={vol} shifted={shifted}");
    }

    /// For the canonical two-tet bar (topology fixed, coordinates perturbed), every
    /// element-element neighbour relationship is symmetric: if tet i's face points to
    /// tet k, some face of k points back to i.
    #[test]
    fn element_element_adjacency_is_symmetric(jitter in (-0.4..0.4f64, -0.4..0.4f64, -0.4..0.4f64)) {
        let (jx, jy, jz) = jitter;
        let mesh = TetMesh {
            vertices: vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [1.0, 0.0, 1.0],
                [0.0 + jx, 1.0 + jy, 1.0 + jz],
            ],
            tets: vec![[0, 1, 2, 3], [4, 1, 2, 3]],
            live: vec![true, true],
        };
        let ne = build_node_element_map(&mesh);
        let ee = build_element_element_map(&mesh, &ne).unwrap();

        for i in 0..ee.len() {
            for j in 0..4 {
                if let Some(k) = ee[i][j] {
                    let points_back = (0..4).any(|jj| ee[k][jj] == Some(i));
                    prop_assert!(points_back, "tet {i} face {j} -> {k} is not mutual");
                }
            }
        }
    }

    /// After compaction, the referenced-vertex set of the new tet array is exactly
    /// `0..num_vertices` — no orphans, regardless of which arbitrary subset of an
    /// 8-vertex, 2-tet mesh is marked percolating.
    #[test]
    fn compaction_never_leaves_orphan_vertices(first_percolates in any::<bool>(), second_percolates in any::<bool>()) {
        let mesh = TetMesh {
            vertices: (0..8).map(|i| [i as f64, 0.0, 0.0]).collect(),
            tets: vec![[0, 1, 2, 3], [4, 5, 6, 7]],
            live: vec![true, true],
        };
        let labels = vec![
            if first_percolates { Label::Percolating } else { Label::NotReached },
            if second_percolates { Label::Percolating } else { Label::NotReached },
        ];
        let (compacted, _) = compact(&mesh, &labels);

        let referenced: std::collections::BTreeSet<usize> =
            compacted.tets.iter().flatten().copied().collect();
        let expected: std::collections::BTreeSet<usize> = (0..compacted.num_vertices()).collect();
        prop_assert_eq!(referenced, expected);
    }
}
