//! Locked-tet purge: removes voxel-surface tets whose every vertex lies on the boundary.

use std::collections::BTreeSet;

use crate::adjacency::{build_element_element_map, build_node_element_map};
use crate::error::Result;
use crate::topology::face_of_tet;
use crate::types::{Diagnostics, TetMesh};

/// On an already-compacted mesh, rebuild adjacency, collect the vertices touched by any
/// boundary face, then kill any live tet all four of whose vertices are boundary
/// vertices.
///
/// Only the three vertices of the boundary face itself are collected, not the tet's
/// fourth (interior-apex) vertex — a tet touching the boundary through one face is not
/// thereby a boundary vertex on its opposite corner.
///
/// Idempotent: the vertex set touching the boundary of an already-purged mesh is
/// unchanged by a second rebuild that finds nothing new to purge, so running this twice
/// in succession leaves the tet count unchanged on the second call.
pub fn purge_locked_tets(mesh: &mut TetMesh, diagnostics: &mut Diagnostics) -> Result<()> {
    let ne = build_node_element_map(mesh);
    let ee = build_element_element_map(mesh, &ne)?;

    let mut boundary_vertices = BTreeSet::new();
    for i in mesh.live_tets() {
        for j in 0..4 {
            if ee[i][j].is_none() {
                for v in face_of_tet(&mesh.tets[i], j) {
                    boundary_vertices.insert(v);
                }
            }
        }
    }

    for i in 0..mesh.num_tets() {
        if !mesh.live[i] {
            continue;
        }
        if mesh.tets[i].iter().all(|v| boundary_vertices.contains(v)) {
            mesh.live[i] = false;
            diagnostics.locked_tets += 1;
            diagnostics.warn(format!("tet {i} purged: all vertices on boundary"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A single outer tet split around an interior point into four sub-tets: each
    /// sub-tet has exactly one boundary face (its cap on the outer tet's surface) and
    /// three faces shared through the interior point, which itself never touches a
    /// boundary face.
    fn tent() -> TetMesh {
        TetMesh {
            vertices: vec![
                [0.0, 0.0, 0.0],    // 0
                [1.0, 0.0, 0.0],    // 1
                [0.0, 1.0, 0.0],    // 2
                [0.0, 0.0, 1.0],    // 3
                [0.25, 0.25, 0.25], // 4, interior
            ],
            tets: vec![[4, 1, 2, 3], [4, 0, 2, 3], [4, 0, 1, 3], [4, 0, 1, 2]],
            live: vec![true, true, true, true],
        }
    }

    /// Three tets whose every vertex sits on some boundary face: the mesh is too small
    /// to have any genuinely interior vertex, so the whole thing is locked.
    fn fully_closed_trio() -> TetMesh {
        TetMesh {
            vertices: vec![
                [0.0, 0.0, 0.0], // 0
                [1.0, 0.0, 0.0], // 1
                [1.0, 1.0, 0.0], // 2
                [1.0, 0.0, 1.0], // 3
                [0.0, 1.0, 1.0], // 4
            ],
            tets: vec![[0, 1, 2, 3], [4, 1, 2, 3], [0, 1, 2, 4]],
            live: vec![true, true, true],
        }
    }

    #[test]
    fn purge_excludes_the_apex_opposite_a_single_boundary_face() {
        let mut mesh = tent();
        let mut diag = Diagnostics::default();
        purge_locked_tets(&mut mesh, &mut diag).unwrap();

        assert_eq!(diag.locked_tets, 0);
        assert_eq!(mesh.num_live(), 4);
    }

    #[test]
    fn purge_removes_tets_whose_vertices_are_all_on_the_boundary() {
        let mut mesh = fully_closed_trio();
        let mut diag = Diagnostics::default();
        purge_locked_tets(&mut mesh, &mut diag).unwrap();

        assert_eq!(diag.locked_tets, 3);
        assert_eq!(mesh.num_live(), 0);
    }

    #[test]
    fn purge_is_idempotent() {
        let mut mesh = fully_closed_trio();
        let mut diag = Diagnostics::default();
        purge_locked_tets(&mut mesh, &mut diag).unwrap();
        let count_after_first = mesh.num_live();

        let mut diag2 = Diagnostics::default();
        purge_locked_tets(&mut mesh, &mut diag2).unwrap();
        assert_eq!(mesh.num_live(), count_after_first);
        assert_eq!(diag2.locked_tets, 0);
    }

    #[test]
    fn purge_never_kills_an_already_dead_tet_twice() {
        let mut mesh = tent();
        mesh.live[0] = false;
        let mut diag = Diagnostics::default();
        purge_locked_tets(&mut mesh, &mut diag).unwrap();
        assert_eq!(diag.locked_tets, 0);
        assert_eq!(mesh.num_live(), 3);
    }
}
