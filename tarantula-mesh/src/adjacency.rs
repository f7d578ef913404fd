//! Node→element and element→element adjacency construction.

use std::collections::BTreeSet;

use crate::error::{ExtractError, Result};
use crate::topology::face_of_tet;
use crate::types::TetMesh;

/// Vertex → set of live tet indices incident to it.
pub type NodeElementMap = Vec<BTreeSet<usize>>;

/// Dense `NT x 4` neighbour table. `table[i][j]` is the tet sharing local face `j` of tet
/// `i`, or `None` if that face is on the boundary.
pub type ElementElementMap = Vec<[Option<usize>; 4]>;

/// Build the node→element map: for each vertex, the set of live tet indices touching it.
pub fn build_node_element_map(mesh: &TetMesh) -> NodeElementMap {
    let mut ne = vec![BTreeSet::new(); mesh.num_vertices()];
    for i in mesh.live_tets() {
        for &v in &mesh.tets[i] {
            ne[v].insert(i);
        }
    }
    ne
}

/// Build the element→element map by triple set-intersection over the node→element map.
///
/// For each live tet and each local face, the neighbour sharing that face is found by
/// intersecting the node→element sets of the face's three vertices. The intersection has
/// exactly one element (the tet itself, a boundary face) or exactly two (the tet and its
/// neighbour, an interior face); more than two is a non-manifold mesh.
pub fn build_element_element_map(mesh: &TetMesh, ne: &NodeElementMap) -> Result<ElementElementMap> {
    let mut ee = vec![[None; 4]; mesh.num_tets()];
    for i in mesh.live_tets() {
        for j in 0..4 {
            let face = face_of_tet(&mesh.tets[i], j);
            let incident = intersect_three(&ne[face[0]], &ne[face[1]], &ne[face[2]]);

            debug_assert!(
                incident.len() <= 2,
                "face should have at most 2 incident live tets before the explicit check"
            );

            match incident.len() {
                1 => {}
                2 => {
                    let other = *incident.iter().find(|&&t| t != i).expect("pair contains i");
                    ee[i][j] = Some(other);
                }
                n => {
                    return Err(ExtractError::NonManifoldMesh {
                        tet: i,
                        face: j,
                        incident: n,
                    });
                }
            }
        }
    }
    Ok(ee)
}

fn intersect_three(a: &BTreeSet<usize>, b: &BTreeSet<usize>, c: &BTreeSet<usize>) -> BTreeSet<usize> {
    a.intersection(b).copied().collect::<BTreeSet<_>>().intersection(c).copied().collect()
}
