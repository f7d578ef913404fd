//! Boundary facet classification against the mesh's bounding box.

use crate::adjacency::ElementElementMap;
use crate::geometry::BoundingBox;
use crate::topology::face_of_tet;
use crate::types::{BoundaryId, TetMesh};

/// Classify the centroid of a boundary face against the bounding box `bbox`, using
/// tolerance `eta`. The six bbox-plane tests are tried in a fixed order; the first match
/// wins; anything else is `Internal`.
pub fn classify_face(centroid: [f64; 3], bbox: &BoundingBox, eta: f64) -> BoundaryId {
    let [cx, cy, cz] = centroid;

    if (cx - bbox.min[0]).abs() < eta {
        BoundaryId::Inlet
    } else if (cx - bbox.max[0]).abs() < eta {
        BoundaryId::Outlet
    } else if (cy - bbox.min[1]).abs() < eta {
        BoundaryId::YMin
    } else if (cy - bbox.max[1]).abs() < eta {
        BoundaryId::YMax
    } else if (cz - bbox.min[2]).abs() < eta {
        BoundaryId::ZMin
    } else if (cz - bbox.max[2]).abs() < eta {
        BoundaryId::ZMax
    } else {
        BoundaryId::Internal
    }
}

/// The centroid of a face given its three global vertex indices.
pub fn face_centroid(vertices: &[[f64; 3]], face: [usize; 3]) -> [f64; 3] {
    let [a, b, c] = face.map(|v| vertices[v]);
    [
        (a[0] + b[0] + c[0]) / 3.0,
        (a[1] + b[1] + c[1]) / 3.0,
        (a[2] + b[2] + c[2]) / 3.0,
    ]
}

/// Seed the forward (inlet-touching) and backward (outlet-touching) flood-fill fronts.
///
/// A tet seeds `front0` if any of its boundary faces classifies as `Inlet`, and seeds
/// `front1` if any classifies as `Outlet`. Seeding is keyed by tet index, computed once
/// before compaction.
pub fn seed_fronts(
    mesh: &TetMesh,
    ee: &ElementElementMap,
    bbox: &BoundingBox,
    eta: f64,
) -> (Vec<usize>, Vec<usize>) {
    let mut front0 = Vec::new();
    let mut front1 = Vec::new();

    for i in mesh.live_tets() {
        for j in 0..4 {
            if ee[i][j].is_some() {
                continue;
            }
            let face = face_of_tet(&mesh.tets[i], j);
            let centroid = face_centroid(&mesh.vertices, face);
            match classify_face(centroid, bbox, eta) {
                BoundaryId::Inlet => front0.push(i),
                BoundaryId::Outlet => front1.push(i),
                _ => {}
            }
        }
    }

    front0.dedup();
    front1.dedup();
    (front0, front1)
}
