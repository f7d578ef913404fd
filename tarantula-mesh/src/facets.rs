//! Boundary facet extraction.

use crate::adjacency::ElementElementMap;
use crate::classify::{classify_face, face_centroid};
use crate::compact::RenumberMap;
use crate::geometry::BoundingBox;
use crate::topology::face_of_tet;
use crate::types::{Facet, Label, TetMesh};

/// Re-walk the original (pre-compaction) tets and element→element map, emitting a facet
/// for every boundary face of a surviving tet whose three vertices all appear in
/// `renumber`.
///
/// Facet vertex order follows the local face table in [`crate::topology`], which yields
/// an outward-pointing normal under the volume convention of [`crate::geometry`].
/// Boundary IDs are computed from the *original* (pre-compaction) coordinates, then
/// vertex indices are translated through `renumber` before storing.
pub fn extract_facets(
    original: &TetMesh,
    ee: &ElementElementMap,
    labels: &[Label],
    renumber: &RenumberMap,
    bbox: &BoundingBox,
    eta: f64,
) -> Vec<Facet> {
    let mut facets = Vec::new();

    for i in 0..original.num_tets() {
        if labels[i] != Label::Percolating {
            continue;
        }
        for j in 0..4 {
            if ee[i][j].is_some() {
                continue;
            }
            let face = face_of_tet(&original.tets[i], j);
            if !face.iter().all(|v| renumber.contains_key(v)) {
                continue;
            }

            let centroid = face_centroid(&original.vertices, face);
            let boundary_id = classify_face(centroid, bbox, eta);
            let compact_face = face.map(|v| renumber[&v]);

            facets.push(Facet {
                vertices: compact_face,
                boundary_id,
            });
        }
    }

    facets
}
