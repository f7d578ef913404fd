//! Mesh compaction: keeps only percolating tets and renumbers their vertices.

use std::collections::{BTreeMap, BTreeSet};

use crate::types::{Label, TetMesh};

/// Maps old vertex indices to new, compact ones, in ascending order of old index.
pub type RenumberMap = BTreeMap<usize, usize>;

/// Walk tets labelled `Percolating`, collect the set of vertices they reference, and emit
/// a new compact mesh plus the old→new vertex renumbering map (needed by the facet
/// extractor, which re-walks the original, pre-compaction connectivity).
///
/// New indices are assigned in ascending order of old index, not in the order vertices
/// are first encountered while walking tets, so the renumbering is independent of tet
/// traversal order.
pub fn compact(original: &TetMesh, labels: &[Label]) -> (TetMesh, RenumberMap) {
    let surviving: Vec<usize> = (0..original.num_tets())
        .filter(|&i| labels[i] == Label::Percolating)
        .collect();

    let referenced: BTreeSet<usize> = surviving
        .iter()
        .flat_map(|&i| original.tets[i])
        .collect();

    let renumber: RenumberMap = referenced
        .into_iter()
        .enumerate()
        .map(|(new, old)| (old, new))
        .collect();

    let new_vertices: Vec<_> = renumber.keys().map(|&old| original.vertices[old]).collect();

    let new_tets: Vec<[usize; 4]> = surviving
        .iter()
        .map(|&i| original.tets[i].map(|v| renumber[&v]))
        .collect();

    let live = vec![true; new_tets.len()];

    (
        TetMesh {
            vertices: new_vertices,
            tets: new_tets,
            live,
        },
        renumber,
    )
}
