//! Orientation filter: kills inverted and degenerate tets.

use crate::geometry::signed_volume;
use crate::types::{Diagnostics, TetMesh};

/// Scale factor applied to `f64::EPSILON` when deciding whether a signed volume is
/// numerically zero (degenerate) rather than merely small-but-negative (inverted).
const DEGENERACY_SCALE: f64 = 1e6;

/// Kill every live tet with non-positive signed volume, recording the reason in
/// `diagnostics`.
///
/// Inversion is common at the outer faces of voxel-derived meshes and is never itself
/// fatal; the tet is simply dropped from further consideration.
pub fn filter_inverted_tets(mesh: &mut TetMesh, diagnostics: &mut Diagnostics) {
    let tolerance = f64::EPSILON * DEGENERACY_SCALE;

    for i in 0..mesh.num_tets() {
        if !mesh.live[i] {
            continue;
        }
        let [a, b, c, d] = mesh.tets[i];
        let vol = signed_volume(
            mesh.vertices[a],
            mesh.vertices[b],
            mesh.vertices[c],
            mesh.vertices[d],
        );

        if vol.abs() < tolerance {
            mesh.live[i] = false;
            diagnostics.degenerate_tets += 1;
            diagnostics.warn(format!("tet {i} is degenerate (signed volume {vol:.3e})"));
        } else if vol < 0.0 {
            mesh.live[i] = false;
            diagnostics.inverted_tets += 1;
            diagnostics.warn(format!(
                "tet {i} is inverted (signed volume {vol:.3e}), vertices {:?}",
                [a, b, c, d]
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn well_oriented_tet() -> TetMesh {
        TetMesh {
            vertices: vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0],
            ],
            tets: vec![[0, 1, 2, 3]],
            live: vec![true],
        }
    }

    #[test]
    fn well_oriented_tet_stays_live() {
        let mut mesh = well_oriented_tet();
        let mut diag = Diagnostics::default();
        filter_inverted_tets(&mut mesh, &mut diag);
        assert!(mesh.live[0]);
        assert_eq!(diag.inverted_tets, 0);
        assert_eq!(diag.degenerate_tets, 0);
    }

    #[test]
    fn inverted_tet_is_killed_and_counted() {
        let mut mesh = well_oriented_tet();
        mesh.tets[0] = [0, 1, 3, 2]; // swap last two vertices -> negative volume
        let mut diag = Diagnostics::default();
        filter_inverted_tets(&mut mesh, &mut diag);
        assert!(!mesh.live[0]);
        assert_eq!(diag.inverted_tets, 1);
        assert_eq!(diag.warnings.len(), 1);
    }

    #[test]
    fn degenerate_tet_is_killed_and_counted() {
        let mut mesh = TetMesh {
            vertices: vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [2.0, 0.0, 0.0],
                [3.0, 0.0, 0.0],
            ],
            tets: vec![[0, 1, 2, 3]],
            live: vec![true],
        };
        let mut diag = Diagnostics::default();
        filter_inverted_tets(&mut mesh, &mut diag);
        assert!(!mesh.live[0]);
        assert_eq!(diag.degenerate_tets, 1);
    }

    #[test]
    fn dead_tets_are_skipped() {
        let mut mesh = well_oriented_tet();
        mesh.live[0] = false;
        let mut diag = Diagnostics::default();
        filter_inverted_tets(&mut mesh, &mut diag);
        assert_eq!(diag.inverted_tets, 0);
        assert_eq!(diag.degenerate_tets, 0);
    }
}
