//! Tetrahedron face/vertex tables.
//!
//! A tet has four local faces, each opposite one local vertex. Local face `j` is the
//! triangle formed by local vertices `(j+1, j+2, j+3) mod 4`; the winding order below is
//! chosen so that the emitted triangle has an outward-pointing normal under the signed
//! volume convention of [`crate::geometry::signed_volume`].

/// Local vertex indices, in winding order, for the facet opposite local vertex `j`.
///
/// `j` must be in `0..4`.
pub fn face_vertices(j: usize) -> [usize; 3] {
    FACE_TABLE[j]
}

const FACE_TABLE: [[usize; 3]; 4] = [[1, 3, 2], [0, 2, 3], [0, 3, 1], [0, 1, 2]];

/// The three global vertex indices of local face `j` of tet `tet`, in winding order.
pub fn face_of_tet(tet: &[usize; 4], j: usize) -> [usize; 3] {
    let local = face_vertices(j);
    [tet[local[0]], tet[local[1]], tet[local[2]]]
}
