//! Error types for the domain extraction pipeline.

use thiserror::Error;

/// Result type alias for `tarantula-mesh` operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Fatal errors that can occur while extracting a percolating domain from a
/// Tarantula mesh.
///
/// Non-fatal anomalies (an inverted or degenerate tet) are not represented
/// here — they are recoverable by construction (the offending tet is killed
/// and the pipeline continues) and are instead recorded on
/// [`crate::types::Diagnostics`].
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The parser could not interpret the Tarantula mesh file.
    #[error("malformed input: {detail}")]
    MalformedInput {
        /// Human-readable description of what was expected and where parsing stopped.
        detail: String,
    },

    /// A face of the mesh has more than two live incident tets.
    #[error("non-manifold mesh: tet {tet} local face {face} has {incident} incident live tets")]
    NonManifoldMesh {
        /// Index of the tet whose face triggered the failure.
        tet: usize,
        /// Local face index (0..4) on that tet.
        face: usize,
        /// Number of live tets found incident to the face (always > 2).
        incident: usize,
    },

    /// After the two-pass flood fill, no tet is labelled percolating.
    ///
    /// The sample does not percolate along the x-axis; there is nothing
    /// downstream to emit.
    #[error("no percolating path between the inlet and outlet faces")]
    EmptyResult,

    /// I/O failure while reading the input mesh or writing an output format.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
