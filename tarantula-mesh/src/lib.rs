//! # tarantula-mesh
//!
//! Domain extraction for two-phase tetrahedral micro-CT meshes.
//!
//! Given a Tarantula-format tetrahedral mesh segmented into pore and solid phases, this
//! crate selects the material partition of interest, filters degenerate geometry, finds
//! the subset of tets that percolates from one face of the sample to the opposite face,
//! compacts the mesh down to that subset, and classifies its boundary into named sides.
//! An optional pass removes "locked" tets, a voxelisation artefact that produces singular
//! stiffness matrices in downstream flow solvers.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::io::BufReader;
//! use tarantula_mesh::pipeline::{extract, ExtractOptions};
//!
//! let file = std::fs::File::open("sample.tarantula")?;
//! let (domain, diagnostics) = extract(BufReader::new(file), ExtractOptions::default())?;
//! println!("{} tets survived, {} inverted", domain.mesh.num_tets(), diagnostics.inverted_tets);
//! # Ok::<(), tarantula_mesh::ExtractError>(())
//! ```
//!
//! ## Module organization
//!
//! - [`error`] - Error types and the crate's result alias
//! - [`types`] - Core data model (`TetMesh`, `MaterialSets`, `Label`, `BoundaryId`, `Diagnostics`)
//! - [`geometry`] - Signed volume, bounding boxes, characteristic length
//! - [`topology`] - Tetrahedron face/vertex tables
//! - [`adjacency`] - Node→element and element→element map construction
//! - [`orientation`] - Inverted/degenerate tet filtering
//! - [`classify`] - Boundary facet classification and flood-front seeding
//! - [`flood`] - Two-pass percolation flood fill
//! - [`compact`] - Mesh compaction and vertex renumbering
//! - [`facets`] - Boundary facet extraction
//! - [`locked`] - Locked-tet purge
//! - [`parser`] - Tarantula text format reader
//! - [`writer`] - Gmsh, Triangle, and VTU output adapters
//! - [`pipeline`] - End-to-end orchestration

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod error;
pub mod types;

pub mod geometry;
pub mod topology;

pub mod adjacency;
pub mod orientation;
pub mod classify;
pub mod flood;
pub mod compact;
pub mod facets;
pub mod locked;

pub mod parser;
pub mod writer;

pub mod pipeline;

pub use error::{ExtractError, Result};
pub use types::{
    BoundaryId, Diagnostics, ExtractedDomain, Facet, Label, MaterialSelector, MaterialSets,
    TetMesh, Vertex,
};
