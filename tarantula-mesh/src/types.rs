//! Core type definitions for the domain extraction pipeline.

use std::time::Duration;

/// A vertex position in 3D space.
pub type Vertex = [f64; 3];

/// Sentinel written into a dead tet's first connectivity slot, mirroring the raw storage
/// convention of the original Tarantula tool. Algorithms that work directly on raw arrays
/// (adjacency, flood fill) still check against this sentinel internally; the pipeline-level
/// API instead exposes a parallel `live` mask so callers never have to reason about it.
pub const DEAD_TET_SENTINEL: i64 = -1;

/// A tetrahedral mesh: vertex positions and 4-tuples of vertex indices, plus a parallel
/// liveness mask.
///
/// `live[i]` is the idiomatic replacement for testing `tets[i][0] == DEAD_TET_SENTINEL`
/// at the pipeline boundary; the sentinel convention survives internally in the tighter
/// loops of [`crate::adjacency`] and [`crate::flood`], which mirror the original tool's
/// array-of-ints representation directly.
#[derive(Debug, Clone)]
pub struct TetMesh {
    /// Vertex coordinates, indexed 0..num_vertices.
    pub vertices: Vec<Vertex>,
    /// Tet connectivity: four vertex indices per tet, indexed 0..num_tets.
    pub tets: Vec<[usize; 4]>,
    /// Per-tet liveness; `false` means killed by material selection, orientation
    /// filtering, or locked-tet purge.
    pub live: Vec<bool>,
}

impl TetMesh {
    /// Number of tets, live or dead.
    pub fn num_tets(&self) -> usize {
        self.tets.len()
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Indices of tets currently marked live, in ascending order.
    pub fn live_tets(&self) -> impl Iterator<Item = usize> + '_ {
        self.live
            .iter()
            .enumerate()
            .filter_map(|(i, &alive)| alive.then_some(i))
    }

    /// Number of tets currently marked live.
    pub fn num_live(&self) -> usize {
        self.live.iter().filter(|&&alive| alive).count()
    }
}

/// The three material subsets read from a Tarantula mesh file.
///
/// `mat1` denotes zero-valued (pore) tets, `mat2` one-valued (solid) tets. `mat0` is never
/// consulted by the extraction algorithm; only its cardinality is surfaced, in
/// [`Diagnostics::mat0_count`].
#[derive(Debug, Clone, Default)]
pub struct MaterialSets {
    /// Tet indices in the `mat0` section of the input file.
    pub mat0: Vec<usize>,
    /// Tet indices in the `mat1` section (pore phase).
    pub mat1: Vec<usize>,
    /// Tet indices in the `mat2` section (solid phase).
    pub mat2: Vec<usize>,
}

/// Chooses which material partition survives material selection; the complement is killed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum MaterialSelector {
    /// `mat2` tets are kept live; `mat1` tets are killed. The default.
    #[default]
    Mat2,
    /// `mat1` tets are kept live; `mat2` tets are killed. Selected by the CLI's `-t/--toggle`.
    Mat1,
}

impl MaterialSelector {
    /// Indices of the tets this selector keeps live, given a parsed [`MaterialSets`].
    pub fn kept_live<'a>(&self, materials: &'a MaterialSets) -> &'a [usize] {
        match self {
            MaterialSelector::Mat2 => &materials.mat2,
            MaterialSelector::Mat1 => &materials.mat1,
        }
    }
}

/// Per-tet reachability label produced by the two-pass flood fill.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Label {
    /// Reached by neither sweep.
    #[default]
    NotReached = 0,
    /// Reached by the forward sweep from the inlet, not yet confirmed to reach the outlet.
    Forward = 1,
    /// Reached by both sweeps: part of the percolating cluster.
    Percolating = 2,
}

/// Classification of a boundary facet by which side of the sample's bounding box it lies on.
///
/// Values 1-6 are the six faces of the axis-aligned bounding box; `Internal` is the
/// catch-all for boundary faces that don't lie on any bbox plane (voids touching the
/// percolating cluster).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum BoundaryId {
    /// `x = xmin` face. Seeds the forward flood-fill front.
    Inlet = 1,
    /// `x = xmax` face. Seeds the backward flood-fill front.
    Outlet = 2,
    /// `y = ymin` face.
    YMin = 3,
    /// `y = ymax` face.
    YMax = 4,
    /// `z = zmin` face.
    ZMin = 5,
    /// `z = zmax` face.
    ZMax = 6,
    /// Boundary face not coplanar with any bbox plane within tolerance.
    Internal = 7,
}

impl BoundaryId {
    /// The physical-entity tag written by the Gmsh writer, identical to the discriminant.
    pub fn tag(&self) -> u8 {
        *self as u8
    }
}

impl std::fmt::Display for BoundaryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BoundaryId::Inlet => "inlet",
            BoundaryId::Outlet => "outlet",
            BoundaryId::YMin => "y_min",
            BoundaryId::YMax => "y_max",
            BoundaryId::ZMin => "z_min",
            BoundaryId::ZMax => "z_max",
            BoundaryId::Internal => "internal",
        };
        write!(f, "{name}")
    }
}

/// A boundary triangle of the output mesh: three (compact) vertex indices plus the
/// boundary side it was classified into.
#[derive(Debug, Copy, Clone)]
pub struct Facet {
    /// Compact vertex indices, ordered to yield an outward-pointing normal.
    pub vertices: [usize; 3],
    /// Which side of the sample this facet lies on.
    pub boundary_id: BoundaryId,
}

/// The fully extracted percolating domain: a compacted tet mesh plus its boundary facets.
#[derive(Debug, Clone)]
pub struct ExtractedDomain {
    /// The compacted, percolating-only mesh.
    pub mesh: TetMesh,
    /// Boundary facets of the compacted mesh.
    pub facets: Vec<Facet>,
}

/// Non-fatal counters and warnings accumulated over a pipeline run.
///
/// Mirrors the teacher crate's convention of returning a rich, inspectable summary struct
/// alongside the primary data rather than only side-effecting through logging.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    /// Tets killed by the orientation filter for negative signed volume.
    pub inverted_tets: usize,
    /// Tets killed by the orientation filter for near-zero signed volume.
    pub degenerate_tets: usize,
    /// Tets killed by the locked-tet purge (zero if that pass was not run).
    pub locked_tets: usize,
    /// Number of tets in the input file's `mat0` section. Never affects control flow.
    pub mat0_count: usize,
    /// Free-form warnings, one per anomaly, suitable for printing when verbose output is
    /// requested.
    pub warnings: Vec<String>,
    /// Wall-clock time spent in each named pipeline stage, in the order the stages ran.
    pub stage_timings: Vec<(String, Duration)>,
}

impl Diagnostics {
    /// Record a warning message.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Record the elapsed time for a named stage.
    pub fn record_stage(&mut self, name: impl Into<String>, elapsed: Duration) {
        self.stage_timings.push((name.into(), elapsed));
    }
}
