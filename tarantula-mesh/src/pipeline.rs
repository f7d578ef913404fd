//! Orchestrates the full extraction pipeline: material selection through facet
//! extraction and, optionally, the locked-tet purge.

use std::io::BufRead;
use std::time::Instant;

use crate::adjacency::{build_element_element_map, build_node_element_map};
use crate::classify::seed_fronts;
use crate::compact::compact;
use crate::error::{ExtractError, Result};
use crate::flood::flood;
use crate::facets::extract_facets;
use crate::geometry::{characteristic_length, BoundingBox};
use crate::locked::purge_locked_tets;
use crate::orientation::filter_inverted_tets;
use crate::parser;
use crate::types::{Diagnostics, ExtractedDomain, Label, MaterialSelector, TetMesh};

/// Options controlling a single extraction run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    /// Which material partition is kept live; see [`MaterialSelector`].
    pub selector: MaterialSelector,
    /// Whether to run the locked-tet purge (C8) after compaction.
    pub purge_locked: bool,
}

/// Parse a Tarantula mesh from `input` and run it through the full extraction pipeline,
/// returning the percolating domain and a diagnostics record.
///
/// This is the one place that calls the individual components (adjacency, orientation,
/// classification, flood fill, compaction, facet extraction, and the optional
/// locked-tet purge) in order.
pub fn extract(input: impl BufRead, options: ExtractOptions) -> Result<(ExtractedDomain, Diagnostics)> {
    let mut diagnostics = Diagnostics::default();

    let stage_start = Instant::now();
    let (mut mesh, materials) = parser::parse(input)?;
    diagnostics.record_stage("parse", stage_start.elapsed());
    diagnostics.mat0_count = materials.mat0.len();

    apply_material_selection(&mut mesh, &materials, options.selector);

    let stage_start = Instant::now();
    filter_inverted_tets(&mut mesh, &mut diagnostics);
    diagnostics.record_stage("orientation_filter", stage_start.elapsed());

    let stage_start = Instant::now();
    let ne = build_node_element_map(&mesh);
    let ee = build_element_element_map(&mesh, &ne)?;
    diagnostics.record_stage("adjacency", stage_start.elapsed());

    let bbox = BoundingBox::from_vertices(mesh.vertices.iter().copied())
        .ok_or(ExtractError::EmptyResult)?;
    let eta = characteristic_length(&mesh.vertices, mesh.live_tets().map(|i| mesh.tets[i]));

    let stage_start = Instant::now();
    let (front0, front1) = seed_fronts(&mesh, &ee, &bbox, eta);
    let labels = flood(&ee, &front0, &front1);
    diagnostics.record_stage("flood_fill", stage_start.elapsed());

    if !labels.iter().any(|&l| l == Label::Percolating) {
        return Err(ExtractError::EmptyResult);
    }

    let stage_start = Instant::now();
    let (mut compacted, renumber) = compact(&mesh, &labels);
    diagnostics.record_stage("compaction", stage_start.elapsed());

    let stage_start = Instant::now();
    let facets = extract_facets(&mesh, &ee, &labels, &renumber, &bbox, eta);
    diagnostics.record_stage("facet_extraction", stage_start.elapsed());

    if options.purge_locked {
        let stage_start = Instant::now();
        purge_locked_tets(&mut compacted, &mut diagnostics)?;
        diagnostics.record_stage("locked_tet_purge", stage_start.elapsed());
    }

    Ok((
        ExtractedDomain {
            mesh: compacted,
            facets,
        },
        diagnostics,
    ))
}

/// Kill every tet not in the selector's kept-live partition.
fn apply_material_selection(
    mesh: &mut TetMesh,
    materials: &crate::types::MaterialSets,
    selector: MaterialSelector,
) {
    let kept_live: std::collections::BTreeSet<usize> =
        selector.kept_live(materials).iter().copied().collect();
    for i in 0..mesh.num_tets() {
        mesh.live[i] = kept_live.contains(&i);
    }
}
