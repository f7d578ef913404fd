//! Gmsh `.msh` version 2.2 ASCII writer.

use std::io::Write;
use std::path::Path;

use crate::types::ExtractedDomain;

/// Write `domain` as `{basename}.msh`.
///
/// Tets use element type 4 with tags `1 1`; facets use element type 2 (triangle) with
/// the facet's boundary ID as its single physical-entity tag. Tets killed by the
/// locked-tet purge (`live[i] == false`) are skipped and do not count toward the
/// `$Elements` header.
pub fn write(domain: &ExtractedDomain, basename: &Path) -> std::io::Result<()> {
    let path = basename.with_extension("msh");
    let file = std::fs::File::create(path)?;
    let mut out = std::io::BufWriter::new(file);

    let num_nodes = domain.mesh.num_vertices();
    let num_tets = domain.mesh.num_live();
    let num_facets = domain.facets.len();

    writeln!(out, "$MeshFormat")?;
    writeln!(out, "2.2 0 8")?;
    writeln!(out, "$EndMeshFormat")?;
    writeln!(out, "$Nodes")?;
    writeln!(out, "{num_nodes}")?;
    for (i, v) in domain.mesh.vertices.iter().enumerate() {
        writeln!(out, "{} {} {} {}", i + 1, v[0], v[1], v[2])?;
    }
    writeln!(out, "$EndNodes")?;
    writeln!(out, "$Elements")?;
    writeln!(out, "{}", num_tets + num_facets)?;
    for (i, tet_index) in domain.mesh.live_tets().enumerate() {
        let tet = &domain.mesh.tets[tet_index];
        writeln!(
            out,
            "{} 4 1 1 {} {} {} {}",
            i + 1,
            tet[0] + 1,
            tet[1] + 1,
            tet[2] + 1,
            tet[3] + 1
        )?;
    }
    for (i, facet) in domain.facets.iter().enumerate() {
        writeln!(
            out,
            "{} 2 1 {} {} {} {}",
            i + num_tets + 1,
            facet.boundary_id.tag(),
            facet.vertices[0] + 1,
            facet.vertices[1] + 1,
            facet.vertices[2] + 1
        )?;
    }
    writeln!(out, "$EndElements")?;

    out.flush()
}
