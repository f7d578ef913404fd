//! VTU (`vtkUnstructuredGrid`) XML writer.
//!
//! Emits a `.vtu` file for the tets (VTK cell type 10, `VTK_TETRA`) and, when the
//! extracted domain has any facets, a second `_facets.vtu` file for the boundary
//! triangles (VTK cell type 5, `VTK_TRIANGLE`) carrying a cell-data array of facet IDs.

use std::io::Write;
use std::path::Path;

use crate::types::ExtractedDomain;

const VTK_TETRA: u8 = 10;
const VTK_TRIANGLE: u8 = 5;

/// Write `domain` as `{basename}.vtu` and, if it has facets, `{basename}_facets.vtu`.
///
/// Tets killed by the locked-tet purge (`live[i] == false`) are skipped.
pub fn write(domain: &ExtractedDomain, basename: &Path) -> std::io::Result<()> {
    write_cells(
        &domain.mesh.vertices,
        domain.mesh.live_tets().map(|i| domain.mesh.tets[i].to_vec()),
        domain.mesh.num_live(),
        VTK_TETRA,
        None,
        &basename.with_extension("vtu"),
    )?;

    if !domain.facets.is_empty() {
        let facet_ids: Vec<u8> = domain.facets.iter().map(|f| f.boundary_id.tag()).collect();
        let mut facets_path = basename.to_path_buf();
        let stem = facets_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        facets_path.set_file_name(format!("{stem}_facets.vtu"));

        write_cells(
            &domain.mesh.vertices,
            domain.facets.iter().map(|f| f.vertices.to_vec()),
            domain.facets.len(),
            VTK_TRIANGLE,
            Some(&facet_ids),
            &facets_path,
        )?;
    }

    Ok(())
}

fn write_cells(
    vertices: &[[f64; 3]],
    cells: impl Iterator<Item = Vec<usize>>,
    num_cells: usize,
    cell_type: u8,
    cell_data: Option<&[u8]>,
    path: &Path,
) -> std::io::Result<()> {
    let mut out = std::io::BufWriter::new(std::fs::File::create(path)?);

    writeln!(out, "<?xml version=\"1.0\"?>")?;
    writeln!(
        out,
        "<VTKFile type=\"UnstructuredGrid\" version=\"0.1\" byte_order=\"LittleEndian\">"
    )?;
    writeln!(out, "  <UnstructuredGrid>")?;
    writeln!(
        out,
        "    <Piece NumberOfPoints=\"{}\" NumberOfCells=\"{}\">",
        vertices.len(),
        num_cells
    )?;

    writeln!(out, "      <Points>")?;
    writeln!(
        out,
        "        <DataArray type=\"Float64\" NumberOfComponents=\"3\" format=\"ascii\">"
    )?;
    for v in vertices {
        writeln!(out, "          {} {} {}", v[0], v[1], v[2])?;
    }
    writeln!(out, "        </DataArray>")?;
    writeln!(out, "      </Points>")?;

    writeln!(out, "      <Cells>")?;
    writeln!(
        out,
        "        <DataArray type=\"Int64\" Name=\"connectivity\" format=\"ascii\">"
    )?;
    let mut cell_sizes = Vec::with_capacity(num_cells);
    for cell in cells {
        cell_sizes.push(cell.len());
        let row: Vec<String> = cell.iter().map(|v| v.to_string()).collect();
        writeln!(out, "          {}", row.join(" "))?;
    }
    writeln!(out, "        </DataArray>")?;

    writeln!(
        out,
        "        <DataArray type=\"Int64\" Name=\"offsets\" format=\"ascii\">"
    )?;
    let mut running = 0usize;
    for size in &cell_sizes {
        running += size;
        writeln!(out, "          {running}")?;
    }
    writeln!(out, "        </DataArray>")?;

    writeln!(
        out,
        "        <DataArray type=\"UInt8\" Name=\"types\" format=\"ascii\">"
    )?;
    for _ in 0..num_cells {
        writeln!(out, "          {cell_type}")?;
    }
    writeln!(out, "        </DataArray>")?;
    writeln!(out, "      </Cells>")?;

    if let Some(ids) = cell_data {
        writeln!(out, "      <CellData>")?;
        writeln!(
            out,
            "        <DataArray type=\"UInt8\" Name=\"facet_id\" format=\"ascii\">"
        )?;
        for id in ids {
            writeln!(out, "          {id}")?;
        }
        writeln!(out, "        </DataArray>")?;
        writeln!(out, "      </CellData>")?;
    }

    writeln!(out, "    </Piece>")?;
    writeln!(out, "  </UnstructuredGrid>")?;
    writeln!(out, "</VTKFile>")?;

    out.flush()
}
