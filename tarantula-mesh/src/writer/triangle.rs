//! Triangle `.node`/`.ele`/`.face` writer.
//!
//! One file per array, 1-based indices per the Triangle format convention. Attribute
//! columns are present but zeroed except the facet boundary marker.

use std::io::Write;
use std::path::Path;

use crate::types::ExtractedDomain;

/// Write `domain` as `{basename}.node`, `{basename}.ele`, and `{basename}.face`.
pub fn write(domain: &ExtractedDomain, basename: &Path) -> std::io::Result<()> {
    write_node_file(domain, &basename.with_extension("node"))?;
    write_ele_file(domain, &basename.with_extension("ele"))?;
    write_face_file(domain, &basename.with_extension("face"))?;
    Ok(())
}

fn write_node_file(domain: &ExtractedDomain, path: &Path) -> std::io::Result<()> {
    let mut out = std::io::BufWriter::new(std::fs::File::create(path)?);
    writeln!(out, "{} 3 0 0", domain.mesh.num_vertices())?;
    for (i, v) in domain.mesh.vertices.iter().enumerate() {
        writeln!(out, "{} {} {} {}", i + 1, v[0], v[1], v[2])?;
    }
    out.flush()
}

/// Dead tets (`live[i] == false`, e.g. killed by the locked-tet purge) are skipped and do
/// not count toward the header's element count.
fn write_ele_file(domain: &ExtractedDomain, path: &Path) -> std::io::Result<()> {
    let mut out = std::io::BufWriter::new(std::fs::File::create(path)?);
    writeln!(out, "{} 4 1", domain.mesh.num_live())?;
    for (i, tet_index) in domain.mesh.live_tets().enumerate() {
        let tet = &domain.mesh.tets[tet_index];
        writeln!(
            out,
            "{} {} {} {} {} 1",
            i + 1,
            tet[0] + 1,
            tet[1] + 1,
            tet[2] + 1,
            tet[3] + 1
        )?;
    }
    out.flush()
}

fn write_face_file(domain: &ExtractedDomain, path: &Path) -> std::io::Result<()> {
    let mut out = std::io::BufWriter::new(std::fs::File::create(path)?);
    writeln!(out, "{} 1", domain.facets.len())?;
    for (i, facet) in domain.facets.iter().enumerate() {
        writeln!(
            out,
            "{} {} {} {} {}",
            i + 1,
            facet.vertices[0] + 1,
            facet.vertices[1] + 1,
            facet.vertices[2] + 1,
            facet.boundary_id.tag()
        )?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoundaryId, Facet, TetMesh};
    use tempfile::tempdir;

    fn one_tet_domain() -> ExtractedDomain {
        ExtractedDomain {
            mesh: TetMesh {
                vertices: vec![
                    [0.0, 0.0, 0.0],
                    [1.0, 0.0, 0.0],
                    [0.0, 1.0, 0.0],
                    [0.0, 0.0, 1.0],
                ],
                tets: vec![[0, 1, 2, 3]],
                live: vec![true],
            },
            facets: vec![Facet {
                vertices: [1, 3, 2],
                boundary_id: BoundaryId::Outlet,
            }],
        }
    }

    #[test]
    fn writes_three_files_with_1_based_indices() {
        let dir = tempdir().unwrap();
        let basename = dir.path().join("sample");
        write(&one_tet_domain(), &basename).unwrap();

        let node = std::fs::read_to_string(basename.with_extension("node")).unwrap();
        assert!(node.starts_with("4 3 0 0\n"));
        assert!(node.contains("1 0 0 0"));

        let ele = std::fs::read_to_string(basename.with_extension("ele")).unwrap();
        assert!(ele.starts_with("1 4 1\n"));
        assert!(ele.contains("1 1 2 3 4 1"));

        let face = std::fs::read_to_string(basename.with_extension("face")).unwrap();
        assert!(face.starts_with("1 1\n"));
        assert!(face.contains("1 2 4 3 2"));
    }

    #[test]
    fn dead_tets_are_excluded_from_the_ele_file() {
        let dir = tempdir().unwrap();
        let basename = dir.path().join("sample");
        let mut domain = one_tet_domain();
        domain.mesh.tets.push([0, 1, 2, 3]);
        domain.mesh.live.push(false);
        write(&domain, &basename).unwrap();

        let ele = std::fs::read_to_string(basename.with_extension("ele")).unwrap();
        assert!(ele.starts_with("1 4 1\n"));
        assert_eq!(ele.lines().count(), 2);
    }
}
