//! Output format adapters.
//!
//! Writers are pure serializers over `(vertices, tets, facets)`: they never mutate their
//! input and are the only place in the crate that performs file I/O on the output side.

pub mod gmsh;
pub mod triangle;
pub mod vtu;

use crate::types::ExtractedDomain;

/// Which output format a writer should emit.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    /// Gmsh `.msh` version 2.2 ASCII format.
    Gmsh,
    /// Triangle `.node`/`.ele`/`.face` format, one file per array.
    Triangle,
    /// VTU (`vtkUnstructuredGrid`) XML format.
    Vtu,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gmsh" => Ok(OutputFormat::Gmsh),
            "triangle" => Ok(OutputFormat::Triangle),
            "vtu" => Ok(OutputFormat::Vtu),
            other => Err(format!(
                "unrecognized output format {other:?}, expected one of: gmsh, triangle, vtu"
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OutputFormat::Gmsh => "gmsh",
            OutputFormat::Triangle => "triangle",
            OutputFormat::Vtu => "vtu",
        };
        write!(f, "{name}")
    }
}

/// Write `domain` to `basename` using the given format. `basename` has no extension;
/// each writer appends its own.
pub fn write(
    domain: &ExtractedDomain,
    basename: &std::path::Path,
    format: OutputFormat,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Gmsh => gmsh::write(domain, basename),
        OutputFormat::Triangle => triangle::write(domain, basename),
        OutputFormat::Vtu => vtu::write(domain, basename),
    }
}
