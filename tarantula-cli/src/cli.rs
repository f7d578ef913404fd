//! Command-line argument parsing for `tarantula-extract`.

use std::path::PathBuf;

use clap::Parser;
use tarantula_mesh::writer::OutputFormat;

/// Extract the percolating domain from a two-phase tetrahedral Tarantula mesh.
///
/// Selects the material partition to keep live, filters degenerate geometry, finds the
/// subset of tets percolating between the inlet and outlet faces, compacts the mesh, and
/// writes it in the requested output format.
#[derive(Parser, Debug)]
#[command(name = "tarantula-extract")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Tarantula mesh file to read.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output basename (extension is added by the selected writer). Defaults to the
    /// input path with its extension stripped.
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Print progress and diagnostic warnings as the pipeline runs.
    #[arg(short, long)]
    pub verbose: bool,

    /// Invert material selection: keep `mat1` live instead of the default `mat2`.
    #[arg(short, long)]
    pub toggle: bool,

    /// Run the locked-tet purge after compaction.
    #[arg(long = "purge-locked")]
    pub purge_locked: bool,

    /// Output format: one of `gmsh`, `triangle`, `vtu`.
    #[arg(long, value_name = "FORMAT", default_value = "gmsh")]
    pub format: OutputFormat,
}

impl Cli {
    /// The output basename, defaulting to the input path with its extension stripped.
    pub fn output_basename(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension(""))
    }
}
