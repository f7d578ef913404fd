//! `tarantula-extract`: extract the percolating domain from a Tarantula mesh.

mod cli;
mod progress;

use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;

use cli::Cli;
use progress::{create_progress_bar, finish_progress};
use tarantula_mesh::pipeline::{extract, ExtractOptions};
use tarantula_mesh::{writer, ExtractError, MaterialSelector};

/// Errors that can terminate the CLI before or after the extraction pipeline runs.
#[derive(Error, Debug)]
enum CliError {
    /// The input file could not be opened.
    #[error("failed to open {path}: {source}")]
    OpenInput {
        /// Path the CLI tried to open.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The extraction pipeline failed.
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// Writing the output format failed.
    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let file = File::open(&cli.input).map_err(|source| CliError::OpenInput {
        path: cli.input.display().to_string(),
        source,
    })?;
    let reader = BufReader::new(file);

    let selector = if cli.toggle {
        MaterialSelector::Mat1
    } else {
        MaterialSelector::Mat2
    };
    let options = ExtractOptions {
        selector,
        purge_locked: cli.purge_locked,
    };

    let pb = create_progress_bar(cli.verbose, 1, "Extracting percolating domain");
    let (domain, diagnostics) = extract(reader, options)?;
    finish_progress(pb);

    if cli.verbose {
        eprintln!(
            "kept {} tets ({} facets), mat0 {}, inverted {}, degenerate {}, locked {}",
            domain.mesh.num_live(),
            domain.facets.len(),
            diagnostics.mat0_count,
            diagnostics.inverted_tets,
            diagnostics.degenerate_tets,
            diagnostics.locked_tets,
        );
        for warning in &diagnostics.warnings {
            eprintln!("warning: {warning}");
        }
        for (stage, elapsed) in &diagnostics.stage_timings {
            eprintln!("  {stage}: {elapsed:.2?}");
        }
    }

    let basename = cli.output_basename();
    writer::write(&domain, &basename, cli.format)?;

    Ok(())
}
