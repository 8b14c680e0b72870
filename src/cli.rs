use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context;
use req_export::{Config, DEFAULT_INPUT, DEFAULT_OUTPUT, Directory, ExportError, LoadError};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Export the requirements table of a markdown document to CSV.
///
/// With no arguments, reads `REFACTORED_REQUIREMENTS.md` and writes
/// `requirements_export.csv`, both in the current directory.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// The directory the input and output paths are relative to
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// The markdown document containing the requirements table
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// The CSV file to write. Any existing file is overwritten
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Install the log subscriber.
    ///
    /// Logs go to stderr; stdout is reserved for the result message.
    pub fn init_tracing(&self) {
        let filter = if self.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
        };

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }

    /// Export the table, reporting the outcome on stdout.
    ///
    /// A missing input document is reported and mapped to a failure exit code.
    pub fn run(self) -> anyhow::Result<ExitCode> {
        let directory =
            Directory::with_config(self.root, Config::new(self.input, self.output));

        match directory.export() {
            Ok(path) => {
                println!("Wrote {}", resolved(&path).display());
                Ok(ExitCode::SUCCESS)
            }
            Err(ExportError::Load(LoadError::NotFound(path))) => {
                println!("File not found: {}", resolved(&path).display());
                Ok(ExitCode::FAILURE)
            }
            Err(e) => Err(e).context("failed to export requirements"),
        }
    }
}

/// The absolute form of `path`, for reporting.
fn resolved(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
