//! Filesystem input and output for the requirements export.
//!
//! The [`Directory`] ties a root path to the markdown document and CSV file
//! named by a [`Config`].

use std::path::PathBuf;

use crate::domain::Config;

mod csv_file;
pub use csv_file::SaveError;

mod markdown;
pub use markdown::{LoadError, MarkdownTable};

/// A directory containing a requirements document.
#[derive(Debug, Clone)]
pub struct Directory {
    /// The root that relative input and output paths are resolved against.
    root: PathBuf,
    config: Config,
}

impl Directory {
    /// Opens a directory at the given path with the default file names.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self::with_config(root, Config::default())
    }

    /// Opens a directory at the given path with explicit file names.
    #[must_use]
    pub const fn with_config(root: PathBuf, config: Config) -> Self {
        Self { root, config }
    }

    /// The markdown document the table is read from.
    #[must_use]
    pub fn input_path(&self) -> PathBuf {
        self.config.input(&self.root)
    }

    /// The CSV file the table is written to.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.config.output(&self.root)
    }

    /// Read the requirements table and write it out as CSV.
    ///
    /// The whole document is read before the output file is touched, so a
    /// missing input never creates or truncates the output.
    ///
    /// Returns the path of the written file.
    pub fn export(&self) -> Result<PathBuf, ExportError> {
        let input = self.input_path();
        let output = self.output_path();

        tracing::debug!(input = %input.display(), output = %output.display(), "exporting");

        let table = MarkdownTable::load(&input)?;
        csv_file::save(&output, table.rows())?;

        Ok(output)
    }
}

/// Errors that can occur exporting a requirements table.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The markdown document could not be read.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The CSV file could not be written.
    #[error(transparent)]
    Save(#[from] SaveError),
}
