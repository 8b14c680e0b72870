use std::path::{Path, PathBuf};

/// The default markdown document to read the requirements table from.
pub const DEFAULT_INPUT: &str = "REFACTORED_REQUIREMENTS.md";

/// The default CSV file to export to.
pub const DEFAULT_OUTPUT: &str = "requirements_export.csv";

/// Where to read the requirements table from, and where to write the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The markdown document.
    ///
    /// Relative paths are resolved against the export root.
    input: PathBuf,

    /// The CSV file.
    ///
    /// Relative paths are resolved against the export root.
    /// Any existing file is overwritten.
    output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl Config {
    /// Create a configuration with explicit input and output paths.
    #[must_use]
    pub const fn new(input: PathBuf, output: PathBuf) -> Self {
        Self { input, output }
    }

    /// The input path, resolved against `root`.
    #[must_use]
    pub fn input(&self, root: &Path) -> PathBuf {
        root.join(&self.input)
    }

    /// The output path, resolved against `root`.
    #[must_use]
    pub fn output(&self, root: &Path) -> PathBuf {
        root.join(&self.output)
    }
}
