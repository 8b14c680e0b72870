use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::domain::{Line, Row};

/// The requirements table of a markdown document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownTable {
    rows: Vec<Row>,
}

impl MarkdownTable {
    /// Reads the table rows from a markdown document, in document order.
    ///
    /// Lines outside the table, separator lines and header lines are skipped.
    pub fn read<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut rows = Vec::new();

        for line in reader.lines() {
            let line = line?;
            match Line::parse(&line) {
                Line::Data(row) => {
                    tracing::debug!(requirement = %row.requirement, "table row");
                    rows.push(row);
                }
                Line::Separator => tracing::debug!("skipping separator line"),
                Line::Header => tracing::debug!(%line, "skipping header line"),
                Line::Text => {}
            }
        }

        Ok(Self { rows })
    }

    /// Reads the table from the document at the given path.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|io_error| match io_error.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
            _ => LoadError::Io(io_error),
        })?;
        let table = Self::read(BufReader::new(file))?;

        tracing::info!(rows = table.rows.len(), path = %path.display(), "read requirements table");

        Ok(table)
    }

    /// The data rows, in document order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Consumes the table, returning its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

/// Errors that can occur reading a markdown document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The document does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Any other failure reading the document.
    #[error("failed to read markdown document")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use tempfile::TempDir;

    use super::*;

    const DOCUMENT: &str = "\
# Refactored Requirements

Some prose with a | pipe in it.

| Package/App (Namespace) | Requirement # | Description | Implemented in | Status | Notes | Date |
|---|---|---|---|---|---|---|
| core | REQ-1 | Parses input | `Parser::parse()` | Done | none | 2024-01-01 |
| core | REQ-2 | Writes output | writer.rs | In progress |
| cli | REQ-3 | Has flags | main.rs | Done | a | b | extra | more |

## Appendix

| --- | --- |
";

    #[test]
    fn reads_rows_in_document_order() {
        let table = MarkdownTable::read(Cursor::new(DOCUMENT)).unwrap();
        let ids: Vec<_> = table.rows().iter().map(|row| row.requirement.as_str()).collect();

        assert_eq!(ids, ["REQ-1", "REQ-2", "REQ-3"]);
    }

    #[test]
    fn rows_are_normalised() {
        let rows = MarkdownTable::read(Cursor::new(DOCUMENT)).unwrap().into_rows();

        assert_eq!(
            rows[0].fields(),
            ["core", "REQ-1", "Parses input", "Parser::parse()", "Done", "none", "2024-01-01"]
        );
        assert_eq!(
            rows[1].fields(),
            ["core", "REQ-2", "Writes output", "writer.rs", "In progress", "", ""]
        );
        assert_eq!(
            rows[2].fields(),
            ["cli", "REQ-3", "Has flags", "main.rs", "Done", "a", "b"]
        );
    }

    #[test]
    fn empty_document() {
        let table = MarkdownTable::read(Cursor::new("")).unwrap();
        assert!(table.rows().is_empty());
    }

    #[test]
    fn crlf_line_endings() {
        let document = "| a | b | c | d | e | f | g |\r\n| h | i |\r\n";
        let rows = MarkdownTable::read(Cursor::new(document)).unwrap().into_rows();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, "g");
        assert_eq!(rows[1].fields(), ["h", "i", "", "", "", "", ""]);
    }

    #[test]
    fn load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("REFACTORED_REQUIREMENTS.md");
        std::fs::write(&path, DOCUMENT).unwrap();

        let table = MarkdownTable::load(&path).unwrap();
        assert_eq!(table.rows().len(), 3);
    }

    #[test]
    fn load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.md");

        let result = MarkdownTable::load(&path);
        assert!(matches!(result, Err(LoadError::NotFound(missing)) if missing == path));
    }

    #[test]
    fn invalid_utf8_is_an_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("binary.md");
        std::fs::write(&path, [b'|', 0xff, 0xfe, b'|', b'\n']).unwrap();

        let result = MarkdownTable::load(&path);
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
