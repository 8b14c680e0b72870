use std::sync::LazyLock;

use regex::Regex;

use super::Row;

/// The character that delimits table cells.
pub const DELIMITER: char = '|';

/// Substrings that mark a line as the table header.
///
/// A data row whose content contains one of these labels is treated as a
/// header too.
pub const HEADER_KEYWORDS: [&str; 4] = [
    "Package/App (Namespace)",
    "Requirement #",
    "Description",
    "Implemented in",
];

static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|\s*-{3,}").expect("separator pattern is valid"));

/// The classification of a single line of a markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// The line is not part of a table.
    Text,

    /// A formatting line dividing the header from the body, eg. `| --- | --- |`.
    Separator,

    /// The row of column labels.
    Header,

    /// A row of requirement data.
    Data(Row),
}

impl Line {
    /// Classify a single line.
    ///
    /// Trailing line terminators are ignored.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);

        if !line.starts_with(DELIMITER) {
            return Self::Text;
        }

        if SEPARATOR.is_match(line) {
            return Self::Separator;
        }

        if HEADER_KEYWORDS.iter().any(|keyword| line.contains(keyword)) {
            return Self::Header;
        }

        Self::Data(Row::from_fields(split_cells(line)))
    }

    /// Returns the row if this is a data line.
    #[must_use]
    pub fn into_row(self) -> Option<Row> {
        match self {
            Self::Data(row) => Some(row),
            _ => None,
        }
    }
}

/// Split a table line into trimmed cells.
///
/// The empty cells produced by the leading and trailing delimiters are dropped.
fn split_cells(line: &str) -> Vec<&str> {
    let mut cells: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();

    if cells.first().is_some_and(|cell| cell.is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|cell| cell.is_empty()) {
        cells.pop();
    }

    cells
}
