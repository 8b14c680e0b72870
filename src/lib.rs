//! Requirements table export
//!
//! Extracts the rows of the requirements table embedded in a markdown document
//! and writes them to a CSV file with a fixed seven column header.

mod domain;
pub use domain::{
    COLUMN_COUNT, Config, DEFAULT_INPUT, DEFAULT_OUTPUT, DELIMITER, HEADER, HEADER_KEYWORDS, Line,
    Row,
};

mod storage;
pub use storage::{Directory, ExportError, LoadError, MarkdownTable, SaveError};
