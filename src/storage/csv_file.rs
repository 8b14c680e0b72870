use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::domain::{HEADER, Row};

/// Writes the header and rows as CSV.
///
/// Fields are quoted only when they contain a comma, a quote or a line break.
/// Records are terminated with `\r\n`.
pub fn write<W: Write>(writer: W, rows: &[Row]) -> Result<(), SaveError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    writer.write_record(HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes the header and rows to the given file path.
/// Creates the file if it doesn't exist, or overwrites it if it does.
pub fn save(path: &Path, rows: &[Row]) -> Result<(), SaveError> {
    let file = File::create(path)?;
    write(BufWriter::new(file), rows)?;

    tracing::info!(rows = rows.len(), path = %path.display(), "wrote csv export");

    Ok(())
}

/// Errors that can occur writing the CSV export.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The file could not be created or written.
    #[error("failed to write csv file")]
    Io(#[from] io::Error),

    /// A record could not be serialized.
    #[error("failed to serialize csv record")]
    Csv(#[from] csv::Error),
}
