//! CSV export of a recovered table.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{RecoveryError, Result};
use crate::table::Table;

fn writer_builder() -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder
        .delimiter(b',')
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary);
    builder
}

/// Serialize `table` as CSV: a header line, then one line per row
pub fn write_csv_to<W: Write>(table: &Table, out: W) -> std::result::Result<(), csv::Error> {
    let mut writer = writer_builder().from_writer(out);

    // A table without columns exports as an empty file
    if table.column_count() > 0 {
        writer.write_record(table.columns())?;
        for row in table.rows() {
            writer.write_record(row.iter().map(|cell| cell.to_string()))?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Write `table` to `path` as CSV, replacing any existing file
pub fn write_csv(table: &Table, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let wrap = |message: String| RecoveryError::WriteCsv {
        path: path.to_path_buf(),
        message,
    };

    let file = File::create(path).map_err(|e| wrap(e.to_string()))?;
    write_csv_to(table, BufWriter::new(file)).map_err(|e| wrap(e.to_string()))?;

    info!(path = %path.display(), rows = table.row_count(), "wrote csv");
    Ok(())
}
