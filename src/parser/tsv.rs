//! Tab-separated file parsing
//!
//! Tabs are the only delimiter; there is no quote or escape handling, so a
//! value can never contain an embedded tab or newline. Both files are fully
//! materialized before comparison starts.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::Error;
use crate::model::{Row, Table};

/// Parse a TSV file: first line is the header, every following line a data
/// row with exactly as many tab-separated tokens as the header.
///
/// A row with fewer or more tokens than the header is rejected as
/// [`Error::MalformedRow`] with file and line context instead of being
/// truncated or padded.
pub fn parse(path: &Path) -> Result<Table, Error> {
    let file = File::open(path).map_err(|source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let mut tsv_reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let headers = tsv_reader.headers()?.clone();
    if headers.is_empty() || (headers.len() == 1 && headers[0].is_empty()) {
        return Err(Error::FileAccess {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "missing header line"),
        });
    }

    let fields: Vec<String> = headers.iter().map(str::to_string).collect();
    let mut table = Table::new(fields, path);

    for result in tsv_reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.len() != table.column_count() {
            return Err(Error::MalformedRow {
                path: path.to_path_buf(),
                line,
                expected: table.column_count(),
                found: record.len(),
            });
        }

        let cells: Vec<String> = record.iter().map(str::to_string).collect();
        table.rows.push(Row::new(cells, line));
    }

    Ok(table)
}
