//! Table and Row data structures

use std::path::{Path, PathBuf};

/// A data row. Cell values stay raw strings; `cells[i]` belongs to the
/// table's `fields[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Cell values in header order.
    pub cells: Vec<String>,
    /// Line number in the source file (1-indexed).
    pub source_line: u64,
}

impl Row {
    pub fn new(cells: Vec<String>, source_line: u64) -> Self {
        Self { cells, source_line }
    }

    /// Get a cell value by column index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }
}

/// The parsed representation of one TSV file. Constructed once per input
/// at program start, immutable thereafter.
#[derive(Debug)]
pub struct Table {
    /// Column names, verbatim from the header line, order preserved.
    pub fields: Vec<String>,
    /// Data rows; every row holds exactly `fields.len()` cells.
    pub rows: Vec<Row>,
    /// Where the table came from, for error context.
    pub source: PathBuf,
}

impl Table {
    pub fn new(fields: Vec<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            fields,
            rows: Vec::new(),
            source: source.into(),
        }
    }

    /// Column index by header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == name)
    }

    /// Whether the header names this field.
    pub fn has_field(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Value of `field` in `row`, `None` when the header lacks the field.
    pub fn value<'a>(&self, row: &'a Row, field: &str) -> Option<&'a str> {
        self.column_index(field).and_then(|i| row.get(i))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.fields.len()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Re-serialize header and rows as tab-separated lines. Round-trips a
    /// well-formed input file byte-identically modulo the trailing newline.
    pub fn to_tsv(&self) -> String {
        let mut out = self.fields.join("\t");
        for row in &self.rows {
            out.push('\n');
            out.push_str(&row.cells.join("\t"));
        }
        out
    }
}
