//! Comparison engine for two parsed TSV tables

mod field_diff;
mod row_diff;

use std::io::Write;

use crate::config::CompareMode;
use crate::error::Error;
use crate::model::Table;

pub use field_diff::absent_fields;

/// One printable discrepancy. Findings are normal output, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Positional (exact/normal) mismatch at row `index`. `value_b` is
    /// `None` when the field is altogether absent from b's header, which
    /// exact mode reports as a mismatch in its own right.
    PositionalMismatch {
        index: usize,
        key: String,
        field: String,
        value_a: String,
        value_b: Option<String>,
    },
    /// Keyed mode: no row in b carries this key value.
    KeyNotInB { key: String },
    /// Keyed mode: the first b row matching `key` differs in `field`.
    KeyedMismatch {
        key: String,
        field: String,
        value_a: String,
        value_b: String,
    },
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Finding::PositionalMismatch {
                index,
                key,
                field,
                value_a,
                value_b,
            } => write!(
                f,
                "Different at index {}, ID {}: {}. Value {} != {}",
                index,
                key,
                field,
                value_a,
                value_b.as_deref().unwrap_or("<missing>")
            ),
            Finding::KeyNotInB { key } => write!(f, "ID {} not in b.", key),
            Finding::KeyedMismatch {
                key,
                field,
                value_a,
                value_b,
            } => write!(f, "ID {}: {}. {} != {}", key, field, value_a, value_b),
        }
    }
}

/// Result of comparing two tables. Rendering the same report twice yields
/// byte-identical output; nothing here is timestamped.
#[derive(Debug)]
pub struct DiffReport {
    /// Fields present in b's header but absent from a's.
    pub fields_missing_from_a: Vec<String>,
    /// Fields present in a's header but absent from b's.
    pub fields_missing_from_b: Vec<String>,
    /// Exact mode only: `(rows_a, rows_b)` when the counts differ. Set
    /// instead of `findings`; the run aborts after the field sets.
    pub length_mismatch: Option<(usize, usize)>,
    /// Row-level findings, in row order.
    pub findings: Vec<Finding>,
}

impl DiffReport {
    /// Any discrepancy at all, field-level or row-level.
    pub fn has_findings(&self) -> bool {
        !self.fields_missing_from_a.is_empty()
            || !self.fields_missing_from_b.is_empty()
            || self.length_mismatch.is_some()
            || !self.findings.is_empty()
    }

    /// Write the report as the line-oriented text format: both missing-field
    /// sets unconditionally, then either the length-mismatch line or the
    /// row findings.
    pub fn render<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(
            writer,
            "Fields not exist in a: {:?}",
            self.fields_missing_from_a
        )?;
        writeln!(
            writer,
            "Fields not exist in b: {:?}",
            self.fields_missing_from_b
        )?;
        if self.length_mismatch.is_some() {
            writeln!(writer, "Different in length")?;
            return Ok(());
        }
        for finding in &self.findings {
            writeln!(writer, "{}", finding)?;
        }
        Ok(())
    }
}

/// Compare two tables under the given mode.
///
/// The key column is validated against both headers before any comparison
/// work; a missing column fails with [`Error::KeyColumnNotFound`] naming
/// the offending file.
pub fn compare(
    table_a: &Table,
    table_b: &Table,
    key_column: &str,
    mode: CompareMode,
) -> Result<DiffReport, Error> {
    let a_key = table_a
        .column_index(key_column)
        .ok_or_else(|| Error::KeyColumnNotFound {
            column: key_column.to_string(),
            path: table_a.source().to_path_buf(),
        })?;
    let b_key = table_b
        .column_index(key_column)
        .ok_or_else(|| Error::KeyColumnNotFound {
            column: key_column.to_string(),
            path: table_b.source().to_path_buf(),
        })?;

    let mut report = DiffReport {
        fields_missing_from_a: absent_fields(&table_b.fields, &table_a.fields),
        fields_missing_from_b: absent_fields(&table_a.fields, &table_b.fields),
        length_mismatch: None,
        findings: Vec::new(),
    };

    if mode == CompareMode::Exact && table_a.row_count() != table_b.row_count() {
        report.length_mismatch = Some((table_a.row_count(), table_b.row_count()));
        return Ok(report);
    }

    report.findings = match mode {
        CompareMode::Exact | CompareMode::Normal => {
            row_diff::compare_positional(table_a, table_b, a_key, mode)
        }
        CompareMode::Keyed => row_diff::compare_keyed(table_a, table_b, a_key, b_key),
    };

    Ok(report)
}
