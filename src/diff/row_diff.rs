//! Row-level comparison strategies

use rustc_hash::FxHashMap;

use crate::config::CompareMode;
use crate::model::{Row, Table};

use super::Finding;

/// Positional comparison for exact and normal modes: row `i` of a is
/// assumed to correspond to row `i` of b.
///
/// In exact mode the caller has already enforced equal row counts; in
/// normal mode comparison runs over the rows both tables have. For every
/// field of a's header, exact mode reports a field missing from b as a
/// mismatch, normal mode skips it silently.
pub fn compare_positional(
    table_a: &Table,
    table_b: &Table,
    a_key: usize,
    mode: CompareMode,
) -> Vec<Finding> {
    let mut findings = Vec::new();
    let rows = table_a.row_count().min(table_b.row_count());

    for index in 0..rows {
        let row_a = &table_a.rows[index];
        let row_b = &table_b.rows[index];
        let key = row_a.cells[a_key].clone();

        for (field_index, field) in table_a.fields.iter().enumerate() {
            let value_a = &row_a.cells[field_index];
            match table_b.value(row_b, field) {
                Some(value_b) if value_b == value_a => {}
                Some(value_b) => findings.push(Finding::PositionalMismatch {
                    index,
                    key: key.clone(),
                    field: field.clone(),
                    value_a: value_a.clone(),
                    value_b: Some(value_b.to_string()),
                }),
                None if mode == CompareMode::Exact => {
                    findings.push(Finding::PositionalMismatch {
                        index,
                        key: key.clone(),
                        field: field.clone(),
                        value_a: value_a.clone(),
                        value_b: None,
                    })
                }
                None => {}
            }
        }
    }

    findings
}

/// Keyed comparison: rows matched by key-column value, no reliance on row
/// order. When b holds duplicate key values the first occurrence in b's
/// original row order wins and later duplicates are ignored.
pub fn compare_keyed(
    table_a: &Table,
    table_b: &Table,
    a_key: usize,
    b_key: usize,
) -> Vec<Finding> {
    // First occurrence per key value, in b's original order.
    let mut b_by_key: FxHashMap<&str, &Row> = FxHashMap::default();
    for row in &table_b.rows {
        b_by_key.entry(&row.cells[b_key]).or_insert(row);
    }

    let mut findings = Vec::new();
    for row_a in &table_a.rows {
        let key = &row_a.cells[a_key];
        let Some(row_b) = b_by_key.get(key.as_str()) else {
            findings.push(Finding::KeyNotInB { key: key.clone() });
            continue;
        };

        for (field_index, field) in table_a.fields.iter().enumerate() {
            let value_a = &row_a.cells[field_index];
            // Fields absent from b's header are silently skipped.
            if let Some(value_b) = table_b.value(row_b, field) {
                if value_b != value_a {
                    findings.push(Finding::KeyedMismatch {
                        key: key.clone(),
                        field: field.clone(),
                        value_a: value_a.clone(),
                        value_b: value_b.to_string(),
                    });
                }
            }
        }
    }

    findings
}
