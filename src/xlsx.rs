//! TSV to Excel conversion

use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::error::Error;
use crate::model::Table;
use crate::parser;

/// Write a parsed table as a single-worksheet workbook: header row first,
/// then one row per record, every cell as text, no index column.
pub fn write_workbook(table: &Table, output: &Path) -> Result<(), Error> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, field) in table.fields.iter().enumerate() {
        worksheet.write_string(0, col as u16, field)?;
    }
    for (row, record) in table.rows.iter().enumerate() {
        for (col, value) in record.cells.iter().enumerate() {
            worksheet.write_string(row as u32 + 1, col as u16, value)?;
        }
    }

    workbook.save(output)?;
    Ok(())
}

/// Parse a TSV file and convert it to an `.xlsx` workbook.
pub fn convert(input: &Path, output: &Path) -> Result<(), Error> {
    let table = parser::parse(input)?;
    write_workbook(&table, output)
}
