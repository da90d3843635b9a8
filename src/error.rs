//! Error taxonomy shared by the three tools

use std::path::PathBuf;

use thiserror::Error;

/// Fatal error conditions. Value discrepancies and "ID not in b" are
/// normal comparator output, not errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Input path missing or unreadable.
    #[error("cannot read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data line whose token count does not match the header.
    #[error("{}:{line}: malformed row: header has {expected} fields, row has {found}", path.display())]
    MalformedRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// The requested key column is absent from a file's header.
    #[error("key column '{column}' not found in header of {}", path.display())]
    KeyColumnNotFound { column: String, path: PathBuf },

    /// A required trace column is absent from the trace header.
    #[error("column '{column}' not found in trace header of {}", path.display())]
    ColumnMissing { column: String, path: PathBuf },

    /// A `realtime` value that is not a `Nh Nm Ns` style duration.
    #[error("invalid duration '{value}'")]
    InvalidDuration { value: String },

    /// Underlying reader fault.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Workbook construction or save failure.
    #[error(transparent)]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
