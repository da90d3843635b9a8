//! Data model for parsed TSV files

mod table;

pub use table::{Row, Table};
