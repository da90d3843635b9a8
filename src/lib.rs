//! tsvtools - Operational TSV utilities for genomics pipeline runs
//!
//! Three small tools sharing one library: a keyed TSV comparator
//! (`comparetsv`), a pipeline trace timeline summarizer (`parsetrace`),
//! and a TSV-to-Excel converter (`tsvtoexcel`).

pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod parser;
pub mod trace;
pub mod xlsx;

pub use config::{CompareConfig, CompareMode};
pub use diff::DiffReport;
pub use error::Error;
pub use model::Table;
