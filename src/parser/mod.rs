//! TSV reader

mod tsv;

pub use tsv::parse;
