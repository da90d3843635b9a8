//! Configuration for a comparison run

use std::path::PathBuf;

use clap::ValueEnum;

/// Comparison policy. A closed enumeration: unrecognized mode strings are
/// rejected at CLI parse time rather than silently falling back to keyed
/// comparison as the original script did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CompareMode {
    /// Positional comparison; row counts must match.
    #[default]
    Exact,
    /// Positional comparison tolerating fields missing from b.
    Normal,
    /// Rows matched by key-column value instead of position.
    Keyed,
}

impl std::str::FromStr for CompareMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exact" => Ok(CompareMode::Exact),
            "normal" => Ok(CompareMode::Normal),
            "keyed" => Ok(CompareMode::Keyed),
            _ => Err(format!("unknown compare mode: {}", s)),
        }
    }
}

impl std::fmt::Display for CompareMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompareMode::Exact => write!(f, "exact"),
            CompareMode::Normal => write!(f, "normal"),
            CompareMode::Keyed => write!(f, "keyed"),
        }
    }
}

/// Configuration for one comparison run. Built once from CLI arguments and
/// threaded as a value into the comparator; never shared or mutated.
#[derive(Debug, Clone)]
pub struct CompareConfig {
    /// First TSV input.
    pub file_a: PathBuf,
    /// Second TSV input.
    pub file_b: PathBuf,
    /// Header name establishing row identity.
    pub key_column: String,
    /// Comparison policy.
    pub mode: CompareMode,
}

impl CompareConfig {
    pub fn new(file_a: PathBuf, file_b: PathBuf, key_column: impl Into<String>) -> Self {
        Self {
            file_a,
            file_b,
            key_column: key_column.into(),
            mode: CompareMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: CompareMode) -> Self {
        self.mode = mode;
        self
    }
}
