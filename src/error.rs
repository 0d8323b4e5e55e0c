use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between opening a result file and
/// producing its mean.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("reading {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: row has {found} field(s), column {column} requested")]
    MissingColumn {
        path: PathBuf,
        line: usize,
        column: usize,
        found: usize,
    },

    #[error("{path}:{line}: '{token}' is not a number")]
    Parse {
        path: PathBuf,
        line: usize,
        token: String,
    },

    #[error("parsing CSV {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("parsing JSON {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path}: {reason}")]
    JsonLayout { path: PathBuf, reason: String },

    /// Mean of zero values is undefined.
    #[error("{path}: column {column} has no values")]
    EmptyColumn { path: PathBuf, column: usize },

    #[error("invalid series '{0}', expected LABEL=PATH")]
    InvalidSeries(String),
}

pub type Result<T> = std::result::Result<T, BenchError>;
