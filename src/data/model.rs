use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

use crate::error::BenchError;

// ---------------------------------------------------------------------------
// Series – a labelled result file
// ---------------------------------------------------------------------------

/// Default label/file pairs, in report order.
const DEFAULT_SERIES: [(&str, &str); 3] = [
    ("array", "array.txt"),
    ("rbtree", "rbtree.txt"),
    ("rbtree v2", "rbtreev2.txt"),
];

/// One input file and the label its mean is reported under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Series {
    pub label: String,
    pub path: PathBuf,
}

impl Series {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }

    /// The three benchmark outputs (array, rbtree, rbtree v2) under `dir`.
    pub fn defaults(dir: &Path) -> Vec<Series> {
        DEFAULT_SERIES
            .iter()
            .map(|(label, file)| Series::new(*label, dir.join(file)))
            .collect()
    }
}

/// Parses `LABEL=PATH`. The first `=` splits; both sides are trimmed.
impl FromStr for Series {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((label, path)) if !label.trim().is_empty() && !path.trim().is_empty() => {
                Ok(Series::new(label.trim(), path.trim()))
            }
            _ => Err(BenchError::InvalidSeries(s.to_string())),
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.path.display())
    }
}

// ---------------------------------------------------------------------------
// Column – values pulled out of one file
// ---------------------------------------------------------------------------

/// The numeric values of one column of one file, in row order.
#[derive(Debug, Clone)]
pub struct Column {
    /// File the values were read from.
    pub source: PathBuf,
    /// Zero-based column index.
    pub index: usize,
    pub values: Vec<f64>,
}

impl Column {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
