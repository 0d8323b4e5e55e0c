//! Mean reporter for benchmark result tables.
//!
//! Reads one column out of each result file (by default the array,
//! red-black tree and red-black tree v2 runs) and prints its mean.

pub mod cli;
pub mod data;
pub mod error;
pub mod format;
pub mod report;

pub use crate::data::model::{Column, Series};
pub use crate::error::{BenchError, Result};
pub use crate::report::Report;
