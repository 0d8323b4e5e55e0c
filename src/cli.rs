use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;

use crate::data::model::Series;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print the mean of one column of each benchmark result file.
///
/// Without arguments reads array.txt, rbtree.txt and rbtreev2.txt from the
/// current directory and reports column 1 of each.
#[derive(Parser, Debug)]
#[command(name = "bench-mean", version, about)]
pub struct Args {
    /// Directory holding the default result files
    #[arg(short = 'd', long = "dir", default_value = ".")]
    pub dir: PathBuf,

    /// Zero-based column to average
    #[arg(short = 'c', long = "column", default_value_t = 1)]
    pub column: usize,

    /// LABEL=PATH pair to report on; replaces the defaults (repeatable)
    #[arg(short = 's', long = "series", action = ArgAction::Append)]
    pub series: Vec<Series>,

    /// Output format
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also print count, min, max and standard deviation
    #[arg(long = "summary", action = ArgAction::SetTrue)]
    pub summary: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Series to report, in output order.
    pub fn series(&self) -> Vec<Series> {
        if self.series.is_empty() {
            Series::defaults(&self.dir)
        } else {
            self.series.clone()
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}
