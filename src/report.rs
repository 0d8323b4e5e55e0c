use std::path::PathBuf;

use log::info;
use serde::Serialize;

use crate::data::loader::load_column;
use crate::data::model::Series;
use crate::data::stats::Summary;
use crate::error::Result;
use crate::format::format_float;

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// One output line: a series and the statistics of its column.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub label: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub summary: Summary,
}

/// Results for every requested series, in request order.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Report {
    pub entries: Vec<Entry>,
}

impl Report {
    /// Load each series in turn and compute its statistics.
    ///
    /// Stops at the first failure; a report is either complete or absent.
    pub fn build(series: &[Series], column: usize) -> Result<Self> {
        let mut entries = Vec::with_capacity(series.len());

        for s in series {
            let summary = load_column(&s.path, column)?.summary()?;
            info!("{s}: {} row(s), mean {}", summary.count, summary.mean);
            entries.push(Entry {
                label: s.label.clone(),
                path: s.path.clone(),
                summary,
            });
        }

        Ok(Self { entries })
    }

    /// `"<label> mean: <value>"`, one line per series.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for e in &self.entries {
            out.push_str(&format!("{} mean: {}\n", e.label, format_float(e.summary.mean)));
        }
        out
    }

    /// Mean plus count, extremes and sample standard deviation.
    pub fn render_summary(&self) -> String {
        let mut out = String::new();
        for e in &self.entries {
            let s = &e.summary;
            out.push_str(&format!(
                "{} mean: {} (n={}, min={}, max={}, std={})\n",
                e.label,
                format_float(s.mean),
                s.count,
                format_float(s.min),
                format_float(s.max),
                format_float(s.std_dev),
            ));
        }
        out
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
