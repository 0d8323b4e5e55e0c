use std::path::Path;

use log::{debug, warn};
use serde_json::Value as JsonValue;

use super::model::Column;
use crate::error::{BenchError, Result};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load one column of a result file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – comma separated rows, no header
/// * `.json` – `[[run, value, ...], ...]`
/// * anything else – whitespace separated text table, `#` comments
pub fn load_column(path: &Path, column: usize) -> Result<Column> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let values = match ext.as_str() {
        "csv" => load_csv(path, column)?,
        "json" => load_json(path, column)?,
        _ => load_text(path, column)?,
    };

    let col = Column {
        source: path.to_path_buf(),
        index: column,
        values,
    };

    debug!(
        "{}: {} value(s) from column {column}",
        path.display(),
        col.len()
    );
    if col.is_empty() {
        warn!("{}: no data rows", path.display());
    }

    Ok(col)
}

// ---------------------------------------------------------------------------
// Whitespace text loader
// ---------------------------------------------------------------------------

fn load_text(path: &Path, column: usize) -> Result<Vec<f64>> {
    let text = std::fs::read_to_string(path).map_err(|source| BenchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_table(&text, column, path)
}

/// Pull `column` out of a whitespace separated table.
///
/// Text after `#` is ignored and lines left blank are skipped. Line numbers
/// in errors are 1-based and count every physical line.
pub fn parse_table(text: &str, column: usize, path: &Path) -> Result<Vec<f64>> {
    let mut values = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("");
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        values.push(parse_field(&fields, column, path, i + 1)?);
    }

    Ok(values)
}

fn parse_field(fields: &[&str], column: usize, path: &Path, line: usize) -> Result<f64> {
    let token = fields.get(column).ok_or_else(|| BenchError::MissingColumn {
        path: path.to_path_buf(),
        line,
        column,
        found: fields.len(),
    })?;

    token.trim().parse::<f64>().map_err(|_| BenchError::Parse {
        path: path.to_path_buf(),
        line,
        token: token.to_string(),
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: no header row, `#` comment lines allowed, rows may differ in
/// length as long as each one reaches `column`.
fn load_csv(path: &Path, column: usize) -> Result<Vec<f64>> {
    let csv_err = |source| BenchError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_err)?;

    let mut values = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(csv_err)?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(row_no + 1);

        let fields: Vec<&str> = record.iter().collect();
        values.push(parse_field(&fields, column, path, line)?);
    }

    Ok(values)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema, one inner array per row:
///
/// ```json
/// [
///   [0, 1523.0],
///   [1, 1498.5],
///   ...
/// ]
/// ```
///
/// Row numbers in errors are 1-based positions in the outer array.
fn load_json(path: &Path, column: usize) -> Result<Vec<f64>> {
    let text = std::fs::read_to_string(path).map_err(|source| BenchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let layout_err = |reason: String| BenchError::JsonLayout {
        path: path.to_path_buf(),
        reason,
    };

    let root: JsonValue = serde_json::from_str(&text).map_err(|source| BenchError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = root
        .as_array()
        .ok_or_else(|| layout_err("expected top-level array".to_string()))?;

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let fields = row
                .as_array()
                .ok_or_else(|| layout_err(format!("row {} is not an array", i + 1)))?;
            let cell = fields.get(column).ok_or_else(|| BenchError::MissingColumn {
                path: path.to_path_buf(),
                line: i + 1,
                column,
                found: fields.len(),
            })?;
            cell.as_f64().ok_or_else(|| BenchError::Parse {
                path: path.to_path_buf(),
                line: i + 1,
                token: cell.to_string(),
            })
        })
        .collect()
}
