use serde::Serialize;

use super::model::Column;
use crate::error::{BenchError, Result};

/// Longest slice summed with the 8-way unrolled loop; longer slices are
/// split in two, cut at a multiple of 8.
const PAIRWISE_BLOCK: usize = 128;

/// Pairwise summation in the order numpy's `add.reduce` uses for a
/// contiguous float64 array, so means agree with it to the last digit.
///
/// Under 8 values: plain running sum from `0.0`. Up to [`PAIRWISE_BLOCK`]:
/// eight interleaved running sums combined as a balanced tree, then the
/// tail added one by one. Beyond that: recurse on both halves.
pub fn pairwise_sum(values: &[f64]) -> f64 {
    let n = values.len();

    if n < 8 {
        return values.iter().fold(0.0, |acc, v| acc + v);
    }

    if n <= PAIRWISE_BLOCK {
        let whole = n - n % 8;
        let mut r = [0.0f64; 8];
        r.copy_from_slice(&values[..8]);
        for chunk in values[8..whole].chunks_exact(8) {
            for (acc, v) in r.iter_mut().zip(chunk) {
                *acc += v;
            }
        }
        let mut res = ((r[0] + r[1]) + (r[2] + r[3])) + ((r[4] + r[5]) + (r[6] + r[7]));
        for v in &values[whole..] {
            res += v;
        }
        return res;
    }

    let mut half = n / 2;
    half -= half % 8;
    pairwise_sum(&values[..half]) + pairwise_sum(&values[half..])
}

/// Arithmetic mean: [`pairwise_sum`] divided by the count.
/// `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(pairwise_sum(values) / values.len() as f64)
}

/// Descriptive statistics for one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Sample standard deviation (n - 1); zero for a single value.
    pub std_dev: f64,
}

pub fn summarize(values: &[f64]) -> Option<Summary> {
    let mean = mean(values)?;
    let n = values.len();

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let std_dev = if n < 2 {
        0.0
    } else {
        let squares: Vec<f64> = values.iter().map(|x| (x - mean).powi(2)).collect();
        (pairwise_sum(&squares) / (n - 1) as f64).sqrt()
    };

    Some(Summary {
        count: n,
        mean,
        min,
        max,
        std_dev,
    })
}

impl Column {
    /// Summary of the column, or [`BenchError::EmptyColumn`] when it holds
    /// no rows.
    pub fn summary(&self) -> Result<Summary> {
        summarize(&self.values).ok_or_else(|| BenchError::EmptyColumn {
            path: self.source.clone(),
            column: self.index,
        })
    }
}
