// file: src/analysis/rate.rs
// description: occurrence rates normalized per fixed token window
// reference: per-thousand frequency reporting

use crate::analysis::frequency::DocumentCounts;
use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_RATE_SCALE: f64 = 1000.0;
pub const DEFAULT_RATE_PRECISION: u32 = 2;
pub const MAX_RATE_PRECISION: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateConfig {
    pub scale: f64,
    pub precision: u32,
}

impl RateConfig {
    pub fn new(scale: f64, precision: u32) -> Result<Self> {
        if scale <= 0.0 || !scale.is_finite() {
            return Err(AnalysisError::InvalidInput(format!(
                "rate scale must be a positive number, got {}",
                scale
            )));
        }

        if precision > MAX_RATE_PRECISION {
            return Err(AnalysisError::InvalidInput(format!(
                "rate precision must be at most {}, got {}",
                MAX_RATE_PRECISION, precision
            )));
        }

        Ok(Self { scale, precision })
    }
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_RATE_SCALE,
            precision: DEFAULT_RATE_PRECISION,
        }
    }
}

/// `count / total * scale`, rounded to `precision` decimals.
pub fn rate(count: usize, total: usize, config: &RateConfig) -> Result<f64> {
    let value = raw_rate(count, total, config.scale)?;
    finite(round_to(value, config.precision))
}

pub(crate) fn raw_rate(count: usize, total: usize, scale: f64) -> Result<f64> {
    if total == 0 {
        return Err(AnalysisError::InvalidInput(
            "cannot compute a rate over an empty document".to_string(),
        ));
    }

    finite(count as f64 / total as f64 * scale)
}

fn finite(value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(AnalysisError::InvalidInput(format!(
            "rate is not a finite number ({})",
            value
        )));
    }
    Ok(value)
}

fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// A rate, or an explicit marker where the rate is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RateValue {
    Value(f64),
    Skipped,
}

impl RateValue {
    pub fn from_result(result: Result<f64>) -> Self {
        match result {
            Ok(value) => RateValue::Value(value),
            Err(_) => RateValue::Skipped,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, RateValue::Skipped)
    }

    pub fn display(&self, precision: u32) -> String {
        match self {
            RateValue::Value(v) => format!("{:.*}", precision as usize, v),
            RateValue::Skipped => "n/a".to_string(),
        }
    }
}

impl fmt::Display for RateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateValue::Value(v) => write!(f, "{}", v),
            RateValue::Skipped => write!(f, "n/a"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateEntry {
    pub form: String,
    pub count: usize,
    pub rate: RateValue,
}

/// Per-entry rates for one document. Fails on an empty document.
pub fn rate_table(counts: &DocumentCounts, config: &RateConfig) -> Result<Vec<RateEntry>> {
    counts
        .counts
        .iter()
        .map(|entry| {
            Ok(RateEntry {
                form: entry.form.clone(),
                count: entry.count,
                rate: RateValue::Value(rate(entry.count, counts.total_tokens, config)?),
            })
        })
        .collect()
}
