//! Evaluation settings.

use serde::{Deserialize, Serialize};

use crate::error::{OcrEvalError, Result};
use crate::parallel::DEFAULT_WORKERS;

/// Default coverage a box needs (strictly exceeded) to count as correct.
pub const DEFAULT_COVERAGE_THRESHOLD: f64 = 0.5;

/// Settings for coverage-based precision/recall and benchmark runs.
///
/// Missing fields fall back to their defaults when deserialized.
///
/// # Example
///
/// ```
/// use ocr_eval::config::EvaluationConfig;
///
/// let config = EvaluationConfig::from_json_str(r#"{ "workers": 2 }"#).unwrap();
/// assert_eq!(config.workers, 2);
/// assert_eq!(config.coverage_threshold, 0.5);
/// assert!(config.penalize_double);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Coverage must be strictly greater than this to count as correct
    pub coverage_threshold: f64,
    /// Number of threads in the coverage worker pool
    pub workers: usize,
    /// Use exact pixel coverage and penalize boxes that cover the same pixels
    pub penalize_double: bool,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            coverage_threshold: DEFAULT_COVERAGE_THRESHOLD,
            workers: DEFAULT_WORKERS,
            penalize_double: true,
        }
    }
}

impl EvaluationConfig {
    /// Parse and validate a config from JSON.
    pub fn from_json_str(json_str: &str) -> Result<Self> {
        let config: EvaluationConfig = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_threshold(mut self, coverage_threshold: f64) -> Self {
        self.coverage_threshold = coverage_threshold;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_penalize_double(mut self, penalize_double: bool) -> Self {
        self.penalize_double = penalize_double;
        self
    }

    /// Check the threshold range and worker count.
    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.coverage_threshold)?;
        if self.workers == 0 {
            return Err(OcrEvalError::InvalidWorkerCount(self.workers));
        }
        Ok(())
    }
}

/// Validate that a threshold is in the valid range [0.0, 1.0].
fn validate_threshold(threshold: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(OcrEvalError::InvalidThreshold(format!(
            "Threshold must be between 0.0 and 1.0, got {}",
            threshold
        )));
    }
    Ok(())
}
