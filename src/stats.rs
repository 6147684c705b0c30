//! Statistics tracking for benchmark runs
//!
//! This module provides counters describing what an evaluation actually saw:
//! how many samples and boxes were scored, and how many samples fell into the
//! degenerate branches of the metrics.

use serde::{Deserialize, Serialize};

/// Statistics collected while evaluating a benchmark
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkStats {
    /// Total number of samples evaluated
    pub total_samples: usize,

    /// Total number of predicted boxes across all samples
    pub total_predictions: usize,

    /// Total number of reference boxes across all samples
    pub total_references: usize,

    /// Samples without reference boxes (precision/recall short-circuit to 1.0)
    pub empty_reference_samples: usize,

    /// Samples with references but no predictions (precision/recall are 0.0)
    pub empty_prediction_samples: usize,

    /// Samples where the penalized IoU could not be computed
    pub skipped_iou_samples: usize,

    /// Samples that contributed a rank accuracy
    pub ranked_samples: usize,
}

impl BenchmarkStats {
    /// Create a new `BenchmarkStats` with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sample and its box counts
    pub fn add_sample(&mut self, predictions: usize, references: usize) {
        self.total_samples += 1;
        self.total_predictions += predictions;
        self.total_references += references;

        if references == 0 {
            self.empty_reference_samples += 1;
        } else if predictions == 0 {
            self.empty_prediction_samples += 1;
        }
    }

    /// Record a sample whose penalized IoU was skipped
    pub fn skip_iou(&mut self) {
        self.skipped_iou_samples += 1;
    }

    /// Record a sample that contributed a rank accuracy
    pub fn add_ranked(&mut self) {
        self.ranked_samples += 1;
    }

    /// Number of samples where both box lists were non-empty
    pub fn scored_samples(&self) -> usize {
        self.total_samples
            .saturating_sub(self.empty_reference_samples)
            .saturating_sub(self.empty_prediction_samples)
    }

    /// Log a summary of the statistics at info level
    pub fn log_summary(&self) {
        tracing::info!(
            total_samples = self.total_samples,
            scored_samples = self.scored_samples(),
            total_predictions = self.total_predictions,
            total_references = self.total_references,
            empty_reference_samples = self.empty_reference_samples,
            empty_prediction_samples = self.empty_prediction_samples,
            skipped_iou_samples = self.skipped_iou_samples,
            ranked_samples = self.ranked_samples,
            "benchmark statistics"
        );
    }

    /// Get a formatted string summary of the statistics
    pub fn summary_string(&self) -> String {
        format!(
            "BenchmarkStats {{ samples: {}, scored: {}, predictions: {}, references: {}, ranked: {} }}",
            self.total_samples,
            self.scored_samples(),
            self.total_predictions,
            self.total_references,
            self.ranked_samples
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_are_zero() {
        let stats = BenchmarkStats::new();
        assert_eq!(stats.total_samples, 0);
        assert_eq!(stats.scored_samples(), 0);
        assert_eq!(stats.ranked_samples, 0);
    }

    #[test]
    fn test_add_sample_counters() {
        let mut stats = BenchmarkStats::new();
        stats.add_sample(3, 2);
        stats.add_sample(2, 0);
        stats.add_sample(0, 4);
        stats.add_sample(0, 0);

        assert_eq!(stats.total_samples, 4);
        assert_eq!(stats.total_predictions, 5);
        assert_eq!(stats.total_references, 6);
        assert_eq!(stats.empty_reference_samples, 2);
        assert_eq!(stats.empty_prediction_samples, 1);
        assert_eq!(stats.scored_samples(), 1);
    }

    #[test]
    fn test_summary_string() {
        let mut stats = BenchmarkStats::new();
        stats.add_sample(10, 12);
        stats.add_ranked();

        let summary = stats.summary_string();
        assert!(summary.contains("samples: 1"));
        assert!(summary.contains("predictions: 10"));
        assert!(summary.contains("ranked: 1"));
    }
}
