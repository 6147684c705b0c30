//! Benchmark evaluation over many samples.

use crate::config::EvaluationConfig;
use crate::error::{OcrEvalError, Result};
use crate::metrics::{mean_coverage, penalized_iou_score, precision_recall, rank_accuracy};
use crate::stats::BenchmarkStats;
use crate::types::{BenchmarkReport, BenchmarkSample, SampleMetrics};

/// Evaluate every sample of a benchmark and aggregate the results.
///
/// Precision, recall and coverage are averaged over all samples. Penalized
/// IoU is averaged over samples with at least one box, and rank accuracy over
/// samples carrying both rank lists with at least two predicted ranks.
///
/// # Arguments
///
/// * `samples` - Benchmark samples, usually one per page
/// * `config` - Coverage threshold, worker count and double-coverage policy
///
/// # Returns
///
/// Returns a `BenchmarkReport` with per-sample and aggregated metrics.
///
/// # Errors
///
/// Returns an error if there are no samples, the config is invalid, or the
/// worker pool cannot be started.
pub fn evaluate(samples: &[BenchmarkSample], config: &EvaluationConfig) -> Result<BenchmarkReport> {
    if samples.is_empty() {
        return Err(OcrEvalError::EmptyDataset(
            "No samples to evaluate".to_string(),
        ));
    }
    config.validate()?;

    let mut report = BenchmarkReport::new();
    let mut stats = BenchmarkStats::new();

    for sample in samples {
        stats.add_sample(sample.predictions.len(), sample.references.len());

        let metrics = evaluate_sample(sample, config)?;
        if metrics.penalized_iou.is_none() {
            stats.skip_iou();
        }
        if metrics.rank_accuracy.is_some() {
            stats.add_ranked();
        }

        report.per_sample.push(metrics);
    }

    let per_sample = &report.per_sample;
    report.precision = mean(per_sample.iter().map(|m| m.precision)).unwrap_or(0.0);
    report.recall = mean(per_sample.iter().map(|m| m.recall)).unwrap_or(0.0);
    report.coverage = mean(per_sample.iter().map(|m| m.coverage)).unwrap_or(0.0);
    report.penalized_iou = mean(per_sample.iter().filter_map(|m| m.penalized_iou));
    report.rank_accuracy = mean(per_sample.iter().filter_map(|m| m.rank_accuracy));

    stats.log_summary();
    report.stats = stats;

    Ok(report)
}

/// Compute every metric for a single sample.
pub fn evaluate_sample(sample: &BenchmarkSample, config: &EvaluationConfig) -> Result<SampleMetrics> {
    let pr = precision_recall(&sample.predictions, &sample.references, config)?;
    let coverage = mean_coverage(&sample.predictions, &sample.references).coverage;

    let penalized_iou = if sample.predictions.is_empty() && sample.references.is_empty() {
        None
    } else {
        Some(penalized_iou_score(&sample.predictions, &sample.references)?)
    };

    let rank_accuracy = match (&sample.prediction_ranks, &sample.reference_ranks) {
        (Some(predicted), Some(reference)) if predicted.len() >= 2 => {
            Some(rank_accuracy(predicted, reference)?)
        }
        (Some(_), Some(_)) => {
            tracing::debug!(sample = ?sample.name, "too few ranks, skipping rank accuracy");
            None
        }
        (Some(_), None) | (None, Some(_)) => {
            tracing::warn!(sample = ?sample.name, "only one side has ranks, skipping rank accuracy");
            None
        }
        (None, None) => None,
    };

    Ok(SampleMetrics {
        name: sample.name.clone(),
        precision: pr.precision,
        recall: pr.recall,
        coverage,
        penalized_iou,
        rank_accuracy,
    })
}

/// Arithmetic mean, or `None` for an empty sequence.
fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return None;
    }
    Some(sum / count as f64)
}
