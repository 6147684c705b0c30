//! Coverage-based precision and recall.

use crate::config::EvaluationConfig;
use crate::coverage::{CoverageMethod, ExactCoverage, FastCoverage};
use crate::error::Result;
use crate::parallel::{run_coverage_batches, CoverageBatch};
use crate::types::{BoundingBox, PrecisionRecall};

/// Calculate precision and recall of predicted boxes from their coverage.
///
/// A prediction is correct when the references cover more than
/// `config.coverage_threshold` of it; a reference is found when the
/// predictions cover more than the threshold of it. Both coverage batches run
/// on a pool of `config.workers` threads.
///
/// With `config.penalize_double` the exact engine is used and only the
/// prediction side pays the double-coverage penalty. Otherwise both sides use
/// the fast engine.
///
/// Empty inputs short-circuit: no references gives 1.0/1.0 (checked first),
/// no predictions gives 0.0/0.0.
///
/// # Errors
///
/// Returns an error if the config is invalid or the worker pool cannot start.
///
/// # Example
///
/// ```
/// use ocr_eval::config::EvaluationConfig;
/// use ocr_eval::metrics::precision_recall::precision_recall;
/// use ocr_eval::types::BoundingBox;
///
/// let references = vec![
///     BoundingBox::new(0.0, 0.0, 10.0, 10.0),
///     BoundingBox::new(20.0, 0.0, 30.0, 10.0),
/// ];
/// let predictions = vec![BoundingBox::new(0.0, 0.0, 10.0, 10.0)];
///
/// let pr = precision_recall(&predictions, &references, &EvaluationConfig::default()).unwrap();
/// assert_eq!(pr.precision, 1.0);
/// assert_eq!(pr.recall, 0.5);
/// ```
pub fn precision_recall(
    predictions: &[BoundingBox],
    references: &[BoundingBox],
    config: &EvaluationConfig,
) -> Result<PrecisionRecall> {
    config.validate()?;

    if references.is_empty() {
        return Ok(PrecisionRecall {
            precision: 1.0,
            recall: 1.0,
        });
    }

    if predictions.is_empty() {
        return Ok(PrecisionRecall {
            precision: 0.0,
            recall: 0.0,
        });
    }

    let prediction_strategy = CoverageMethod::for_penalty(config.penalize_double);
    let reference_strategy = if config.penalize_double {
        CoverageMethod::Exact(ExactCoverage::new(false))
    } else {
        CoverageMethod::Fast(FastCoverage)
    };

    let (prediction_coverage, reference_coverage) = run_coverage_batches(
        &CoverageBatch {
            targets: predictions,
            others: references,
            strategy: &prediction_strategy,
        },
        &CoverageBatch {
            targets: references,
            others: predictions,
            strategy: &reference_strategy,
        },
        config.workers,
    )?;

    let precision = fraction_above(&prediction_coverage, config.coverage_threshold);
    let recall = fraction_above(&reference_coverage, config.coverage_threshold);

    tracing::debug!(
        predictions = predictions.len(),
        references = references.len(),
        precision,
        recall,
        "computed coverage precision/recall"
    );

    Ok(PrecisionRecall { precision, recall })
}

/// Fraction of coverages strictly greater than `threshold`.
fn fraction_above(coverages: &[f64], threshold: f64) -> f64 {
    let correct = coverages.iter().filter(|&&c| c > threshold).count();
    correct as f64 / coverages.len() as f64
}
