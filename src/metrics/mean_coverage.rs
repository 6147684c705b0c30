//! Mean coverage between predictions and references.

use crate::coverage::calculate_coverage;
use crate::types::{BoundingBox, MeanCoverage};

/// Average the exact coverage of every box by the opposite set.
///
/// Each reference is measured against all predictions and each prediction
/// against all references, without the double-coverage penalty. The result is
/// a single mean over both lists, or 0.0 when both are empty.
///
/// # Example
///
/// ```
/// use ocr_eval::metrics::mean_coverage::mean_coverage;
/// use ocr_eval::types::BoundingBox;
///
/// let boxes = vec![BoundingBox::new(0.0, 0.0, 10.0, 10.0)];
/// assert_eq!(mean_coverage(&boxes, &boxes).coverage, 1.0);
/// ```
pub fn mean_coverage(predictions: &[BoundingBox], references: &[BoundingBox]) -> MeanCoverage {
    let coverages: Vec<f64> = references
        .iter()
        .map(|reference| calculate_coverage(reference, predictions, false))
        .chain(
            predictions
                .iter()
                .map(|prediction| calculate_coverage(prediction, references, false)),
        )
        .collect();

    if coverages.is_empty() {
        return MeanCoverage { coverage: 0.0 };
    }

    MeanCoverage {
        coverage: coverages.iter().sum::<f64>() / coverages.len() as f64,
    }
}
