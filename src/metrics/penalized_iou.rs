//! Penalized IoU score over matched boxes.

use crate::error::{OcrEvalError, Result};
use crate::matching::match_boxes;
use crate::types::BoundingBox;

/// Calculate the mean matched IoU, penalizing missed and spurious boxes.
///
/// Every match from [`match_boxes`] contributes to the mean, including the
/// `-1.0` of each missed reference and the `0.0` of each unmatched prediction.
///
/// # Errors
///
/// Returns [`OcrEvalError::InsufficientData`] when both box lists are empty.
///
/// # Example
///
/// ```
/// use ocr_eval::metrics::penalized_iou::penalized_iou_score;
/// use ocr_eval::types::BoundingBox;
///
/// let references = vec![
///     BoundingBox::new(0.0, 0.0, 10.0, 10.0),
///     BoundingBox::new(20.0, 0.0, 30.0, 10.0),
/// ];
/// let predictions = vec![BoundingBox::new(0.0, 0.0, 10.0, 10.0)];
///
/// // One perfect match (1.0) and one missed reference (-1.0)
/// let score = penalized_iou_score(&predictions, &references).unwrap();
/// assert_eq!(score, 0.0);
/// ```
pub fn penalized_iou_score(predictions: &[BoundingBox], references: &[BoundingBox]) -> Result<f64> {
    let matches = match_boxes(predictions, references);
    if matches.is_empty() {
        return Err(OcrEvalError::InsufficientData(
            "Penalized IoU needs at least one prediction or reference box".to_string(),
        ));
    }

    let total: f64 = matches.iter().map(|m| m.iou).sum();
    Ok(total / matches.len() as f64)
}
