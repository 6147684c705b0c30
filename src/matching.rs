//! One-to-one matching of predicted boxes against reference boxes.

use std::cmp::Ordering;

use crate::metrics::iou::{calculate_iou_matrix, IouMode};
use crate::types::{BoundingBox, Match};

/// Matched IoU values above this are reported as a perfect match, absorbing
/// rounding at box edges.
pub const PERFECT_MATCH_IOU: f64 = 0.95;

/// Greedily match predictions to references by descending IoU.
///
/// IoU is measured against the reference box only (intersection divided by
/// the reference area). All reference/prediction pairs are ranked by IoU and
/// walked from best to worst; a pair is accepted when neither side has been
/// assigned yet, so every pair gets matched as long as both sides have boxes
/// left, even at zero IoU.
///
/// # Arguments
///
/// * `predictions` - Predicted boxes
/// * `references` - Ground truth boxes
///
/// # Returns
///
/// Returns every accepted pair in acceptance order, followed by one
/// `iou = -1.0` match per leftover reference and one `iou = 0.0` match per
/// leftover prediction, both in ascending index order.
///
/// # Example
///
/// ```
/// use ocr_eval::matching::match_boxes;
/// use ocr_eval::types::BoundingBox;
///
/// let references = vec![BoundingBox::new(0.0, 0.0, 10.0, 10.0)];
/// let predictions = vec![
///     BoundingBox::new(50.0, 50.0, 60.0, 60.0),
///     BoundingBox::new(0.0, 0.0, 10.0, 10.0),
/// ];
///
/// let matches = match_boxes(&predictions, &references);
/// assert_eq!(matches.len(), 2);
/// assert_eq!(matches[0].prediction_index, Some(1));
/// assert_eq!(matches[0].iou, 1.0);
/// assert_eq!(matches[1].iou, 0.0);
/// ```
pub fn match_boxes(predictions: &[BoundingBox], references: &[BoundingBox]) -> Vec<Match> {
    let iou_matrix = calculate_iou_matrix(references, predictions, IouMode::Box1Only);

    // Flatten in reference-major order; the stable sort keeps that order for ties
    let mut candidates: Vec<(usize, usize, f64)> = iou_matrix
        .iter()
        .enumerate()
        .flat_map(|(ref_idx, row)| {
            row.iter()
                .enumerate()
                .map(move |(pred_idx, &iou)| (ref_idx, pred_idx, iou))
        })
        .collect();

    candidates.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(Ordering::Equal));

    let mut assigned_ref = vec![false; references.len()];
    let mut assigned_pred = vec![false; predictions.len()];
    let mut matches = Vec::with_capacity(references.len().max(predictions.len()));

    for (ref_idx, pred_idx, iou) in candidates {
        if assigned_ref[ref_idx] || assigned_pred[pred_idx] {
            continue;
        }

        let iou = if iou > PERFECT_MATCH_IOU { 1.0 } else { iou };
        matches.push(Match::paired(ref_idx, pred_idx, iou));
        assigned_ref[ref_idx] = true;
        assigned_pred[pred_idx] = true;
    }

    matches.extend(
        assigned_ref
            .iter()
            .enumerate()
            .filter(|(_, &assigned)| !assigned)
            .map(|(idx, _)| Match::missed_reference(idx)),
    );
    matches.extend(
        assigned_pred
            .iter()
            .enumerate()
            .filter(|(_, &assigned)| !assigned)
            .map(|(idx, _)| Match::unmatched_prediction(idx)),
    );

    matches
}
