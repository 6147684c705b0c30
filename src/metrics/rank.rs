//! Pairwise rank (reading order) accuracy.

use std::collections::HashSet;

use crate::error::{OcrEvalError, Result};

/// Fraction of ordered pairs whose relative order agrees with the reference.
///
/// `predictions` and `references` are scores aligned by position: index `i`
/// in both lists refers to the same item. For every ordered pair `(i, j)` with
/// `i != j`, the relation `score[i] > score[j]` is compared between the two
/// lists. The denominator is the number of prediction pairs, `n * (n - 1)`.
///
/// Lists of different lengths are tolerated: reference positions without a
/// prediction never agree.
///
/// # Errors
///
/// Returns [`OcrEvalError::InsufficientData`] when there are fewer than two
/// predictions.
///
/// # Example
///
/// ```
/// use ocr_eval::metrics::rank::rank_accuracy;
///
/// assert_eq!(rank_accuracy(&[3.0, 1.0, 2.0], &[3.0, 1.0, 2.0]).unwrap(), 1.0);
/// ```
pub fn rank_accuracy(predictions: &[f64], references: &[f64]) -> Result<f64> {
    if predictions.len() < 2 {
        return Err(OcrEvalError::InsufficientData(format!(
            "Rank accuracy needs at least 2 ranked items, got {}",
            predictions.len()
        )));
    }

    if predictions.len() != references.len() {
        tracing::warn!(
            predictions = predictions.len(),
            references = references.len(),
            "rank lists differ in length"
        );
    }

    let pairs: HashSet<(usize, usize, bool)> = ordered_pairs(predictions).collect();
    let correct = ordered_pairs(references)
        .filter(|pair| pairs.contains(pair))
        .count();

    Ok(correct as f64 / pairs.len() as f64)
}

/// Every `(i, j, scores[i] > scores[j])` with `i != j`.
fn ordered_pairs(scores: &[f64]) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
    scores.iter().enumerate().flat_map(move |(i, &a)| {
        scores
            .iter()
            .enumerate()
            .filter(move |&(j, _)| i != j)
            .map(move |(j, &b)| (i, j, a > b))
    })
}
