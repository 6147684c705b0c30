//! Coverage of a box by a set of other boxes.
//!
//! Two engines share the [`CoverageStrategy`] contract:
//!
//! - [`ExactCoverage`] rasterizes overlaps to integer pixels, so it can see
//!   (and optionally penalize) pixels claimed by more than one box.
//! - [`FastCoverage`] sums continuous intersection areas. It is much cheaper
//!   but counts overlapping other boxes twice.
//!
//! The two engines intentionally disagree on fractional coordinates because
//! of the pixel discretization.

use crate::metrics::iou::{intersection_area, intersection_pixels, PixelSet};
use crate::types::BoundingBox;

/// Measures how much of a target box is covered by other boxes.
pub trait CoverageStrategy: Send + Sync {
    /// Fraction of `target`'s area covered by `others`, in `[0.0, 1.0]`.
    ///
    /// A zero-area target has a coverage of 0.0.
    fn coverage(&self, target: &BoundingBox, others: &[BoundingBox]) -> f64;
}

/// Pixel-exact coverage with an optional double-coverage penalty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactCoverage {
    pub penalize_double: bool,
}

impl ExactCoverage {
    pub fn new(penalize_double: bool) -> Self {
        Self { penalize_double }
    }
}

impl CoverageStrategy for ExactCoverage {
    fn coverage(&self, target: &BoundingBox, others: &[BoundingBox]) -> f64 {
        calculate_coverage(target, others, self.penalize_double)
    }
}

/// Approximate coverage from summed intersection areas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FastCoverage;

impl CoverageStrategy for FastCoverage {
    fn coverage(&self, target: &BoundingBox, others: &[BoundingBox]) -> f64 {
        calculate_coverage_fast(target, others)
    }
}

/// Coverage engine selected from the double-coverage flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageMethod {
    Exact(ExactCoverage),
    Fast(FastCoverage),
}

impl CoverageMethod {
    /// Penalizing double coverage needs the exact engine; otherwise the fast
    /// engine is used.
    pub fn for_penalty(penalize_double: bool) -> Self {
        if penalize_double {
            CoverageMethod::Exact(ExactCoverage::new(true))
        } else {
            CoverageMethod::Fast(FastCoverage)
        }
    }
}

impl CoverageStrategy for CoverageMethod {
    fn coverage(&self, target: &BoundingBox, others: &[BoundingBox]) -> f64 {
        match self {
            CoverageMethod::Exact(exact) => exact.coverage(target, others),
            CoverageMethod::Fast(fast) => fast.coverage(target, others),
        }
    }
}

/// Calculate pixel-exact coverage of `target` by `others`.
///
/// Other boxes are visited in order while the covered pixels accumulate. A box
/// whose pixels hit the already-covered set counts once toward the
/// double-coverage penalty, however many pixels it shares. With
/// `penalize_double`, the penalty is subtracted from the covered pixel count
/// (never going below zero).
///
/// # Example
///
/// ```
/// use ocr_eval::coverage::calculate_coverage;
/// use ocr_eval::types::BoundingBox;
///
/// let target = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
/// let others = vec![BoundingBox::new(0.0, 0.0, 5.0, 10.0)];
/// assert_eq!(calculate_coverage(&target, &others, true), 0.5);
/// ```
pub fn calculate_coverage(target: &BoundingBox, others: &[BoundingBox], penalize_double: bool) -> f64 {
    let target_area = target.area();
    if target_area == 0.0 {
        return 0.0;
    }

    let mut covered = PixelSet::new();
    let mut double_coverage_penalty = 0usize;
    for other in others {
        let pixels = intersection_pixels(target, other);
        if !pixels.is_disjoint(&covered) {
            double_coverage_penalty += 1;
        }
        covered.extend(pixels);
    }

    if !penalize_double {
        double_coverage_penalty = 0;
    }

    let covered_count = covered.len().saturating_sub(double_coverage_penalty);
    (covered_count as f64 / target_area).min(1.0)
}

/// Calculate approximate coverage of `target` by `others`.
///
/// Intersection areas are summed without looking at overlaps between the other
/// boxes, then clamped to 1.0.
pub fn calculate_coverage_fast(target: &BoundingBox, others: &[BoundingBox]) -> f64 {
    let target_area = target.area();
    if target_area == 0.0 {
        return 0.0;
    }

    let total_intersect: f64 = others
        .iter()
        .map(|other| intersection_area(target, other))
        .sum();

    (total_intersect / target_area).min(1.0)
}
