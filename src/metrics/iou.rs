//! Intersection and Intersection over Union (IoU) calculation.

use std::collections::HashSet;

use crate::types::BoundingBox;

/// Integer pixel coordinates `(x, y)` covered by a region.
pub type PixelSet = HashSet<(i64, i64)>;

/// How the IoU denominator is formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IouMode {
    /// Standard IoU: intersection over the union of both boxes.
    #[default]
    Union,
    /// Intersection over the area of the first box only.
    ///
    /// Used when matching, where the first box is the reference.
    Box1Only,
}

/// Overlap rectangle `(left, top, right, bottom)`, or `None` when the boxes
/// do not overlap.
fn overlap_bounds(box1: &BoundingBox, box2: &BoundingBox) -> Option<(f64, f64, f64, f64)> {
    let x_left = box1.x1.max(box2.x1);
    let y_top = box1.y1.max(box2.y1);
    let x_right = box1.x2.min(box2.x2);
    let y_bottom = box1.y2.min(box2.y2);

    if x_right < x_left || y_bottom < y_top {
        return None;
    }

    Some((x_left, y_top, x_right, y_bottom))
}

/// Calculate the area of the overlap between two boxes.
///
/// Touching boxes produce a zero-width overlap and therefore zero area.
///
/// # Example
///
/// ```
/// use ocr_eval::metrics::iou::intersection_area;
/// use ocr_eval::types::BoundingBox;
///
/// let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
/// let b = BoundingBox::new(5.0, 5.0, 15.0, 15.0);
/// assert_eq!(intersection_area(&a, &b), 25.0);
/// ```
pub fn intersection_area(box1: &BoundingBox, box2: &BoundingBox) -> f64 {
    match overlap_bounds(box1, box2) {
        Some((x_left, y_top, x_right, y_bottom)) => (x_right - x_left) * (y_bottom - y_top),
        None => 0.0,
    }
}

/// Collect the unit pixels inside the overlap of two boxes.
///
/// Overlap bounds are truncated to integers and every grid point in
/// `[left, right) x [top, bottom)` is returned. Cost is proportional to the
/// overlap area, so this should only be used with image-sized boxes.
pub fn intersection_pixels(box1: &BoundingBox, box2: &BoundingBox) -> PixelSet {
    let Some((x_left, y_top, x_right, y_bottom)) = overlap_bounds(box1, box2) else {
        return PixelSet::new();
    };

    let (x_left, x_right) = (x_left as i64, x_right as i64);
    let (y_top, y_bottom) = (y_top as i64, y_bottom as i64);

    (y_top..y_bottom)
        .flat_map(|y| (x_left..x_right).map(move |x| (x, y)))
        .collect()
}

/// Calculate the Intersection over Union (IoU) between two bounding boxes.
///
/// # Arguments
///
/// * `box1` - First bounding box
/// * `box2` - Second bounding box
/// * `mode` - Whether to divide by the union or by `box1`'s area only
///
/// # Returns
///
/// Returns a value between 0.0 (no overlap) and 1.0 (perfect overlap). A zero
/// denominator yields 0.0.
///
/// # Example
///
/// ```
/// use ocr_eval::metrics::iou::{calculate_iou, IouMode};
/// use ocr_eval::types::BoundingBox;
///
/// let reference = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
/// let prediction = BoundingBox::new(0.0, 0.0, 20.0, 10.0);
/// assert_eq!(calculate_iou(&reference, &prediction, IouMode::Union), 0.5);
/// assert_eq!(calculate_iou(&reference, &prediction, IouMode::Box1Only), 1.0);
/// ```
pub fn calculate_iou(box1: &BoundingBox, box2: &BoundingBox, mode: IouMode) -> f64 {
    let intersection = intersection_area(box1, box2);

    let mut union = box1.area();
    if mode == IouMode::Union {
        union += box2.area() - intersection;
    }

    if union == 0.0 {
        return 0.0;
    }

    intersection / union
}

/// Calculate the IoU matrix between two sets of bounding boxes.
///
/// `result[i][j]` is the IoU between `boxes1[i]` and `boxes2[j]`.
pub fn calculate_iou_matrix(
    boxes1: &[BoundingBox],
    boxes2: &[BoundingBox],
    mode: IouMode,
) -> Vec<Vec<f64>> {
    boxes1
        .iter()
        .map(|box1| {
            boxes2
                .iter()
                .map(|box2| calculate_iou(box1, box2, mode))
                .collect()
        })
        .collect()
}
