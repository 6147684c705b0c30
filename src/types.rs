//! Core data types for OCR detection benchmarks.

use serde::{Deserialize, Serialize};

use crate::stats::BenchmarkStats;

/// Represents an axis-aligned bounding box in corner format (x1, y1, x2, y2).
///
/// Coordinates are in XYXY (Left-Top-Right-Bottom) format where:
/// - x1: Left coordinate
/// - y1: Top coordinate
/// - x2: Right coordinate
/// - y2: Bottom coordinate
///
/// Boxes serialize as a plain `[x1, y1, x2, y2]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BoundingBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl BoundingBox {
    /// Create a new bounding box from its corners.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create a bounding box from a top-left corner and a size.
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Width of the box (x2 - x1).
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    /// Height of the box (y2 - y1).
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Get the area of the bounding box.
    ///
    /// Degenerate boxes (zero width or height) have an area of zero.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Check that the coordinates are finite and correctly ordered.
    pub fn is_valid(&self) -> bool {
        [self.x1, self.y1, self.x2, self.y2]
            .iter()
            .all(|c| c.is_finite())
            && self.x1 <= self.x2
            && self.y1 <= self.y2
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from(coords: [f64; 4]) -> Self {
        Self::new(coords[0], coords[1], coords[2], coords[3])
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(bbox: BoundingBox) -> Self {
        [bbox.x1, bbox.y1, bbox.x2, bbox.y2]
    }
}

/// One assignment produced by the box matcher.
///
/// Exactly one of the indices is `None` for an unmatched item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Match {
    pub reference_index: Option<usize>,
    pub prediction_index: Option<usize>,
    pub iou: f64,
}

impl Match {
    /// IoU recorded for a reference box that no prediction was assigned to.
    pub const MISSED_REFERENCE_IOU: f64 = -1.0;

    /// IoU recorded for a prediction with no reference box left to claim.
    pub const UNMATCHED_PREDICTION_IOU: f64 = 0.0;

    /// A reference/prediction pair accepted by the matcher.
    pub fn paired(reference_index: usize, prediction_index: usize, iou: f64) -> Self {
        Self {
            reference_index: Some(reference_index),
            prediction_index: Some(prediction_index),
            iou,
        }
    }

    /// A reference box that was not detected.
    pub fn missed_reference(reference_index: usize) -> Self {
        Self {
            reference_index: Some(reference_index),
            prediction_index: None,
            iou: Self::MISSED_REFERENCE_IOU,
        }
    }

    /// A prediction that does not correspond to any reference box.
    pub fn unmatched_prediction(prediction_index: usize) -> Self {
        Self {
            reference_index: None,
            prediction_index: Some(prediction_index),
            iou: Self::UNMATCHED_PREDICTION_IOU,
        }
    }

    /// Whether both a reference and a prediction take part in this match.
    pub fn is_paired(&self) -> bool {
        self.reference_index.is_some() && self.prediction_index.is_some()
    }
}

/// Coverage-based precision and recall for one sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrecisionRecall {
    pub precision: f64,
    pub recall: f64,
}

/// Mean coverage over predictions and references of one sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanCoverage {
    pub coverage: f64,
}

/// A single benchmark sample (typically one page).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSample {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub predictions: Vec<BoundingBox>,
    pub references: Vec<BoundingBox>,
    /// Predicted reading-order scores, aligned with `reference_ranks`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction_ranks: Option<Vec<f64>>,
    /// Reference reading-order scores, aligned with `prediction_ranks`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_ranks: Option<Vec<f64>>,
}

impl BenchmarkSample {
    /// Create an unnamed sample without rank information.
    pub fn new(predictions: Vec<BoundingBox>, references: Vec<BoundingBox>) -> Self {
        Self {
            name: None,
            predictions,
            references,
            prediction_ranks: None,
            reference_ranks: None,
        }
    }
}

/// A benchmark file: an ordered list of samples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkDataset {
    pub samples: Vec<BenchmarkSample>,
}

/// Metrics computed for one sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub precision: f64,
    pub recall: f64,
    pub coverage: f64,
    /// `None` when both box lists were empty.
    pub penalized_iou: Option<f64>,
    /// `None` when the sample carried no usable rank information.
    pub rank_accuracy: Option<f64>,
}

/// Aggregated results over a whole benchmark.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BenchmarkReport {
    /// Mean precision across all samples
    pub precision: f64,
    /// Mean recall across all samples
    pub recall: f64,
    /// Mean coverage across all samples
    pub coverage: f64,
    /// Mean penalized IoU over samples where it could be computed
    pub penalized_iou: Option<f64>,
    /// Mean rank accuracy over samples with rank information
    pub rank_accuracy: Option<f64>,
    /// Per-sample metrics, in input order
    pub per_sample: Vec<SampleMetrics>,
    pub stats: BenchmarkStats,
}

impl BenchmarkReport {
    /// Create a new empty report.
    pub fn new() -> Self {
        Self::default()
    }
}
