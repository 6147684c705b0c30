//! # ocr-eval
//!
//! A Rust library for benchmarking OCR text detection against ground truth
//! bounding boxes.
//!
//! This library provides implementations of the detection metrics used to
//! compare OCR layouts, including:
//! - **Penalized IoU**: greedy one-to-one box matching that punishes missed
//!   and spurious boxes
//! - **Precision / Recall** from per-box coverage, with an optional penalty
//!   for boxes that cover the same pixels twice
//! - **Mean coverage** between predictions and references
//! - **Rank accuracy** of predicted reading order
//!
//! ## Features
//!
//! - Box area, intersection area and pixel-exact intersection
//! - Two coverage engines (exact pixel sets and fast summed areas) behind one
//!   trait
//! - Coverage batches fanned out over a bounded rayon worker pool
//! - JSON benchmark files evaluated into a serializable report
//!
//! ## Quick Start
//!
//! ```rust
//! use ocr_eval::{precision_recall, penalized_iou_score, BoundingBox, EvaluationConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let references = vec![
//!     BoundingBox::new(10.0, 10.0, 200.0, 30.0),
//!     BoundingBox::new(10.0, 40.0, 180.0, 60.0),
//! ];
//! let predictions = vec![BoundingBox::new(10.0, 10.0, 200.0, 30.0)];
//!
//! let pr = precision_recall(&predictions, &references, &EvaluationConfig::default())?;
//! assert_eq!(pr.precision, 1.0);
//! assert_eq!(pr.recall, 0.5);
//!
//! let iou = penalized_iou_score(&predictions, &references)?;
//! assert_eq!(iou, 0.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Benchmark Format
//!
//! [`loader`] reads benchmark files of the form:
//!
//! ```json
//! {
//!   "samples": [
//!     {
//!       "name": "page-1",
//!       "predictions": [[x1, y1, x2, y2], ...],
//!       "references": [[x1, y1, x2, y2], ...],
//!       "prediction_ranks": [0, 1, 2],  // optional
//!       "reference_ranks": [0, 2, 1]    // optional
//!     }
//!   ]
//! }
//! ```

pub mod config;
pub mod coverage;
pub mod error;
pub mod evaluator;
pub mod loader;
pub mod matching;
pub mod metrics;
pub mod parallel;
pub mod stats;
pub mod types;

// Re-export commonly used types and functions
pub use config::EvaluationConfig;
pub use coverage::{
    calculate_coverage, calculate_coverage_fast, CoverageMethod, CoverageStrategy, ExactCoverage,
    FastCoverage,
};
pub use error::{OcrEvalError, Result};
pub use evaluator::{evaluate, evaluate_sample};
pub use loader::{load_from_file, load_from_string};
pub use matching::match_boxes;
pub use metrics::{
    intersection_area, intersection_pixels, mean_coverage, penalized_iou_score, precision_recall,
    rank_accuracy,
};
pub use stats::BenchmarkStats;
pub use types::{
    BenchmarkDataset, BenchmarkReport, BenchmarkSample, BoundingBox, Match, MeanCoverage,
    PrecisionRecall, SampleMetrics,
};
