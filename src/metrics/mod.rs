//! Metrics calculation modules for OCR detection benchmarks.

pub mod iou;
pub mod mean_coverage;
pub mod penalized_iou;
pub mod precision_recall;
pub mod rank;

pub use iou::{calculate_iou, intersection_area, intersection_pixels, IouMode, PixelSet};
pub use mean_coverage::mean_coverage;
pub use penalized_iou::penalized_iou_score;
pub use precision_recall::precision_recall;
pub use rank::rank_accuracy;
