//! Error types for the ocr-eval library.

use thiserror::Error;

/// Result type for ocr-eval operations.
pub type Result<T> = std::result::Result<T, OcrEvalError>;

/// Error types that can occur while scoring OCR detections.
#[derive(Error, Debug)]
pub enum OcrEvalError {
    /// Error during JSON parsing or serialization.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error during I/O operations.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Too few items to compute a metric (e.g. an empty match list).
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Invalid bounding box coordinates.
    #[error("Invalid bounding box: {0}")]
    InvalidBoundingBox(String),

    /// Coverage threshold outside of [0.0, 1.0].
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),

    /// Worker pool must have at least one thread.
    #[error("Invalid worker count: {0}")]
    InvalidWorkerCount(usize),

    /// The worker pool could not be started.
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Empty benchmark provided.
    #[error("Empty dataset: {0}")]
    EmptyDataset(String),
}
