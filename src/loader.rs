//! JSON loading utilities for benchmark files.

use crate::error::{OcrEvalError, Result};
use crate::types::{BenchmarkDataset, BoundingBox};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a benchmark from a JSON file.
///
/// # Arguments
///
/// * `path` - Path to the benchmark JSON file
///
/// # Returns
///
/// Returns a `BenchmarkDataset` containing the samples in file order.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or fails validation.
///
/// # Example
///
/// ```no_run
/// use ocr_eval::loader::load_from_file;
///
/// let dataset = load_from_file("benchmark.json").unwrap();
/// println!("Loaded {} samples", dataset.samples.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<BenchmarkDataset> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let dataset: BenchmarkDataset = serde_json::from_reader(reader)?;

    validate_dataset(&dataset)?;

    Ok(dataset)
}

/// Load a benchmark from a JSON string.
///
/// Boxes are `[x1, y1, x2, y2]` arrays; names and rank lists are optional.
///
/// # Example
///
/// ```
/// use ocr_eval::loader::load_from_string;
///
/// let json = r#"{
///     "samples": [
///         {
///             "name": "page-1",
///             "predictions": [[0, 0, 10, 10]],
///             "references": [[0, 0, 10, 12]]
///         }
///     ]
/// }"#;
/// let dataset = load_from_string(json).unwrap();
/// assert_eq!(dataset.samples.len(), 1);
/// ```
pub fn load_from_string(json_str: &str) -> Result<BenchmarkDataset> {
    let dataset: BenchmarkDataset = serde_json::from_str(json_str)?;
    validate_dataset(&dataset)?;
    Ok(dataset)
}

/// Validate that a benchmark has samples and well-formed boxes.
fn validate_dataset(dataset: &BenchmarkDataset) -> Result<()> {
    if dataset.samples.is_empty() {
        return Err(OcrEvalError::EmptyDataset(
            "Benchmark must contain at least one sample".to_string(),
        ));
    }

    for (sample_idx, sample) in dataset.samples.iter().enumerate() {
        let label = sample
            .name
            .clone()
            .unwrap_or_else(|| format!("#{}", sample_idx));
        validate_boxes(&sample.predictions, &label, "prediction")?;
        validate_boxes(&sample.references, &label, "reference")?;
    }

    Ok(())
}

fn validate_boxes(boxes: &[BoundingBox], sample: &str, kind: &str) -> Result<()> {
    match boxes.iter().position(|bbox| !bbox.is_valid()) {
        Some(idx) => Err(OcrEvalError::InvalidBoundingBox(format!(
            "Sample {} has an invalid {} box at index {}: {:?}",
            sample, kind, idx, boxes[idx]
        ))),
        None => Ok(()),
    }
}
