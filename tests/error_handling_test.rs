//! Error handling and validation tests.

use ocr_eval::config::EvaluationConfig;
use ocr_eval::error::OcrEvalError;
use ocr_eval::evaluator::evaluate;
use ocr_eval::loader::{load_from_file, load_from_string};
use ocr_eval::metrics::{penalized_iou_score, precision_recall, rank_accuracy};
use ocr_eval::types::{BenchmarkSample, BoundingBox};

// ============================================================================
// INSUFFICIENT DATA
// ============================================================================

#[test]
fn test_penalized_iou_without_boxes() {
    let result = penalized_iou_score(&[], &[]);
    assert!(result.is_err(), "Should fail with no boxes at all");

    if let Err(OcrEvalError::InsufficientData(msg)) = result {
        assert!(msg.contains("at least one"));
    } else {
        panic!("Expected InsufficientData error");
    }
}

#[test]
fn test_rank_accuracy_single_item() {
    let result = rank_accuracy(&[0.5], &[0.5]);
    assert!(matches!(result, Err(OcrEvalError::InsufficientData(_))));
}

#[test]
fn test_rank_accuracy_empty() {
    let result = rank_accuracy(&[], &[1.0, 2.0]);
    assert!(matches!(result, Err(OcrEvalError::InsufficientData(_))));
}

// ============================================================================
// CONFIG ERRORS
// ============================================================================

#[test]
fn test_zero_workers() {
    let boxes = vec![BoundingBox::new(0.0, 0.0, 10.0, 10.0)];
    let config = EvaluationConfig::default().with_workers(0);

    let result = precision_recall(&boxes, &boxes, &config);
    assert!(matches!(result, Err(OcrEvalError::InvalidWorkerCount(0))));
}

#[test]
fn test_threshold_out_of_range() {
    let boxes = vec![BoundingBox::new(0.0, 0.0, 10.0, 10.0)];

    for threshold in [-0.01, 1.01, f64::INFINITY] {
        let config = EvaluationConfig::default().with_threshold(threshold);
        let result = precision_recall(&boxes, &boxes, &config);
        assert!(
            matches!(result, Err(OcrEvalError::InvalidThreshold(_))),
            "threshold {} should be rejected",
            threshold
        );
    }
}

#[test]
fn test_invalid_config_is_reported_even_for_empty_input() {
    let config = EvaluationConfig::default().with_workers(0);
    assert!(precision_recall(&[], &[], &config).is_err());
}

#[test]
fn test_config_json_errors() {
    assert!(matches!(
        EvaluationConfig::from_json_str(r#"{ "workers": 0 }"#),
        Err(OcrEvalError::InvalidWorkerCount(0))
    ));
    assert!(matches!(
        EvaluationConfig::from_json_str(r#"{ "workers": "many" }"#),
        Err(OcrEvalError::JsonError(_))
    ));
}

// ============================================================================
// LOADER ERROR TESTS
// ============================================================================

#[test]
fn test_invalid_json() {
    let result = load_from_string("{ invalid json");
    assert!(result.is_err(), "Should fail on invalid JSON");
}

#[test]
fn test_missing_samples_field() {
    let result = load_from_string(r#"{ "pages": [] }"#);
    assert!(matches!(result, Err(OcrEvalError::JsonError(_))));
}

#[test]
fn test_empty_samples_error() {
    let result = load_from_string(r#"{ "samples": [] }"#);

    if let Err(OcrEvalError::EmptyDataset(msg)) = result {
        assert!(msg.contains("at least one sample"));
    } else {
        panic!("Expected EmptyDataset error");
    }
}

#[test]
fn test_box_with_five_values() {
    let json = r#"{
        "samples": [
            { "predictions": [[0, 0, 10, 10, 1]], "references": [] }
        ]
    }"#;
    assert!(load_from_string(json).is_err());
}

#[test]
fn test_inverted_prediction_box() {
    let json = r#"{
        "samples": [
            { "predictions": [[0, 0, 10, 10], [0, 20, 10, 15]], "references": [] }
        ]
    }"#;

    match load_from_string(json) {
        Err(OcrEvalError::InvalidBoundingBox(msg)) => {
            assert!(msg.contains("#0"));
            assert!(msg.contains("prediction"));
            assert!(msg.contains("index 1"));
        }
        other => panic!("Expected InvalidBoundingBox, got {:?}", other),
    }
}

#[test]
fn test_nonexistent_file() {
    let result = load_from_file("/nonexistent/path/to/benchmark.json");
    assert!(matches!(result, Err(OcrEvalError::IoError(_))));
}

// ============================================================================
// EVALUATOR ERRORS
// ============================================================================

#[test]
fn test_evaluate_without_samples() {
    let result = evaluate(&[], &EvaluationConfig::default());
    assert!(matches!(result, Err(OcrEvalError::EmptyDataset(_))));
}

#[test]
fn test_evaluate_skips_single_rank() {
    // A single prediction rank is skipped rather than failing the run.
    let mut sample = BenchmarkSample::new(Vec::new(), Vec::new());
    sample.prediction_ranks = Some(vec![1.0]);
    sample.reference_ranks = Some(vec![1.0, 2.0]);

    let report = evaluate(&[sample], &EvaluationConfig::default()).unwrap();
    assert_eq!(report.rank_accuracy, None);
    assert_eq!(report.stats.ranked_samples, 0);
}

#[test]
fn test_error_display() {
    let err = OcrEvalError::InsufficientData("need two items".to_string());
    assert_eq!(err.to_string(), "Insufficient data: need two items");

    let err = OcrEvalError::InvalidWorkerCount(0);
    assert_eq!(err.to_string(), "Invalid worker count: 0");
}
