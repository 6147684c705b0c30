//! Integration tests for the complete benchmark pipeline.

use ocr_eval::config::EvaluationConfig;
use ocr_eval::evaluator::evaluate;
use ocr_eval::loader::{load_from_file, load_from_string};
use ocr_eval::metrics::{mean_coverage, penalized_iou_score, precision_recall, rank_accuracy};
use ocr_eval::types::BoundingBox;

/// Text lines laid out like a simple single-column page.
fn page_lines(count: usize) -> Vec<BoundingBox> {
    (0..count)
        .map(|i| {
            let y = 20.0 + i as f64 * 30.0;
            BoundingBox::new(40.0, y, 560.0, y + 20.0)
        })
        .collect()
}

#[test]
fn test_perfect_predictions() {
    let references = page_lines(5);
    let predictions = references.clone();

    let pr = precision_recall(&predictions, &references, &EvaluationConfig::default()).unwrap();
    assert_eq!(pr.precision, 1.0);
    assert_eq!(pr.recall, 1.0);
    assert_eq!(penalized_iou_score(&predictions, &references).unwrap(), 1.0);
    assert_eq!(mean_coverage(&predictions, &references).coverage, 1.0);
}

#[test]
fn test_split_lines_are_double_covered() {
    // Each reference line is detected as two overlapping halves.
    let references = page_lines(2);
    let predictions: Vec<BoundingBox> = references
        .iter()
        .flat_map(|line| {
            [
                BoundingBox::new(line.x1, line.y1, 310.0, line.y2),
                BoundingBox::new(290.0, line.y1, line.x2, line.y2),
            ]
        })
        .collect();

    let pr = precision_recall(&predictions, &references, &EvaluationConfig::default()).unwrap();
    // Every half is covered by its line, every line by its halves.
    assert_eq!(pr.precision, 1.0);
    assert_eq!(pr.recall, 1.0);

    // Matching pairs each line with one half and leaves the others unmatched
    let iou = penalized_iou_score(&predictions, &references).unwrap();
    assert!(iou > 0.0 && iou < 0.5, "unexpected penalized IoU {}", iou);
}

#[test]
fn test_merged_prediction() {
    // A single prediction swallowing two reference lines.
    let references = page_lines(2);
    let predictions = vec![BoundingBox::new(40.0, 20.0, 560.0, 70.0)];

    let pr = precision_recall(&predictions, &references, &EvaluationConfig::default()).unwrap();
    // The merged box is 40/50 covered, both references fully covered
    assert_eq!(pr.precision, 1.0);
    assert_eq!(pr.recall, 1.0);

    // But only one reference can be matched
    let iou = penalized_iou_score(&predictions, &references).unwrap();
    assert_eq!(iou, 0.0);
}

#[test]
fn test_missing_lines_reduce_recall() {
    let references = page_lines(4);
    let predictions = references[..3].to_vec();

    let pr = precision_recall(&predictions, &references, &EvaluationConfig::default()).unwrap();
    assert_eq!(pr.precision, 1.0);
    assert_eq!(pr.recall, 0.75);

    let iou = penalized_iou_score(&predictions, &references).unwrap();
    assert!((iou - 0.5).abs() < 1e-10);
}

#[test]
fn test_fast_and_exact_agree_without_overlaps() {
    let references = page_lines(6);
    let predictions: Vec<BoundingBox> = references
        .iter()
        .map(|b| BoundingBox::new(b.x1 + 10.0, b.y1, b.x2 - 10.0, b.y2 + 4.0))
        .collect();

    let exact = precision_recall(&predictions, &references, &EvaluationConfig::default()).unwrap();
    let fast = precision_recall(
        &predictions,
        &references,
        &EvaluationConfig::default().with_penalize_double(false),
    )
    .unwrap();
    assert_eq!(exact, fast);
}

#[test]
fn test_reading_order() {
    let reference_order = [0.0, 1.0, 2.0, 3.0];
    let predicted_order = [0.0, 2.0, 1.0, 3.0];

    // Only the (1, 2) and (2, 1) pairs disagree
    let accuracy = rank_accuracy(&predicted_order, &reference_order).unwrap();
    assert!((accuracy - 10.0 / 12.0).abs() < 1e-10);
}

#[test]
fn test_full_benchmark_from_json() {
    let json = r#"{
        "samples": [
            {
                "name": "perfect",
                "predictions": [[0, 0, 100, 20], [0, 30, 100, 50]],
                "references": [[0, 0, 100, 20], [0, 30, 100, 50]],
                "prediction_ranks": [0, 1],
                "reference_ranks": [0, 1]
            },
            {
                "name": "missed-line",
                "predictions": [[0, 0, 100, 20]],
                "references": [[0, 0, 100, 20], [0, 30, 100, 50]]
            },
            {
                "name": "blank-page",
                "predictions": [],
                "references": []
            }
        ]
    }"#;

    let dataset = load_from_string(json).unwrap();
    let config = EvaluationConfig::from_json_str(r#"{ "workers": 2 }"#).unwrap();
    let report = evaluate(&dataset.samples, &config).unwrap();

    assert_eq!(report.per_sample.len(), 3);
    assert_eq!(report.per_sample[1].name.as_deref(), Some("missed-line"));
    assert_eq!(report.per_sample[1].recall, 0.5);
    assert_eq!(report.per_sample[2].penalized_iou, None);

    assert_eq!(report.precision, 1.0);
    assert!((report.recall - 2.5 / 3.0).abs() < 1e-10);
    // (1.0 + 0.0) / 2
    assert_eq!(report.penalized_iou, Some(0.5));
    assert_eq!(report.rank_accuracy, Some(1.0));
    assert_eq!(report.stats.total_references, 4);

    let serialized = serde_json::to_value(&report).unwrap();
    assert_eq!(serialized["precision"], 1.0);
    assert_eq!(serialized["stats"]["total_samples"], 3);
    assert_eq!(serialized["per_sample"][0]["name"], "perfect");
}

#[test]
fn test_load_from_file_roundtrip() {
    let path = std::env::temp_dir().join(format!("ocr-eval-benchmark-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{ "samples": [ { "predictions": [[1, 1, 5, 5]], "references": [[1, 1, 5, 5]] } ] }"#,
    )
    .unwrap();

    let dataset = load_from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(dataset.samples.len(), 1);
    assert_eq!(dataset.samples[0].predictions[0], BoundingBox::new(1.0, 1.0, 5.0, 5.0));
}
