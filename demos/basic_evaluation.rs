//! Basic evaluation example demonstrating core functionality.

use ocr_eval::{
    evaluator::evaluate, load_from_string, match_boxes, metrics::iou::calculate_iou,
    metrics::iou::IouMode, precision_recall, BoundingBox, EvaluationConfig,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== OCR Detection Evaluation Example ===\n");

    // Example 1: IoU Calculation
    println!("1. IoU Calculation");
    let reference = BoundingBox::new(10.0, 10.0, 210.0, 30.0);
    let prediction = BoundingBox::new(12.0, 9.0, 190.0, 31.0);
    println!(
        "   Standard IoU: {:.4}",
        calculate_iou(&reference, &prediction, IouMode::Union)
    );
    println!(
        "   Reference-only IoU: {:.4}",
        calculate_iou(&reference, &prediction, IouMode::Box1Only)
    );
    println!();

    // Example 2: Box matching
    println!("2. Matching Predictions to References");
    let references = vec![
        BoundingBox::new(10.0, 10.0, 210.0, 30.0),
        BoundingBox::new(10.0, 40.0, 180.0, 60.0),
        BoundingBox::new(10.0, 70.0, 150.0, 90.0),
    ];
    let predictions = vec![
        BoundingBox::new(12.0, 9.0, 190.0, 31.0),
        BoundingBox::new(10.0, 40.0, 180.0, 60.0),
        BoundingBox::new(300.0, 10.0, 340.0, 30.0),
    ];
    for m in match_boxes(&predictions, &references) {
        println!(
            "   ├─ reference {:?} <-> prediction {:?}: {:.4}",
            m.reference_index, m.prediction_index, m.iou
        );
    }
    println!();

    // Example 3: Coverage-based precision/recall
    println!("3. Precision and Recall from Coverage");
    for penalize_double in [true, false] {
        let config = EvaluationConfig::default().with_penalize_double(penalize_double);
        let pr = precision_recall(&predictions, &references, &config)?;
        println!(
            "   penalize_double={:<5} precision={:.4} recall={:.4}",
            penalize_double, pr.precision, pr.recall
        );
    }
    println!();

    // Example 4: Full benchmark
    println!("4. Running a Benchmark");
    let benchmark_json = r#"{
        "samples": [
            {
                "name": "page-1",
                "predictions": [[10, 10, 210, 30], [10, 40, 180, 60]],
                "references": [[10, 10, 210, 30], [10, 40, 180, 60], [10, 70, 150, 90]],
                "prediction_ranks": [0, 1],
                "reference_ranks": [0, 1]
            },
            {
                "name": "page-2",
                "predictions": [[0, 0, 100, 20], [95, 0, 200, 20]],
                "references": [[0, 0, 200, 20]],
                "prediction_ranks": [1, 0],
                "reference_ranks": [0, 1]
            }
        ]
    }"#;

    let dataset = load_from_string(benchmark_json)?;
    let report = evaluate(&dataset.samples, &EvaluationConfig::default())?;

    println!("   Overall Metrics:");
    println!("   ├─ Precision: {:.4}", report.precision);
    println!("   ├─ Recall: {:.4}", report.recall);
    println!("   ├─ Coverage: {:.4}", report.coverage);
    println!("   ├─ Penalized IoU: {:?}", report.penalized_iou);
    println!("   └─ Rank accuracy: {:?}", report.rank_accuracy);
    println!();
    println!("   {}", report.stats.summary_string());
    println!();
    println!("{}", serde_json::to_string_pretty(&report)?);

    println!("=== Example Complete ===");

    Ok(())
}
