//! Worker-pool fan-out for per-box coverage computation.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::coverage::CoverageStrategy;
use crate::error::{OcrEvalError, Result};
use crate::types::BoundingBox;

/// Default number of worker threads used for coverage batches.
pub const DEFAULT_WORKERS: usize = 8;

/// A batch of coverage jobs: every target box measured against `others`.
pub struct CoverageBatch<'a> {
    pub targets: &'a [BoundingBox],
    pub others: &'a [BoundingBox],
    pub strategy: &'a dyn CoverageStrategy,
}

impl CoverageBatch<'_> {
    /// Compute coverages on the current rayon pool, in `targets` order.
    fn run(&self) -> Vec<f64> {
        self.targets
            .par_iter()
            .map(|target| self.strategy.coverage(target, self.others))
            .collect()
    }
}

/// Build a worker pool with exactly `workers` threads.
pub fn build_pool(workers: usize) -> Result<ThreadPool> {
    if workers == 0 {
        return Err(OcrEvalError::InvalidWorkerCount(workers));
    }

    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|idx| format!("ocr-eval-coverage-{idx}"))
        .build()?;
    Ok(pool)
}

/// Run two independent coverage batches on a bounded pool and wait for both.
///
/// Results come back in input order, so the output does not depend on the
/// number of workers.
pub fn run_coverage_batches(
    first: &CoverageBatch<'_>,
    second: &CoverageBatch<'_>,
    workers: usize,
) -> Result<(Vec<f64>, Vec<f64>)> {
    let pool = build_pool(workers)?;

    tracing::debug!(
        workers,
        first_batch = first.targets.len(),
        second_batch = second.targets.len(),
        "dispatching coverage batches"
    );

    Ok(pool.install(|| rayon::join(|| first.run(), || second.run())))
}
