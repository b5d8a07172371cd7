//! Pipeline observer — hooks for timing, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic: a timing report when a stage ends, plus snapshots of the
//! artifacts (parsed matrix, rank result) as they are produced. The crate
//! never logs on its own; hosts that want telemetry implement
//! [`PipelineObserver`] and route reports wherever they like.

use std::time::{Duration, Instant};

use crate::matrix::dense::DenseMatrix;
use crate::pagerank::RankResult;

/// Stage names, in execution order.
pub const STAGE_LOAD: &str = "load";
pub const STAGE_TRANSITION: &str = "transition";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_FORMAT: &str = "format";

/// Wall-clock timer for one stage.
#[derive(Debug)]
pub struct StageClock(Instant);

impl StageClock {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// Timing and metrics for one completed stage.
#[derive(Debug, Clone)]
pub struct StageReport {
    elapsed: Duration,
    dimension: Option<usize>,
    iterations: Option<usize>,
    residual: Option<f64>,
}

impl StageReport {
    /// A report carrying only elapsed time.
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            dimension: None,
            iterations: None,
            residual: None,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Matrix dimension, for stages that produce or consume a matrix.
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    /// Iterations performed, for the rank stage.
    pub fn iterations(&self) -> Option<usize> {
        self.iterations
    }

    /// Final L1 change between iterates, for the rank stage.
    pub fn residual(&self) -> Option<f64> {
        self.residual
    }
}

/// Builder for [`StageReport`]s with optional metrics.
#[derive(Debug)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn dimension(mut self, dimension: usize) -> Self {
        self.report.dimension = Some(dimension);
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.report.iterations = Some(iterations);
        self
    }

    pub fn residual(mut self, residual: f64) -> Self {
        self.report.residual = Some(residual);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Callbacks fired at stage boundaries.
///
/// All methods default to no-ops, so implementations override only what
/// they need.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}
    fn on_matrix(&mut self, _matrix: &DenseMatrix) {}
    fn on_rank(&mut self, _rank: &RankResult) {}
}

/// Observer that does nothing, for zero-overhead execution.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records every stage report in order.
#[derive(Debug, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage reports in execution order.
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_builder_metrics() {
        let report = StageReportBuilder::new(Duration::from_millis(5))
            .dimension(4)
            .iterations(100)
            .residual(1e-8)
            .build();

        assert_eq!(report.dimension(), Some(4));
        assert_eq!(report.iterations(), Some(100));
        assert_eq!(report.residual(), Some(1e-8));
        assert_eq!(report.elapsed(), Duration::from_millis(5));
    }

    #[test]
    fn test_plain_report_has_no_metrics() {
        let report = StageReport::new(Duration::ZERO);
        assert!(report.dimension().is_none());
        assert!(report.iterations().is_none());
        assert!(report.residual().is_none());
    }

    #[test]
    fn test_timing_observer_records_in_order() {
        let mut observer = StageTimingObserver::new();
        observer.on_stage_end(STAGE_LOAD, &StageReport::new(Duration::ZERO));
        observer.on_stage_end(STAGE_RANK, &StageReport::new(Duration::ZERO));

        let names: Vec<_> = observer.reports().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec![STAGE_LOAD, STAGE_RANK]);
    }

    #[test]
    fn test_noop_observer_accepts_all_callbacks() {
        let mut observer = NoopObserver;
        observer.on_stage_start(STAGE_LOAD);
        observer.on_matrix(&DenseMatrix::zeros(1));
        observer.on_rank(&RankResult::new(vec![1.0], 100, 0.0));
    }
}
