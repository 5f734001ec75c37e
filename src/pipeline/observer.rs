//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! artifacts in tests, and emitting structured telemetry.

use std::time::{Duration, Instant};

use crate::types::{Classification, Token};

pub const STAGE_TOKENIZE: &str = "tokenize";
pub const STAGE_NORMALIZE: &str = "normalize";
pub const STAGE_DEDUPE: &str = "dedupe";
pub const STAGE_CLASSIFY: &str = "classify";

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

/// Metrics captured at the end of one stage.
#[derive(Debug, Clone)]
pub struct StageReport {
    elapsed: Duration,
    items: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            items: None,
        }
    }

    /// Report with a count of artifacts the stage produced.
    pub fn with_items(elapsed: Duration, items: usize) -> Self {
        Self {
            elapsed,
            items: Some(items),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of artifacts the stage produced, when the stage reports one.
    pub fn items(&self) -> Option<usize> {
        self.items
    }
}

/// Callbacks fired at stage boundaries.
///
/// All methods default to no-ops, so implementors override only what they
/// need.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Raw tokens, before normalization.
    fn on_tokens(&mut self, _tokens: &[Token<'_>]) {}

    /// Unique `(lemma, phrase)` pairs after deduplication, in output order.
    fn on_unique_lemmas(&mut self, _lemmas: &[(String, Option<String>)]) {}

    /// The final three-bucket partition.
    fn on_result(&mut self, _result: &Classification) {}
}

/// Observer that ignores every callback; zero overhead.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Records every stage report, for profiling and tests.
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
    fn test_stage_report_items() {
        let report = StageReport::new(Duration::from_micros(5));
        assert!(report.items().is_none());

        let report = StageReport::with_items(Duration::from_micros(5), 12);
        assert_eq!(report.items(), Some(12));
    }

    #[test]
    fn test_timing_observer_collects_reports() {
        let mut obs = StageTimingObserver::new();
        obs.on_stage_end(STAGE_TOKENIZE, &StageReport::new(Duration::ZERO));
        obs.on_stage_end(STAGE_CLASSIFY, &StageReport::new(Duration::ZERO));

        let names: Vec<&str> = obs.reports().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec![STAGE_TOKENIZE, STAGE_CLASSIFY]);
    }
}
