//! Per-criterion pass/fail/error/unclear counts and total-score histogram.

use brandcheck_core::constants::MAX_TOTAL_SCORE;
use brandcheck_core::models::{ComplianceReport, Criterion, Verdict};
use serde::{Deserialize, Serialize};

/// How a criterion evaluation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The evaluator returned a verdict.
    Scored(Verdict),
    /// The evaluator returned an error and was scored 0.
    Failed,
    /// The evaluator panicked and was scored 0.
    Panicked,
}

/// Counters for one criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionCounters {
    pub compliant: u64,
    pub non_compliant: u64,
    pub unclear: u64,
    pub failed: u64,
    pub panicked: u64,
}

impl CriterionCounters {
    pub fn total(&self) -> u64 {
        self.compliant + self.non_compliant + self.unclear + self.failed + self.panicked
    }

    /// Share of evaluations that passed. 0.0 before any evaluation.
    pub fn pass_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.compliant as f64 / total as f64
    }
}

/// Tracks outcomes across assessments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssessmentMetrics {
    /// Indexed by `Criterion::index()`.
    pub counters: [CriterionCounters; 4],
    /// `score_histogram[n]` = number of reports with total score `n`.
    pub score_histogram: [u64; MAX_TOTAL_SCORE as usize + 1],
    pub assessments: u64,
}

impl AssessmentMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record how one criterion evaluation ended.
    pub fn record_outcome(&mut self, criterion: Criterion, outcome: Outcome) {
        let c = &mut self.counters[criterion.index()];
        match outcome {
            Outcome::Scored(Verdict::Compliant) => c.compliant += 1,
            Outcome::Scored(Verdict::NonCompliant) => c.non_compliant += 1,
            Outcome::Scored(Verdict::Unclear) => c.unclear += 1,
            Outcome::Failed => c.failed += 1,
            Outcome::Panicked => c.panicked += 1,
        }
    }

    /// Record a finished report.
    pub fn record_report(&mut self, report: &ComplianceReport) {
        self.assessments += 1;
        let bucket = usize::from(report.total_score().min(MAX_TOTAL_SCORE));
        self.score_histogram[bucket] += 1;
    }

    pub fn counters(&self, criterion: Criterion) -> &CriterionCounters {
        &self.counters[criterion.index()]
    }

    /// Mean total score over all recorded reports. 0.0 before any report.
    pub fn average_score(&self) -> f64 {
        if self.assessments == 0 {
            return 0.0;
        }
        let sum: u64 = self
            .score_histogram
            .iter()
            .enumerate()
            .map(|(score, count)| score as u64 * count)
            .sum();
        sum as f64 / self.assessments as f64
    }
}
