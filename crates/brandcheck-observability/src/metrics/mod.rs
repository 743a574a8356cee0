//! Outcome counters for assessments.

mod assessment_metrics;

pub use assessment_metrics::{AssessmentMetrics, CriterionCounters, Outcome};
