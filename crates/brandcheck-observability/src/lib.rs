//! # brandcheck-observability
//!
//! Structured tracing with span definitions and event helpers, plus
//! per-criterion outcome metrics for assessments.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{AssessmentMetrics, CriterionCounters, Outcome};
pub use tracing_setup::{init_tracing, init_tracing_with_filter};
