//! Span definitions per operation: assessment, criterion, judge call.

/// Create the span wrapping one full assessment.
#[macro_export]
macro_rules! assessment_span {
    ($slide:expr, $brand_kit:expr) => {
        tracing::info_span!(
            "brandcheck.assessment",
            slide = %$slide,
            brand_kit = %$brand_kit
        )
    };
}

/// Create the span wrapping one criterion evaluation.
#[macro_export]
macro_rules! criterion_span {
    ($criterion:expr) => {
        tracing::info_span!("brandcheck.criterion", criterion = %$criterion)
    };
}

/// Create the span wrapping one model call.
#[macro_export]
macro_rules! judge_span {
    ($model:expr) => {
        tracing::debug_span!("brandcheck.judge", model = %$model)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ASSESSMENT: &str = "brandcheck.assessment";
    pub const CRITERION: &str = "brandcheck.criterion";
    pub const JUDGE: &str = "brandcheck.judge";
}
