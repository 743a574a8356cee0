//! Structured log events for assessment operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a criterion that produced a verdict.
pub fn criterion_scored(criterion: &str, verdict: i8) {
    tracing::info!(
        event = "criterion_scored",
        criterion = %criterion,
        verdict = verdict,
        "criterion scored"
    );
}

/// Log a criterion whose evaluator returned an error.
pub fn criterion_failed(criterion: &str, kind: &str, reason: &str) {
    tracing::warn!(
        event = "criterion_failed",
        criterion = %criterion,
        kind = %kind,
        reason = %reason,
        "criterion failed, scored 0"
    );
}

/// Log a criterion whose evaluator panicked.
pub fn criterion_panicked(criterion: &str, message: &str) {
    tracing::error!(
        event = "criterion_panicked",
        criterion = %criterion,
        message = %message,
        "criterion evaluator panicked, scored 0"
    );
}

/// Log a finished assessment.
pub fn assessment_completed(total_score: u8, max_score: u8) {
    tracing::info!(
        event = "assessment_completed",
        total_score = total_score,
        max_score = max_score,
        "assessment completed"
    );
}
