use serde::{Deserialize, Serialize};

use super::{Criterion, Verdict};
use crate::errors::ComplianceError;

/// Verdict and explanation for one criterion of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionResult {
    pub criterion: Criterion,
    pub verdict: Verdict,
    pub explanation: String,
}

impl CriterionResult {
    pub fn new(criterion: Criterion, verdict: Verdict, explanation: impl Into<String>) -> Self {
        Self {
            criterion,
            verdict,
            explanation: explanation.into(),
        }
    }

    pub fn compliant(criterion: Criterion, explanation: impl Into<String>) -> Self {
        Self::new(criterion, Verdict::Compliant, explanation)
    }

    pub fn non_compliant(criterion: Criterion, explanation: impl Into<String>) -> Self {
        Self::new(criterion, Verdict::NonCompliant, explanation)
    }

    /// Convert an evaluation failure into a result.
    ///
    /// An ambiguous judgment keeps its diagnostic `-1` verdict and the raw
    /// model output; every other failure scores 0 and names the criterion.
    pub fn from_error(criterion: Criterion, error: &ComplianceError) -> Self {
        match error {
            ComplianceError::AmbiguousJudgment { output } => Self::new(
                criterion,
                Verdict::Unclear,
                format!("Unclear model output: {output}"),
            ),
            other => Self::non_compliant(criterion, format!("{criterion} check failed: {other}")),
        }
    }

    /// Result for an evaluator that panicked instead of returning.
    pub fn from_panic(criterion: Criterion, message: &str) -> Self {
        Self::non_compliant(
            criterion,
            format!("{criterion} check failed: evaluator panicked: {message}"),
        )
    }
}
