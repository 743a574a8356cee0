use crate::errors::ComplianceResult;
use crate::models::{AssessmentRequest, Criterion, CriterionResult};

/// One compliance criterion: turns a request into a verdict.
pub trait ICriterionEvaluator: Send + Sync {
    /// The criterion this evaluator scores.
    fn criterion(&self) -> Criterion;

    /// Evaluate the request. Errors are converted into results by the engine.
    fn evaluate(&self, request: &AssessmentRequest) -> ComplianceResult<CriterionResult>;
}
