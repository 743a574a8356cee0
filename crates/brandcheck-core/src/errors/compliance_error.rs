/// Failure raised while evaluating a single compliance criterion.
///
/// None of these escape the orchestrator: each is converted into a
/// zero-scoring (or, for `AmbiguousJudgment`, unclear) criterion result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComplianceError {
    #[error("input file not found: {path}")]
    InputMissing { path: String },

    #[error("document unreadable: {path}: {reason}")]
    DocumentUnreadable { path: String, reason: String },

    #[error("image unreadable: {path}: {reason}")]
    ImageUnreadable { path: String, reason: String },

    #[error("model unavailable: {model}: {reason}")]
    ModelUnavailable { model: String, reason: String },

    #[error("unclear model output: {output}")]
    AmbiguousJudgment { output: String },
}

impl ComplianceError {
    pub fn input_missing(path: impl Into<String>) -> Self {
        Self::InputMissing { path: path.into() }
    }

    pub fn document_unreadable(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DocumentUnreadable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn image_unreadable(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ImageUnreadable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn model_unavailable(model: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ModelUnavailable {
            model: model.into(),
            reason: reason.into(),
        }
    }

    /// Short machine-friendly tag, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InputMissing { .. } => "input_missing",
            Self::DocumentUnreadable { .. } => "document_unreadable",
            Self::ImageUnreadable { .. } => "image_unreadable",
            Self::ModelUnavailable { .. } => "model_unavailable",
            Self::AmbiguousJudgment { .. } => "ambiguous_judgment",
        }
    }
}

/// Convenience type alias.
pub type ComplianceResult<T> = Result<T, ComplianceError>;
