use std::path::Path;

use crate::errors::ComplianceResult;

/// Vision-language model answering a free-text question about an image.
pub trait IVisionJudge: Send + Sync {
    /// Fails with `ModelUnavailable` if the model cannot be reached or errors.
    fn ask(&self, image_path: &Path, prompt: &str) -> ComplianceResult<String>;

    /// Model identifier, for logs and error messages.
    fn name(&self) -> &str;
}

/// Text-generation model answering a free-text prompt.
pub trait ITextJudge: Send + Sync {
    /// Fails with `ModelUnavailable` if the model cannot be reached or errors.
    fn ask(&self, prompt: &str) -> ComplianceResult<String>;

    /// Model identifier, for logs and error messages.
    fn name(&self) -> &str;
}
