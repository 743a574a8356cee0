use brandcheck_core::errors::ComplianceResult;
use brandcheck_core::traits::ITextJudge;

use super::OllamaClient;

/// Text-generation judge.
#[derive(Debug, Clone)]
pub struct OllamaTextJudge {
    client: OllamaClient,
    model: String,
}

impl OllamaTextJudge {
    pub fn new(client: OllamaClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

impl ITextJudge for OllamaTextJudge {
    fn ask(&self, prompt: &str) -> ComplianceResult<String> {
        self.client.generate(&self.model, prompt, Vec::new())
    }

    fn name(&self) -> &str {
        &self.model
    }
}
