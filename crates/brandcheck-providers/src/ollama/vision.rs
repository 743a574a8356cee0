use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use brandcheck_core::errors::{ComplianceError, ComplianceResult};
use brandcheck_core::traits::IVisionJudge;

use super::OllamaClient;

/// Vision-language judge. Sends the slide file as a base64 image.
#[derive(Debug, Clone)]
pub struct OllamaVisionJudge {
    client: OllamaClient,
    model: String,
}

impl OllamaVisionJudge {
    pub fn new(client: OllamaClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

/// Read an image file and encode it for the `images` field.
pub(crate) fn encode_image(image_path: &Path) -> ComplianceResult<String> {
    let bytes = std::fs::read(image_path).map_err(|e| {
        ComplianceError::image_unreadable(image_path.display().to_string(), e.to_string())
    })?;
    Ok(STANDARD.encode(bytes))
}

impl IVisionJudge for OllamaVisionJudge {
    fn ask(&self, image_path: &Path, prompt: &str) -> ComplianceResult<String> {
        let image = encode_image(image_path)?;
        self.client.generate(&self.model, prompt, vec![image])
    }

    fn name(&self) -> &str {
        &self.model
    }
}
