//! Judge construction from configuration.

use std::sync::Arc;
use std::time::Duration;

use brandcheck_core::config::JudgeConfig;
use brandcheck_core::errors::ComplianceResult;
use brandcheck_core::traits::{ITextJudge, IVisionJudge};
use tracing::info;

use crate::ollama::{OllamaClient, OllamaTextJudge, OllamaVisionJudge};

/// The pair of judges the engine needs.
pub struct Judges {
    pub vision: Arc<dyn IVisionJudge>,
    pub text: Arc<dyn ITextJudge>,
}

/// Create both judges over one shared client.
pub fn create_judges(config: &JudgeConfig) -> ComplianceResult<Judges> {
    let client = OllamaClient::new(&config.base_url, Duration::from_secs(config.timeout_secs))?;
    info!(
        base_url = client.base_url(),
        vision_model = %config.vision_model,
        text_model = %config.text_model,
        "judges configured"
    );
    Ok(Judges {
        vision: Arc::new(OllamaVisionJudge::new(client.clone(), &config.vision_model)),
        text: Arc::new(OllamaTextJudge::new(client, &config.text_model)),
    })
}
