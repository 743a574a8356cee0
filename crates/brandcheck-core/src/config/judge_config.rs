use serde::{Deserialize, Serialize};

use super::defaults;

/// Model endpoint settings for the vision and text judges.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JudgeConfig {
    /// Base URL of the Ollama-compatible server.
    pub base_url: String,
    /// Vision-language model used for logo position and logo colors.
    pub vision_model: String,
    /// Text-generation model used for the palette judgment.
    pub text_model: String,
    /// HTTP request timeout (seconds). One attempt per call, no retries.
    pub timeout_secs: u64,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_JUDGE_BASE_URL.to_string(),
            vision_model: defaults::DEFAULT_VISION_MODEL.to_string(),
            text_model: defaults::DEFAULT_TEXT_MODEL.to_string(),
            timeout_secs: defaults::DEFAULT_JUDGE_TIMEOUT_SECS,
        }
    }
}
