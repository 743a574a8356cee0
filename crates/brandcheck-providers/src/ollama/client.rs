use std::sync::Arc;
use std::time::Duration;

use brandcheck_core::errors::{ComplianceError, ComplianceResult};
use brandcheck_observability::judge_span;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Body of a non-streaming `/api/generate` call.
#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    /// Base64-encoded images. Omitted for text-only calls.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    pub stream: bool,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
}

/// Shared blocking client for an Ollama-compatible server.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: String,
    http: Arc<reqwest::blocking::Client>,
}

impl OllamaClient {
    /// Build a client with the given per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ComplianceResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .gzip(true)
            .build()
            .map_err(|e| ComplianceError::model_unavailable(&base_url, e.to_string()))?;
        Ok(Self {
            base_url,
            http: Arc::new(http),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }

    /// Run one generation and return the model's answer text.
    pub fn generate(&self, model: &str, prompt: &str, images: Vec<String>) -> ComplianceResult<String> {
        let span = judge_span!(model);
        let _guard = span.enter();

        let request = GenerateRequest {
            model,
            prompt,
            images,
            stream: false,
        };
        let unavailable = |reason: String| ComplianceError::model_unavailable(model, reason);

        let response = self
            .http
            .post(self.generate_url())
            .json(&request)
            .send()
            .map_err(|e| {
                warn!(model, error = %e, "judge unreachable");
                unavailable(format!("HTTP error: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            warn!(model, status = %status, "judge returned an error status");
            return Err(unavailable(format!("returned {status}: {body}")));
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| unavailable(format!("JSON parse error: {e}")))?;
        debug!(model, chars = parsed.response.len(), "judge answered");
        Ok(parsed.response)
    }
}
