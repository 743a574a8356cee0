//! Ollama-compatible `/api/generate` judges.
//!
//! One blocking HTTP client is shared by the vision and text judges. Each
//! call is a single attempt: any transport, status, or decoding failure is
//! reported as `ModelUnavailable` and the engine scores the criterion 0.

mod client;
mod text;
mod vision;

pub use client::{GenerateRequest, GenerateResponse, OllamaClient};
pub use text::OllamaTextJudge;
pub use vision::OllamaVisionJudge;
