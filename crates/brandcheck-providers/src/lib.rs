//! # brandcheck-providers
//!
//! Concrete collaborators for the compliance engine:
//! - Ollama `/api/generate` backed vision and text judges
//! - Catalog matching font detection over an OCR recognizer

pub mod factory;
pub mod fonts;
pub mod ollama;

pub use factory::{create_judges, Judges};
pub use fonts::CatalogFontExtractor;
pub use ollama::{OllamaClient, OllamaTextJudge, OllamaVisionJudge};
