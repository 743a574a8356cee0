//! Collaborator seams. Models and document libraries sit behind these traits
//! and are injected into the engine at construction time.

mod document;
mod evaluator;
mod fonts;
mod image;
mod judge;
mod recognizer;

pub use document::{IDocumentRasterizer, IDocumentTextExtractor};
pub use evaluator::ICriterionEvaluator;
pub use fonts::IFontNameExtractor;
pub use image::IImageDecoder;
pub use judge::{ITextJudge, IVisionJudge};
pub use recognizer::ITextRecognizer;
