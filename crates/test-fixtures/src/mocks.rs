//! Deterministic collaborator mocks.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use brandcheck_core::errors::{ComplianceError, ComplianceResult};
use brandcheck_core::models::{FontSet, RgbRaster};
use brandcheck_core::traits::{
    IDocumentRasterizer, IDocumentTextExtractor, IFontNameExtractor, IImageDecoder,
    ITextJudge, ITextRecognizer, IVisionJudge,
};

// ─── Documents ───────────────────────────────────────────────────────────────

/// Fixed page text, or an unreadable document.
pub struct StaticDocument {
    pages: Option<Vec<String>>,
}

impl StaticDocument {
    pub fn new<S: Into<String>>(pages: impl IntoIterator<Item = S>) -> Self {
        Self {
            pages: Some(pages.into_iter().map(Into::into).collect()),
        }
    }

    pub fn unreadable() -> Self {
        Self { pages: None }
    }
}

impl IDocumentTextExtractor for StaticDocument {
    fn extract_pages(&self, pdf_path: &Path) -> ComplianceResult<Vec<String>> {
        self.pages.clone().ok_or_else(|| {
            ComplianceError::document_unreadable(pdf_path.display().to_string(), "corrupt PDF")
        })
    }
}

/// Fixed rendered pages, or an unreadable document.
pub struct StaticRasterizer {
    pages: Option<Vec<RgbRaster>>,
}

impl StaticRasterizer {
    pub fn new(pages: Vec<RgbRaster>) -> Self {
        Self { pages: Some(pages) }
    }

    pub fn unreadable() -> Self {
        Self { pages: None }
    }

    fn pages(&self, pdf_path: &Path) -> ComplianceResult<&[RgbRaster]> {
        self.pages.as_deref().ok_or_else(|| {
            ComplianceError::document_unreadable(pdf_path.display().to_string(), "cannot render")
        })
    }
}

impl IDocumentRasterizer for StaticRasterizer {
    fn page_count(&self, pdf_path: &Path) -> ComplianceResult<usize> {
        Ok(self.pages(pdf_path)?.len())
    }

    fn render_page(&self, pdf_path: &Path, page_index: usize) -> ComplianceResult<RgbRaster> {
        self.pages(pdf_path)?.get(page_index).cloned().ok_or_else(|| {
            ComplianceError::document_unreadable(
                pdf_path.display().to_string(),
                format!("no page {page_index}"),
            )
        })
    }
}

/// Fixed slide raster, or an undecodable image.
pub struct StaticDecoder {
    raster: Option<RgbRaster>,
}

impl StaticDecoder {
    pub fn new(raster: RgbRaster) -> Self {
        Self {
            raster: Some(raster),
        }
    }

    pub fn unreadable() -> Self {
        Self { raster: None }
    }
}

impl IImageDecoder for StaticDecoder {
    fn decode(&self, image_path: &Path) -> ComplianceResult<RgbRaster> {
        self.raster.clone().ok_or_else(|| {
            ComplianceError::image_unreadable(image_path.display().to_string(), "not an image")
        })
    }
}

// ─── Fonts ───────────────────────────────────────────────────────────────────

/// Fonts keyed by raster equality. Unknown rasters have no fonts.
#[derive(Default)]
pub struct StaticFonts {
    entries: Vec<(RgbRaster, FontSet)>,
}

impl StaticFonts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<S: Into<String>>(
        mut self,
        raster: RgbRaster,
        fonts: impl IntoIterator<Item = S>,
    ) -> Self {
        self.entries.push((raster, fonts.into_iter().collect()));
        self
    }
}

impl IFontNameExtractor for StaticFonts {
    fn detect_fonts(&self, raster: &RgbRaster) -> FontSet {
        self.entries
            .iter()
            .find(|(r, _)| r == raster)
            .map(|(_, fonts)| fonts.clone())
            .unwrap_or_default()
    }
}

/// Fixed OCR lines, or a failing recognizer.
pub struct StaticRecognizer {
    lines: Option<Vec<String>>,
}

impl StaticRecognizer {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: Some(lines.into_iter().map(Into::into).collect()),
        }
    }

    pub fn failing() -> Self {
        Self { lines: None }
    }
}

impl ITextRecognizer for StaticRecognizer {
    fn recognize(&self, _raster: &RgbRaster) -> ComplianceResult<Vec<String>> {
        self.lines
            .clone()
            .ok_or_else(|| ComplianceError::model_unavailable("ocr", "recognizer offline"))
    }
}

// ─── Judges ──────────────────────────────────────────────────────────────────

/// Vision judge answering by prompt content: the first rule whose needle
/// occurs in the prompt wins, then the fallback, then `ModelUnavailable`.
#[derive(Default)]
pub struct ScriptedVisionJudge {
    rules: Vec<(String, String)>,
    fallback: Option<String>,
    calls: AtomicUsize,
}

impl ScriptedVisionJudge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn when(mut self, needle: impl Into<String>, answer: impl Into<String>) -> Self {
        self.rules.push((needle.into(), answer.into()));
        self
    }

    pub fn otherwise(mut self, answer: impl Into<String>) -> Self {
        self.fallback = Some(answer.into());
        self
    }

    /// Answers the logo position prompt and the logo color question.
    pub fn logo(position: impl Into<String>, colors: impl Into<String>) -> Self {
        Self::new()
            .when("positioned correctly", position)
            .when("colors are used", colors)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IVisionJudge for ScriptedVisionJudge {
    fn ask(&self, _image_path: &Path, prompt: &str) -> ComplianceResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.rules
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, answer)| answer.clone())
            .or_else(|| self.fallback.clone())
            .ok_or_else(|| ComplianceError::model_unavailable("scripted-vision", "no scripted answer"))
    }

    fn name(&self) -> &str {
        "scripted-vision"
    }
}

/// Text judge with one fixed answer. Records every prompt it receives.
pub struct ScriptedTextJudge {
    answer: String,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedTextJudge {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or(0)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().ok().and_then(|p| p.last().cloned())
    }
}

impl ITextJudge for ScriptedTextJudge {
    fn ask(&self, prompt: &str) -> ComplianceResult<String> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        Ok(self.answer.clone())
    }

    fn name(&self) -> &str {
        "scripted-text"
    }
}

/// A judge whose model is always unreachable.
pub struct FailingJudge {
    model: String,
}

impl FailingJudge {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }

    fn fail(&self) -> ComplianceError {
        ComplianceError::model_unavailable(&self.model, "connection refused")
    }
}

impl IVisionJudge for FailingJudge {
    fn ask(&self, _image_path: &Path, _prompt: &str) -> ComplianceResult<String> {
        Err(self.fail())
    }

    fn name(&self) -> &str {
        &self.model
    }
}

impl ITextJudge for FailingJudge {
    fn ask(&self, _prompt: &str) -> ComplianceResult<String> {
        Err(self.fail())
    }

    fn name(&self) -> &str {
        &self.model
    }
}
