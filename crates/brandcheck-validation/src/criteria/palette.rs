//! Color palette criterion: a text judge compares the color inventories of
//! the brand kit and the slide.

use std::sync::Arc;

use brandcheck_core::constants::DEFAULT_PALETTE_PREVIEW_LEN;
use brandcheck_core::errors::ComplianceResult;
use brandcheck_core::models::{AssessmentRequest, ColorSet, Criterion, CriterionResult, Verdict};
use brandcheck_core::traits::{ICriterionEvaluator, IDocumentRasterizer, IImageDecoder, ITextJudge};
use tracing::debug;

use super::require_inputs;
use crate::colors::{document_colors, unique_colors};

pub const EMPTY_PALETTE_ANSWER: &str = "The palette judge returned an empty answer.";

/// Compliant iff some whitespace-separated token is exactly `1`.
///
/// Token equality rather than substring search, so "10", "2021" or "1." do not count.
pub fn parse_palette_verdict(output: &str) -> Verdict {
    Verdict::from_bool(output.split_whitespace().any(|token| token == "1"))
}

/// Turn the judge's answer into the criterion result. The answer is the explanation.
pub fn palette_result(output: &str) -> CriterionResult {
    let explanation = match output.trim() {
        "" => EMPTY_PALETTE_ANSWER,
        trimmed => trimmed,
    };
    CriterionResult::new(
        Criterion::ColorPalette,
        parse_palette_verdict(output),
        explanation,
    )
}

/// Prompt listing the first `preview_len` colors of each set and the totals.
pub fn palette_prompt(brand_colors: &ColorSet, slide_colors: &ColorSet, preview_len: usize) -> String {
    format!(
        "Brand colors: {}\nSlide colors: {}\n\n\
         Are the colors in the slide from the brand colors? \
         Provide a 1 if compliant and 0 if not, with an explanation.",
        preview_line(brand_colors, preview_len),
        preview_line(slide_colors, preview_len),
    )
}

fn preview_line(colors: &ColorSet, preview_len: usize) -> String {
    let shown: Vec<&str> = colors
        .preview(preview_len)
        .into_iter()
        .map(|c| c.as_str())
        .collect();
    let ellipsis = if colors.len() > shown.len() { "..." } else { "" };
    format!(
        "[{}]{} (total {} colors)",
        shown.join(", "),
        ellipsis,
        colors.len()
    )
}

/// Scores the overall palette of the slide.
pub struct PaletteEvaluator {
    rasterizer: Arc<dyn IDocumentRasterizer>,
    images: Arc<dyn IImageDecoder>,
    text: Arc<dyn ITextJudge>,
    preview_len: usize,
}

impl PaletteEvaluator {
    pub fn new(
        rasterizer: Arc<dyn IDocumentRasterizer>,
        images: Arc<dyn IImageDecoder>,
        text: Arc<dyn ITextJudge>,
    ) -> Self {
        Self {
            rasterizer,
            images,
            text,
            preview_len: DEFAULT_PALETTE_PREVIEW_LEN,
        }
    }

    pub fn with_preview_len(mut self, preview_len: usize) -> Self {
        self.preview_len = preview_len.max(1);
        self
    }
}

impl ICriterionEvaluator for PaletteEvaluator {
    fn criterion(&self) -> Criterion {
        Criterion::ColorPalette
    }

    fn evaluate(&self, request: &AssessmentRequest) -> ComplianceResult<CriterionResult> {
        require_inputs(request.slide(), request.brand_kit())?;

        // Both inventories must succeed before the judge is consulted.
        let brand_colors = document_colors(self.rasterizer.as_ref(), request.brand_kit())?;
        let slide_colors = unique_colors(&self.images.decode(request.slide())?);

        let prompt = palette_prompt(&brand_colors, &slide_colors, self.preview_len);
        let answer = self.text.ask(&prompt)?;
        debug!(
            model = self.text.name(),
            brand_colors = brand_colors.len(),
            slide_colors = slide_colors.len(),
            "palette judged"
        );

        Ok(palette_result(&answer))
    }
}
