//! Font criterion: every font detected on the slide must appear in the brand kit.

use std::path::Path;
use std::sync::Arc;

use brandcheck_core::errors::ComplianceResult;
use brandcheck_core::models::{AssessmentRequest, Criterion, CriterionResult, FontSet};
use brandcheck_core::traits::{
    ICriterionEvaluator, IDocumentRasterizer, IFontNameExtractor, IImageDecoder,
};
use tracing::debug;

use super::require_inputs;

pub const FONTS_MATCH: &str = "All fonts used in the slide are present in the brandkit PDF.";

/// Decide the font criterion from the two detected font sets.
///
/// An empty slide set passes: nothing detected means nothing off-brand.
pub fn compare_fonts(pdf_fonts: &FontSet, slide_fonts: &FontSet) -> CriterionResult {
    if slide_fonts.is_subset(pdf_fonts) {
        return CriterionResult::compliant(Criterion::Font, FONTS_MATCH);
    }
    let missing = slide_fonts.difference(pdf_fonts);
    CriterionResult::non_compliant(
        Criterion::Font,
        format!("Incorrect fonts detected: {}.", missing.join(", ")),
    )
}

/// Union of the fonts detected on every rendered page of the brand kit.
pub fn brand_kit_fonts(
    rasterizer: &dyn IDocumentRasterizer,
    fonts: &dyn IFontNameExtractor,
    pdf_path: &Path,
) -> ComplianceResult<FontSet> {
    let mut detected = FontSet::new();
    for index in 0..rasterizer.page_count(pdf_path)? {
        let page = rasterizer.render_page(pdf_path, index)?;
        detected.union_with(fonts.detect_fonts(&page));
    }
    Ok(detected)
}

/// Scores typography against the brand kit.
pub struct FontEvaluator {
    rasterizer: Arc<dyn IDocumentRasterizer>,
    images: Arc<dyn IImageDecoder>,
    fonts: Arc<dyn IFontNameExtractor>,
}

impl FontEvaluator {
    pub fn new(
        rasterizer: Arc<dyn IDocumentRasterizer>,
        images: Arc<dyn IImageDecoder>,
        fonts: Arc<dyn IFontNameExtractor>,
    ) -> Self {
        Self {
            rasterizer,
            images,
            fonts,
        }
    }
}

impl ICriterionEvaluator for FontEvaluator {
    fn criterion(&self) -> Criterion {
        Criterion::Font
    }

    fn evaluate(&self, request: &AssessmentRequest) -> ComplianceResult<CriterionResult> {
        require_inputs(request.slide(), request.brand_kit())?;

        let pdf_fonts =
            brand_kit_fonts(self.rasterizer.as_ref(), self.fonts.as_ref(), request.brand_kit())?;
        let slide = self.images.decode(request.slide())?;
        let slide_fonts = self.fonts.detect_fonts(&slide);

        debug!(
            pdf_fonts = ?pdf_fonts.iter().collect::<Vec<_>>(),
            slide_fonts = ?slide_fonts.iter().collect::<Vec<_>>(),
            "fonts detected"
        );

        Ok(compare_fonts(&pdf_fonts, &slide_fonts))
    }
}
