//! Logo color criterion: colors the vision judge names for the logo must all
//! be declared primary colors of the brand kit.

use std::sync::Arc;

use brandcheck_core::constants::LOGO_COLOR_QUESTION;
use brandcheck_core::errors::ComplianceResult;
use brandcheck_core::models::{AssessmentRequest, ColorSet, Criterion, CriterionResult};
use brandcheck_core::traits::{ICriterionEvaluator, IDocumentTextExtractor, IVisionJudge};
use tracing::debug;

use super::require_inputs;
use crate::brand_kit;
use crate::colors::logo_colors_from_answer;

pub const LOGO_ON_BRAND: &str = "The logo uses only the brand colors.";

/// Decide the logo color criterion.
///
/// Subset semantics: an empty logo set passes.
pub fn compare_logo_colors(logo_colors: &ColorSet, brand_colors: &ColorSet) -> CriterionResult {
    if logo_colors.is_subset(brand_colors) {
        return CriterionResult::compliant(Criterion::LogoColor, LOGO_ON_BRAND);
    }
    let off_brand: Vec<&str> = logo_colors
        .difference(brand_colors)
        .into_iter()
        .map(|c| c.as_str())
        .collect();
    CriterionResult::non_compliant(
        Criterion::LogoColor,
        format!(
            "The logo includes colors not in the brand kit: {}.",
            off_brand.join(", ")
        ),
    )
}

/// Question put to the vision judge.
pub fn logo_color_question(company: Option<&str>) -> String {
    match company {
        Some(name) => format!("What colors are used in the {name} logo?"),
        None => LOGO_COLOR_QUESTION.to_string(),
    }
}

/// Scores logo colors against the brand kit's primary palette.
pub struct LogoColorEvaluator {
    documents: Arc<dyn IDocumentTextExtractor>,
    vision: Arc<dyn IVisionJudge>,
}

impl LogoColorEvaluator {
    pub fn new(documents: Arc<dyn IDocumentTextExtractor>, vision: Arc<dyn IVisionJudge>) -> Self {
        Self { documents, vision }
    }
}

impl ICriterionEvaluator for LogoColorEvaluator {
    fn criterion(&self) -> Criterion {
        Criterion::LogoColor
    }

    fn evaluate(&self, request: &AssessmentRequest) -> ComplianceResult<CriterionResult> {
        require_inputs(request.slide(), request.brand_kit())?;

        let pages = self.documents.extract_pages(request.brand_kit())?;
        let brand_colors = brand_kit::primary_colors(&pages);

        let answer = self
            .vision
            .ask(request.slide(), &logo_color_question(request.company()))?;
        let logo_colors = logo_colors_from_answer(&answer);

        debug!(
            model = self.vision.name(),
            answer = %answer,
            logo_colors = logo_colors.len(),
            brand_colors = brand_colors.len(),
            "logo colors judged"
        );

        Ok(compare_logo_colors(&logo_colors, &brand_colors))
    }
}
