//! Logo position criterion: a vision judge compares the slide against the
//! brand kit's logo placement instructions.

use std::sync::Arc;

use brandcheck_core::errors::{ComplianceError, ComplianceResult};
use brandcheck_core::models::{AssessmentRequest, Criterion, CriterionResult, Verdict};
use brandcheck_core::traits::{ICriterionEvaluator, IDocumentTextExtractor, IVisionJudge};
use tracing::debug;

use super::require_inputs;
use crate::brand_kit;

pub const LOGO_WELL_PLACED: &str = "Logo is correctly positioned and sized.";
pub const LOGO_MISPLACED: &str = "Logo is not positioned or sized correctly.";

/// Interpret the judge's answer.
///
/// Structured prefixes (`1:` / `0:`) win. Otherwise an answer starting with
/// "yes"/"no" (so "Nope" and "Not really" read as no) decides, then the phrases "not correct"/"incorrect" (negative) and
/// "correct" (positive). Anything else is `Unclear`.
pub fn parse_position_verdict(output: &str) -> Verdict {
    let answer = output.trim();
    if answer.starts_with("1:") {
        return Verdict::Compliant;
    }
    if answer.starts_with("0:") {
        return Verdict::NonCompliant;
    }

    let lower = answer.to_lowercase();
    if lower.starts_with("yes") {
        return Verdict::Compliant;
    }
    if lower.starts_with("no") {
        return Verdict::NonCompliant;
    }
    // Negative phrases contain "correct", so they must be checked first.
    if lower.contains("not correct") || lower.contains("incorrect") {
        return Verdict::NonCompliant;
    }
    if lower.contains("correct") {
        return Verdict::Compliant;
    }
    Verdict::Unclear
}

/// Turn the judge's answer into the criterion result.
pub fn position_result(output: &str) -> CriterionResult {
    match parse_position_verdict(output) {
        Verdict::Compliant => CriterionResult::compliant(Criterion::LogoPosition, LOGO_WELL_PLACED),
        Verdict::NonCompliant => {
            CriterionResult::non_compliant(Criterion::LogoPosition, LOGO_MISPLACED)
        }
        Verdict::Unclear => CriterionResult::from_error(
            Criterion::LogoPosition,
            &ComplianceError::AmbiguousJudgment {
                output: output.trim().to_string(),
            },
        ),
    }
}

/// Prompt asking the judge for a `1:`/`0:` answer.
pub fn position_prompt(instructions: &str, company: Option<&str>) -> String {
    let logo = match company {
        Some(name) => format!("the {name} logo"),
        None => "the company logo".to_string(),
    };
    let instructions = if instructions.trim().is_empty() {
        "(The brand kit gives no explicit logo placement instructions. Judge by common brand guidelines: clear space around the logo, no cropping, consistent corner placement.)"
    } else {
        instructions.trim()
    };
    format!(
        "You are a design reviewer. Given the following slide image, determine if {logo} is \
         positioned correctly and has the proper size according to these instructions:\n\n\
         {instructions}\n\n\
         IMPORTANT: Reply with either:\n\
         \"1: [Your explanation]\" if the logo is properly positioned and sized.\n\
         \"0: [Your explanation]\" if the logo is not correctly positioned or sized.\n\n\
         Use exactly this format."
    )
}

/// Scores logo placement against the brand kit's instructions.
pub struct LogoPositionEvaluator {
    documents: Arc<dyn IDocumentTextExtractor>,
    vision: Arc<dyn IVisionJudge>,
}

impl LogoPositionEvaluator {
    pub fn new(documents: Arc<dyn IDocumentTextExtractor>, vision: Arc<dyn IVisionJudge>) -> Self {
        Self { documents, vision }
    }
}

impl ICriterionEvaluator for LogoPositionEvaluator {
    fn criterion(&self) -> Criterion {
        Criterion::LogoPosition
    }

    fn evaluate(&self, request: &AssessmentRequest) -> ComplianceResult<CriterionResult> {
        require_inputs(request.slide(), request.brand_kit())?;

        let pages = self.documents.extract_pages(request.brand_kit())?;
        let instructions = brand_kit::logo_instructions(&pages);
        let prompt = position_prompt(&instructions, request.company());

        let answer = self.vision.ask(request.slide(), &prompt)?;
        debug!(model = self.vision.name(), answer = %answer, "logo position judged");

        Ok(position_result(&answer))
    }
}
