//! The four criterion evaluators.
//!
//! Each evaluator checks its input preconditions, gathers features through
//! its collaborators, and hands them to a pure decision function that can be
//! tested without any collaborator at all.

pub mod font;
pub mod logo_color;
pub mod logo_position;
pub mod palette;

use std::path::Path;

use brandcheck_core::errors::{ComplianceError, ComplianceResult};

pub use font::FontEvaluator;
pub use logo_color::LogoColorEvaluator;
pub use logo_position::LogoPositionEvaluator;
pub use palette::PaletteEvaluator;

/// Fail with `InputMissing` unless `path` exists.
pub fn require_file(path: &Path) -> ComplianceResult<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(ComplianceError::input_missing(path.display().to_string()))
    }
}

/// Check both request inputs, slide first.
pub(crate) fn require_inputs(slide: &Path, brand_kit: &Path) -> ComplianceResult<()> {
    require_file(slide)?;
    require_file(brand_kit)
}
