use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Input of one assessment: the slide to score and the brand kit to score it against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub slide_image_path: PathBuf,
    pub brand_kit_pdf_path: PathBuf,
    /// Company whose logo the judges should look for.
    #[serde(default)]
    pub company_name: Option<String>,
}

impl AssessmentRequest {
    pub fn new(slide_image_path: impl Into<PathBuf>, brand_kit_pdf_path: impl Into<PathBuf>) -> Self {
        Self {
            slide_image_path: slide_image_path.into(),
            brand_kit_pdf_path: brand_kit_pdf_path.into(),
            company_name: None,
        }
    }

    pub fn with_company_name(mut self, company_name: impl Into<String>) -> Self {
        let name = company_name.into();
        self.company_name = if name.trim().is_empty() {
            None
        } else {
            Some(name.trim().to_string())
        };
        self
    }

    pub fn slide(&self) -> &Path {
        &self.slide_image_path
    }

    pub fn brand_kit(&self) -> &Path {
        &self.brand_kit_pdf_path
    }

    pub fn company(&self) -> Option<&str> {
        self.company_name.as_deref()
    }
}
