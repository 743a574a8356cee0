use std::sync::Arc;

use brandcheck_core::config::FontsConfig;
use brandcheck_core::constants::BUILTIN_FONTS;
use brandcheck_core::models::{FontSet, RgbRaster};
use brandcheck_core::traits::{IFontNameExtractor, ITextRecognizer};
use tracing::{debug, warn};

/// Detects fonts by finding known family names in recognized text.
///
/// A family is detected when its name appears in an OCR line as a whole
/// word sequence, case-insensitively. The reported name is the catalog
/// spelling.
pub struct CatalogFontExtractor {
    recognizer: Arc<dyn ITextRecognizer>,
    catalog: Vec<String>,
}

impl CatalogFontExtractor {
    /// Catalog of the built-in families only.
    pub fn new(recognizer: Arc<dyn ITextRecognizer>) -> Self {
        Self::with_config(recognizer, &FontsConfig::default())
    }

    /// Built-in families plus `config.known_fonts`.
    pub fn with_config(recognizer: Arc<dyn ITextRecognizer>, config: &FontsConfig) -> Self {
        let mut catalog: Vec<String> = BUILTIN_FONTS.iter().map(|f| f.to_string()).collect();
        for family in &config.known_fonts {
            let family = family.trim();
            if !family.is_empty() && !catalog.iter().any(|f| f.eq_ignore_ascii_case(family)) {
                catalog.push(family.to_string());
            }
        }
        Self {
            recognizer,
            catalog,
        }
    }

    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    /// Catalog families named in the given text lines.
    pub fn match_lines(&self, lines: &[String]) -> FontSet {
        let lowered: Vec<String> = lines.iter().map(|l| l.to_lowercase()).collect();
        self.catalog
            .iter()
            .filter(|family| {
                let needle = family.to_lowercase();
                lowered.iter().any(|line| contains_word(line, &needle))
            })
            .cloned()
            .collect()
    }
}

/// `needle` occurs in `haystack` with no alphanumeric character on either side.
fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.match_indices(needle).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + needle.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

impl IFontNameExtractor for CatalogFontExtractor {
    fn detect_fonts(&self, raster: &RgbRaster) -> FontSet {
        match self.recognizer.recognize(raster) {
            Ok(lines) => {
                let fonts = self.match_lines(&lines);
                debug!(lines = lines.len(), fonts = fonts.len(), "catalog fonts matched");
                fonts
            }
            Err(e) => {
                warn!(error = %e, "text recognition failed, no fonts detected");
                FontSet::new()
            }
        }
    }
}
