//! Golden end-to-end scenarios: collaborator outputs in, expected report out.

use std::collections::BTreeMap;

use serde::Deserialize;

/// One golden scenario file under `golden/scenarios/`.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenScenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub company_name: Option<String>,
    /// Text of each brand-kit page.
    pub brand_kit_pages: Vec<String>,
    /// Pixel colors of each rendered brand-kit page.
    pub brand_kit_page_colors: Vec<Vec<String>>,
    /// Fonts detected on the rendered brand kit (first page).
    pub brand_kit_fonts: Vec<String>,
    /// Pixel colors of the slide.
    pub slide_colors: Vec<String>,
    pub slide_fonts: Vec<String>,
    /// Vision judge answer to the logo position prompt. `None` = model unreachable.
    pub position_answer: Option<String>,
    /// Vision judge answer to the logo color question. `None` = model unreachable.
    pub logo_color_answer: Option<String>,
    /// Text judge answer to the palette prompt. `None` = model unreachable.
    pub palette_answer: Option<String>,
    pub expected: ScenarioExpectation,
}

/// Expected report.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioExpectation {
    pub total_score: u8,
    /// Verdict per criterion, keyed by snake_case criterion name.
    pub verdicts: BTreeMap<String, i8>,
    /// Substring each listed explanation must contain.
    #[serde(default)]
    pub explanations_contain: BTreeMap<String, String>,
}
