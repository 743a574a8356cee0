/// Brandcheck version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of compliance criteria evaluated per request.
pub const CRITERIA_COUNT: usize = 4;

/// Highest achievable total score.
pub const MAX_TOTAL_SCORE: u8 = CRITERIA_COUNT as u8;

/// Brand-kit pages mentioning this word carry logo placement instructions.
pub const LOGO_KEYWORD: &str = "logo";

/// Brand-kit pages mentioning this phrase declare the primary palette.
pub const PRIMARY_COLORS_PHRASE: &str = "primary colors";

/// Default number of colors shown per set in the palette prompt.
pub const DEFAULT_PALETTE_PREVIEW_LEN: usize = 10;

/// Question put to the vision judge when no company name is known.
pub const LOGO_COLOR_QUESTION: &str = "What colors are used in the company logo?";

/// Font families always present in the known-font catalog.
pub const BUILTIN_FONTS: &[&str] = &["Lexend", "Inter", "Arial", "Helvetica", "Times New Roman"];
