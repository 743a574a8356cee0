use std::sync::LazyLock;

use brandcheck_core::models::{ColorSet, HexColor};
use regex::Regex;

/// A `#` followed by exactly 3 or 6 hex digits, not running into further word characters.
static RE_HEX_COLOR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"#(?:[0-9a-fA-F]{3}){1,2}\b").ok());

/// Every 3- or 6-digit hex color code in `text`, normalized to `#RRGGBB`.
pub fn extract_hex_colors(text: &str) -> ColorSet {
    let Some(re) = RE_HEX_COLOR.as_ref() else {
        return ColorSet::new();
    };
    re.find_iter(text)
        .filter_map(|m| HexColor::parse(m.as_str()))
        .collect()
}
