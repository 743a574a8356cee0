//! Reading brand rules out of brand-kit page text.

use brandcheck_core::constants::{LOGO_KEYWORD, PRIMARY_COLORS_PHRASE};
use brandcheck_core::models::ColorSet;

use crate::colors::extract_hex_colors;

/// Pages whose text contains `needle`, case-insensitively.
pub fn pages_mentioning<'a>(
    pages: &'a [String],
    needle: &'a str,
) -> impl Iterator<Item = &'a str> + 'a {
    let needle = needle.to_lowercase();
    pages
        .iter()
        .filter(move |page| page.to_lowercase().contains(&needle))
        .map(String::as_str)
}

/// Logo placement instructions: the full text of every page mentioning "logo".
pub fn logo_instructions(pages: &[String]) -> String {
    pages_mentioning(pages, LOGO_KEYWORD).collect::<Vec<_>>().join("\n")
}

/// Declared primary colors: every hex code on pages mentioning "primary colors".
pub fn primary_colors(pages: &[String]) -> ColorSet {
    let mut colors = ColorSet::new();
    for page in pages_mentioning(pages, PRIMARY_COLORS_PHRASE) {
        colors.extend(extract_hex_colors(page));
    }
    colors
}
