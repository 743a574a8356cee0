use brandcheck_core::models::{ColorSet, HexColor};

use super::css_names;

/// Colors named in free text, matched word by word against the CSS table.
///
/// Matching is case-insensitive on whole alphabetic words, so "Navy" and
/// "navy" match while "reddish" does not.
pub fn named_colors_in(text: &str) -> ColorSet {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|word| !word.is_empty())
        .filter_map(|word| css_names::lookup(&word.to_ascii_lowercase()))
        .filter_map(HexColor::parse)
        .collect()
}

/// Logo colors described by a judge's answer, without pure white and pure black.
///
/// White and black are background and ink colors on nearly every slide and
/// carry no signal about the logo itself.
pub fn logo_colors_from_answer(answer: &str) -> ColorSet {
    named_colors_in(answer)
        .iter()
        .filter(|c| !c.is_neutral())
        .cloned()
        .collect()
}
