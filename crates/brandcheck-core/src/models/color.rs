use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> HexColor {
        HexColor::from(self)
    }
}

/// A color as an uppercase 6-digit hex string, `#RRGGBB`.
///
/// Only constructible through normalization, so equality is case-insensitive
/// with respect to the input and `#abc` equals `#AABBCC`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Normalize a 3- or 6-digit hex code, with or without the leading `#`.
    pub fn parse(code: &str) -> Option<Self> {
        let digits = code.trim().strip_prefix('#').unwrap_or(code.trim());
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let expanded = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => digits.to_string(),
            _ => return None,
        };
        Some(Self(format!("#{}", expanded.to_ascii_uppercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_rgb(&self) -> Rgb {
        let channel = |i: usize| u8::from_str_radix(&self.0[i..i + 2], 16).unwrap_or(0);
        Rgb::new(channel(1), channel(3), channel(5))
    }

    /// Pure white or pure black.
    pub fn is_neutral(&self) -> bool {
        let rgb = self.to_rgb();
        rgb == Rgb::WHITE || rgb == Rgb::BLACK
    }
}

impl From<Rgb> for HexColor {
    fn from(c: Rgb) -> Self {
        Self(format!("#{:02X}{:02X}{:02X}", c.r, c.g, c.b))
    }
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("not a hex color: {value}"))
    }
}

impl From<HexColor> for String {
    fn from(c: HexColor) -> Self {
        c.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A set of colors with set semantics: duplicates collapse, order is irrelevant.
///
/// Iteration is in ascending hex order, which keeps prompts and explanations stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSet(BTreeSet<HexColor>);

impl ColorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from hex strings, silently skipping anything that is not a hex code.
    pub fn from_hex_strs<'a>(codes: impl IntoIterator<Item = &'a str>) -> Self {
        codes.into_iter().filter_map(HexColor::parse).collect()
    }

    pub fn insert(&mut self, color: HexColor) -> bool {
        self.0.insert(color)
    }

    pub fn contains(&self, color: &HexColor) -> bool {
        self.0.contains(color)
    }

    pub fn is_subset(&self, other: &ColorSet) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Colors in `self` that are not in `other`, in ascending order.
    pub fn difference<'a>(&'a self, other: &'a ColorSet) -> Vec<&'a HexColor> {
        self.0.difference(&other.0).collect()
    }

    pub fn extend(&mut self, other: ColorSet) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HexColor> {
        self.0.iter()
    }

    /// The first `n` colors, for truncated prompt previews.
    pub fn preview(&self, n: usize) -> Vec<&HexColor> {
        self.0.iter().take(n).collect()
    }
}

impl FromIterator<HexColor> for ColorSet {
    fn from_iter<I: IntoIterator<Item = HexColor>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromIterator<Rgb> for ColorSet {
    fn from_iter<I: IntoIterator<Item = Rgb>>(iter: I) -> Self {
        Self(iter.into_iter().map(HexColor::from).collect())
    }
}
