use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four independent compliance dimensions.
///
/// Declaration order is evaluation order, and evaluation order is report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Font,
    LogoPosition,
    LogoColor,
    ColorPalette,
}

impl Criterion {
    /// All criteria in evaluation order.
    pub const ALL: [Criterion; 4] = [
        Criterion::Font,
        Criterion::LogoPosition,
        Criterion::LogoColor,
        Criterion::ColorPalette,
    ];

    /// Human-facing label, also the key used in the transport JSON.
    pub fn label(self) -> &'static str {
        match self {
            Self::Font => "Font style",
            Self::LogoPosition => "Logo Safe Zone",
            Self::LogoColor => "Logo Color",
            Self::ColorPalette => "Color palette",
        }
    }

    /// Stable snake_case identifier for logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Font => "font",
            Self::LogoPosition => "logo_position",
            Self::LogoColor => "logo_color",
            Self::ColorPalette => "color_palette",
        }
    }

    /// Position in the evaluation order.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
