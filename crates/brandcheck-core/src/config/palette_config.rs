use serde::{Deserialize, Serialize};

use super::defaults;

/// Color palette criterion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Colors listed per set in the judge prompt before truncation.
    pub preview_len: usize,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            preview_len: defaults::DEFAULT_PALETTE_PREVIEW_LEN,
        }
    }
}
