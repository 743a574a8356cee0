use serde::{Deserialize, Serialize};

/// Font catalog settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FontsConfig {
    /// Extra family names added to the built-in catalog.
    pub known_fonts: Vec<String>,
}
