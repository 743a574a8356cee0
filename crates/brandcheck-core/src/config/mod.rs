//! Configuration with TOML files, environment overrides, and compiled defaults.

pub mod defaults;
mod engine_config;
mod fonts_config;
mod judge_config;
mod observability_config;
mod palette_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use engine_config::EngineConfig;
pub use fonts_config::FontsConfig;
pub use judge_config::JudgeConfig;
pub use observability_config::ObservabilityConfig;
pub use palette_config::PaletteConfig;

use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`BRANDCHECK_*`)
/// 2. Config file passed to [`BrandcheckConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandcheckConfig {
    pub engine: EngineConfig,
    pub judge: JudgeConfig,
    pub palette: PaletteConfig,
    pub fonts: FontsConfig,
    pub observability: ObservabilityConfig,
}

impl BrandcheckConfig {
    /// Load a config file, apply environment overrides, and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let mut config: BrandcheckConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string. Missing keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `BRANDCHECK_*` environment overrides in place.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("BRANDCHECK_JUDGE_BASE_URL") {
            self.judge.base_url = val;
        }
        if let Ok(val) = std::env::var("BRANDCHECK_VISION_MODEL") {
            self.judge.vision_model = val;
        }
        if let Ok(val) = std::env::var("BRANDCHECK_TEXT_MODEL") {
            self.judge.text_model = val;
        }
        if let Ok(val) = std::env::var("BRANDCHECK_PARALLEL") {
            if let Ok(v) = val.parse::<bool>() {
                self.engine.parallel = v;
            }
        }
        if let Ok(val) = std::env::var("BRANDCHECK_LOG_LEVEL") {
            self.observability.log_level = val;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.preview_len == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "palette.preview_len".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.judge.timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "judge.timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        for (field, value) in [
            ("judge.base_url", &self.judge.base_url),
            ("judge.vision_model", &self.judge.vision_model),
            ("judge.text_model", &self.judge.text_model),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
