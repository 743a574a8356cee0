//! Compiled defaults for every config section.

pub const DEFAULT_PARALLEL: bool = false;
pub const DEFAULT_RECORD_METRICS: bool = true;

pub const DEFAULT_JUDGE_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_VISION_MODEL: &str = "llava";
pub const DEFAULT_TEXT_MODEL: &str = "llama3";
pub const DEFAULT_JUDGE_TIMEOUT_SECS: u64 = 120;

pub const DEFAULT_PALETTE_PREVIEW_LEN: usize = crate::constants::DEFAULT_PALETTE_PREVIEW_LEN;

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
