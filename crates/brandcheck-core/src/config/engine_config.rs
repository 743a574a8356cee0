use serde::{Deserialize, Serialize};

use super::defaults;

/// Orchestration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Run the four criteria on the rayon pool instead of one after another.
    /// Report order is fixed either way.
    pub parallel: bool,
    /// Record per-criterion outcome counters.
    pub record_metrics: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel: defaults::DEFAULT_PARALLEL,
            record_metrics: defaults::DEFAULT_RECORD_METRICS,
        }
    }
}
