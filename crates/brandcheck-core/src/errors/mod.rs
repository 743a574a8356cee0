mod compliance_error;
mod config_error;

pub use compliance_error::{ComplianceError, ComplianceResult};
pub use config_error::ConfigError;
