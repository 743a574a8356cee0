//! # brandcheck-core
//!
//! Foundation crate for the brand compliance checker.
//! Defines the data model, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::BrandcheckConfig;
pub use errors::{ComplianceError, ComplianceResult, ConfigError};
pub use models::{
    AssessmentRequest, ColorSet, ComplianceReport, Criterion, CriterionResult, FontSet, HexColor,
    Rgb, RgbRaster, TransportReport, Verdict,
};
