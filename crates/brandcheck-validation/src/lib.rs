//! # brandcheck-validation
//!
//! Scores a slide image against a brand-kit PDF on four independent criteria
//! and aggregates the verdicts into a compliance report.
//!
//! ## Criteria
//! 1. **Font**: slide fonts must be a subset of brand-kit fonts
//! 2. **Logo position**: vision judge verdict against the kit's logo instructions
//! 3. **Logo color**: named logo colors must be a subset of the kit's primary colors
//! 4. **Color palette**: text judge verdict over both color inventories
//!
//! Each criterion is fault-isolated: an error or panic in one scores that
//! criterion 0 and never prevents the others from running.

pub mod brand_kit;
pub mod colors;
pub mod criteria;
pub mod engine;

pub use engine::{Collaborators, ComplianceEngine};
