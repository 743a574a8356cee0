mod assessment_request;
mod color;
mod compliance_report;
mod criterion;
mod criterion_result;
mod font_set;
mod raster;
mod verdict;

pub use assessment_request::AssessmentRequest;
pub use color::{ColorSet, HexColor, Rgb};
pub use compliance_report::{ComplianceReport, Reasoning, TransportReport};
pub use criterion::Criterion;
pub use criterion_result::CriterionResult;
pub use font_set::FontSet;
pub use raster::RgbRaster;
pub use verdict::Verdict;
