use crate::errors::ComplianceResult;
use crate::models::RgbRaster;

/// Optical character recognition over a raster.
pub trait ITextRecognizer: Send + Sync {
    /// Recognized text lines, in reading order.
    fn recognize(&self, raster: &RgbRaster) -> ComplianceResult<Vec<String>>;
}
