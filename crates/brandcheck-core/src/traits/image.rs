use std::path::Path;

use crate::errors::ComplianceResult;
use crate::models::RgbRaster;

/// Decodes the slide image into RGB pixels.
pub trait IImageDecoder: Send + Sync {
    /// Fails with `ImageUnreadable` if the file cannot be decoded.
    fn decode(&self, image_path: &Path) -> ComplianceResult<RgbRaster>;
}
