use crate::models::{FontSet, RgbRaster};

/// Detects the font families visible in an image.
pub trait IFontNameExtractor: Send + Sync {
    /// Never fails: returns an empty set when nothing is detected with confidence.
    fn detect_fonts(&self, raster: &RgbRaster) -> FontSet;
}
