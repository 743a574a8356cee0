use super::Rgb;

/// A decoded RGB image: a rendered brand-kit page or the slide itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbRaster {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl RgbRaster {
    /// Wrap row-major pixels. `None` if the pixel count does not match the dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgb>) -> Option<Self> {
        if pixels.len() as u64 != u64::from(width) * u64::from(height) {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// A raster filled with one color.
    pub fn solid(width: u32, height: u32, color: Rgb) -> Self {
        let count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![color; count],
        }
    }

    /// Interpret packed `RGBRGB...` bytes, the layout most rasterizers emit.
    pub fn from_rgb_bytes(width: u32, height: u32, bytes: &[u8]) -> Option<Self> {
        if bytes.len() % 3 != 0 {
            return None;
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|px| Rgb::new(px[0], px[1], px[2]))
            .collect();
        Self::new(width, height, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}
