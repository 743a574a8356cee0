use std::path::Path;

use crate::errors::ComplianceResult;
use crate::models::RgbRaster;

/// Per-page text extraction from a PDF.
pub trait IDocumentTextExtractor: Send + Sync {
    /// Text of every page, in page order.
    /// Fails with `DocumentUnreadable` if the file is missing or corrupt.
    fn extract_pages(&self, pdf_path: &Path) -> ComplianceResult<Vec<String>>;
}

/// Page rendering for a PDF.
pub trait IDocumentRasterizer: Send + Sync {
    /// Number of pages in the document.
    fn page_count(&self, pdf_path: &Path) -> ComplianceResult<usize>;

    /// Render one zero-indexed page to RGB pixels.
    fn render_page(&self, pdf_path: &Path, page_index: usize) -> ComplianceResult<RgbRaster>;
}
