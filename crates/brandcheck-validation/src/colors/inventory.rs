use std::collections::HashSet;
use std::path::Path;

use brandcheck_core::errors::ComplianceResult;
use brandcheck_core::models::{ColorSet, RgbRaster};
use brandcheck_core::traits::IDocumentRasterizer;
use tracing::debug;

/// Every distinct pixel color of a raster (exact RGB equality).
pub fn unique_colors(raster: &RgbRaster) -> ColorSet {
    let distinct: HashSet<_> = raster.pixels().iter().copied().collect();
    distinct.into_iter().collect()
}

/// Every distinct pixel color across all rendered pages of a document.
pub fn document_colors(
    rasterizer: &dyn IDocumentRasterizer,
    pdf_path: &Path,
) -> ComplianceResult<ColorSet> {
    let pages = rasterizer.page_count(pdf_path)?;
    let mut colors = ColorSet::new();
    for index in 0..pages {
        let page = rasterizer.render_page(pdf_path, index)?;
        colors.extend(unique_colors(&page));
    }
    debug!(pages, colors = colors.len(), "document color inventory built");
    Ok(colors)
}
