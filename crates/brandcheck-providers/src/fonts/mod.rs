//! Font detection by matching OCR text against a catalog of known families.

mod catalog;

pub use catalog::CatalogFontExtractor;
