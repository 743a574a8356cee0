//! Color algorithms: hex-code extraction, CSS color-name matching, and
//! exact-RGB color inventories of rasters.

pub mod css_names;
mod hex;
mod inventory;
mod named;

pub use hex::extract_hex_colors;
pub use inventory::{document_colors, unique_colors};
pub use named::{logo_colors_from_answer, named_colors_in};
