//! Test fixture loader and deterministic mock collaborators for brandcheck tests.
//!
//! Provides typed deserialization of the golden scenario JSON files, mock
//! implementations of every collaborator trait, and temp-file helpers for
//! the engine's input preconditions.

pub mod mocks;
pub mod scenario;

use std::path::PathBuf;

use brandcheck_core::models::{HexColor, Rgb, RgbRaster};

pub use mocks::{
    FailingJudge, ScriptedTextJudge, ScriptedVisionJudge, StaticDecoder, StaticDocument,
    StaticFonts, StaticRasterizer, StaticRecognizer,
};
pub use scenario::{GoldenScenario, ScenarioExpectation};

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// Load every golden scenario.
pub fn load_scenarios() -> Vec<GoldenScenario> {
    list_fixtures("golden/scenarios")
        .iter()
        .map(|path| {
            let content = std::fs::read_to_string(path)
                .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
            serde_json::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e))
        })
        .collect()
}

/// Real files standing in for the slide and the brand kit.
///
/// Mocks never read them; they exist so the input preconditions pass.
pub struct TempInputs {
    _dir: tempfile::TempDir,
    pub slide: PathBuf,
    pub brand_kit: PathBuf,
}

/// Create a slide and a brand-kit file in a fresh temp directory.
pub fn temp_inputs() -> TempInputs {
    let dir = tempfile::tempdir().expect("create temp dir");
    let slide = dir.path().join("slide.png");
    let brand_kit = dir.path().join("brand_kit.pdf");
    std::fs::write(&slide, b"slide").expect("write slide");
    std::fs::write(&brand_kit, b"brand kit").expect("write brand kit");
    TempInputs {
        _dir: dir,
        slide,
        brand_kit,
    }
}

/// A one-row raster with one pixel per color, repeated over `rows` rows.
///
/// # Panics
/// Panics on a malformed hex code.
pub fn raster_of(colors: &[&str], rows: u32) -> RgbRaster {
    let row: Vec<Rgb> = colors
        .iter()
        .map(|code| {
            HexColor::parse(code)
                .unwrap_or_else(|| panic!("bad hex color in fixture: {code}"))
                .to_rgb()
        })
        .collect();
    let pixels: Vec<Rgb> = (0..rows).flat_map(|_| row.iter().copied()).collect();
    RgbRaster::new(row.len() as u32, rows, pixels).expect("raster dimensions")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn all_golden_scenarios_parse() {
        let scenarios = load_scenarios();
        assert!(scenarios.len() >= 5, "Expected at least 5 scenarios, found {}", scenarios.len());
        for s in &scenarios {
            assert!(s.expected.total_score <= 4, "{}: impossible total", s.name);
        }
    }

    #[test]
    fn raster_of_repeats_rows() {
        let raster = raster_of(&["#FF0000", "#00FF00"], 3);
        assert_eq!(raster.width(), 2);
        assert_eq!(raster.height(), 3);
        assert_eq!(raster.pixels().len(), 6);
    }

    #[test]
    fn temp_inputs_exist() {
        let inputs = temp_inputs();
        assert!(inputs.slide.exists());
        assert!(inputs.brand_kit.exists());
    }
}
