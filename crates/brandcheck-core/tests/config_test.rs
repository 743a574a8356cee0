//! Configuration tests: defaults, partial TOML, validation, file loading.

use std::io::Write;

use brandcheck_core::config::defaults;
use brandcheck_core::{BrandcheckConfig, ConfigError};

#[test]
fn defaults_are_valid() {
    let config = BrandcheckConfig::default();
    assert!(config.validate().is_ok());
    assert!(!config.engine.parallel);
    assert!(config.engine.record_metrics);
    assert_eq!(config.judge.base_url, defaults::DEFAULT_JUDGE_BASE_URL);
    assert_eq!(config.judge.vision_model, "llava");
    assert_eq!(config.judge.text_model, "llama3");
    assert_eq!(config.palette.preview_len, 10);
    assert!(config.fonts.known_fonts.is_empty());
}

#[test]
fn partial_toml_keeps_defaults() {
    let config = BrandcheckConfig::from_toml(
        r#"
        [engine]
        parallel = true

        [fonts]
        known_fonts = ["Poppins"]
        "#,
    )
    .unwrap();
    assert!(config.engine.parallel);
    assert!(config.engine.record_metrics);
    assert_eq!(config.fonts.known_fonts, vec!["Poppins".to_string()]);
    assert_eq!(config.judge.timeout_secs, defaults::DEFAULT_JUDGE_TIMEOUT_SECS);
}

#[test]
fn toml_roundtrip_preserves_values() {
    let mut config = BrandcheckConfig::default();
    config.palette.preview_len = 25;
    config.judge.vision_model = "llava:13b".to_string();
    let parsed = BrandcheckConfig::from_toml(&config.to_toml().unwrap()).unwrap();
    assert_eq!(parsed.palette.preview_len, 25);
    assert_eq!(parsed.judge.vision_model, "llava:13b");
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = BrandcheckConfig::from_toml("[engine\nparallel = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn zero_preview_len_fails_validation() {
    let config = BrandcheckConfig::from_toml("[palette]\npreview_len = 0").unwrap();
    match config.validate() {
        Err(ConfigError::ValidationFailed { field, .. }) => {
            assert_eq!(field, "palette.preview_len")
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn empty_model_fails_validation() {
    let config = BrandcheckConfig::from_toml("[judge]\ntext_model = \"  \"").unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("judge.text_model"));
}

#[test]
fn load_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[judge]\ntimeout_secs = 30").unwrap();
    let config = BrandcheckConfig::load(file.path()).unwrap();
    assert_eq!(config.judge.timeout_secs, 30);
}

#[test]
fn load_missing_file() {
    let err = BrandcheckConfig::load(std::path::Path::new("/no/such/brandcheck.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn env_overrides_win_over_file_values() {
    std::env::set_var("BRANDCHECK_VISION_MODEL", "bakllava");
    let mut config = BrandcheckConfig::from_toml("[judge]\nvision_model = \"llava\"").unwrap();
    config.apply_env_overrides();
    std::env::remove_var("BRANDCHECK_VISION_MODEL");
    assert_eq!(config.judge.vision_model, "bakllava");
}
