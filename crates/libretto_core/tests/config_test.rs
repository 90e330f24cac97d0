//! Tests for execution configuration loading.

use libretto_core::{DEFAULT_TOKEN_ESTIMATE_DIVISOR, ExecutionConfig};
use libretto_error::ConfigErrorKind;
use std::io::Write;
use std::path::PathBuf;

#[test]
fn test_defaults() {
    let config = ExecutionConfig::default();
    assert!(!config.log_prompts());
    assert!(!config.strict_variables());
    assert_eq!(*config.token_estimate_divisor(), DEFAULT_TOKEN_ESTIMATE_DIVISOR);
    assert!(config.templates_path().is_none());
}

#[test]
fn test_partial_toml_falls_back_to_defaults() {
    let config = ExecutionConfig::from_toml_str("strict_variables = true").unwrap();
    assert!(*config.strict_variables());
    assert!(!config.log_prompts());
    assert_eq!(*config.token_estimate_divisor(), 3);
}

#[test]
fn test_full_toml() {
    let toml = r#"
        templates_path = "prompts.toml"
        log_prompts = true
        strict_variables = true
        token_estimate_divisor = 4
    "#;

    let config = ExecutionConfig::from_toml_str(toml).unwrap();
    assert!(*config.log_prompts());
    assert_eq!(*config.token_estimate_divisor(), 4);
    assert_eq!(
        config.templates_path().as_deref(),
        Some(PathBuf::from("prompts.toml").as_path())
    );
}

#[test]
fn test_zero_divisor_rejected() {
    let err = ExecutionConfig::from_toml_str("token_estimate_divisor = 0").unwrap_err();
    assert!(matches!(err.kind, ConfigErrorKind::InvalidValue(_)));
}

#[test]
fn test_malformed_toml_rejected() {
    let err = ExecutionConfig::from_toml_str("log_prompts = ").unwrap_err();
    assert!(matches!(err.kind, ConfigErrorKind::Parse(_)));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "log_prompts = true").unwrap();

    let config = ExecutionConfig::from_file(file.path()).unwrap();
    assert!(*config.log_prompts());
}

#[test]
fn test_from_missing_file() {
    let err = ExecutionConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err.kind, ConfigErrorKind::FileRead(_)));
}

#[test]
fn test_builder() {
    let config = ExecutionConfig::builder()
        .strict_variables(true)
        .templates_path("custom.toml")
        .build()
        .unwrap();
    assert!(*config.strict_variables());
    assert_eq!(*config.token_estimate_divisor(), 3);
}
