// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use satwatch_exec::{ConfigError, ViewConfig};

#[test]
fn test_default_skips_identical_payloads() {
    assert!(ViewConfig::default().skip_identical_payloads);
}

#[test]
fn test_empty_document_uses_defaults() -> anyhow::Result<()> {
    assert_eq!(ViewConfig::from_toml_str("")?, ViewConfig::default());
    Ok(())
}

#[test]
fn test_parses_skip_flag() -> anyhow::Result<()> {
    let config = ViewConfig::from_toml_str("skip_identical_payloads = false")?;
    assert!(!config.skip_identical_payloads);
    Ok(())
}

#[test]
fn test_wrong_type_is_a_parse_error() {
    let error = ViewConfig::from_toml_str("skip_identical_payloads = \"yes\"").unwrap_err();
    assert!(matches!(error, ConfigError::Parse(_)));
    assert!(error.to_string().starts_with("Invalid view config"));
}

#[test]
fn test_unknown_key_is_rejected() {
    let error = ViewConfig::from_toml_str("poll_interval_ms = 100").unwrap_err();
    assert!(matches!(error, ConfigError::Parse(_)));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let error = ViewConfig::load("/nonexistent/satwatch/view.toml").unwrap_err();
    assert!(matches!(error, ConfigError::Io(_)));
}
