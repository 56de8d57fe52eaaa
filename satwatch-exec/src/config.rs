// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::Deserialize;
use std::path::Path;

/// Errors raised while loading a [`ViewConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read view config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid view config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Tuning for a watched view.
///
/// Every field has a default, so an empty document is a valid config:
///
/// ```toml
/// skip_identical_payloads = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    /// Do not signal the render boundary when an emission repeats the
    /// current items and loading flag.
    pub skip_identical_payloads: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            skip_identical_payloads: true,
        }
    }
}

impl ViewConfig {
    /// Parse a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not a valid config.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its content is not a valid config.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
