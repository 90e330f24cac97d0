//! Execution configuration.

use crate::DEFAULT_TOKEN_ESTIMATE_DIVISOR;
use derive_getters::Getters;
use libretto_error::{ConfigError, ConfigErrorKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Options controlling how pipelines are loaded and executed.
///
/// Every field has a default, so a configuration file only needs the keys it
/// wants to change:
///
/// ```toml
/// templates_path = "prompts.toml"
/// log_prompts = true
/// strict_variables = false
/// token_estimate_divisor = 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[serde(default)]
#[builder(default)]
pub struct ExecutionConfig {
    /// Log the full transcript sent with every completion call
    log_prompts: bool,
    /// Fail a run when a `${var}` placeholder has no value instead of
    /// substituting an empty string
    strict_variables: bool,
    /// Characters per token used for the advisory token estimate
    token_estimate_divisor: usize,
    /// Template document loaded by `PromptManager::from_config`
    #[builder(setter(into, strip_option))]
    templates_path: Option<PathBuf>,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            log_prompts: false,
            strict_variables: false,
            token_estimate_divisor: DEFAULT_TOKEN_ESTIMATE_DIVISOR,
            templates_path: None,
        }
    }
}

impl ExecutionConfig {
    /// Returns a builder for constructing an ExecutionConfig.
    pub fn builder() -> ExecutionConfigBuilder {
        ExecutionConfigBuilder::default()
    }

    /// Load configuration from a TOML file.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(ConfigErrorKind::FileRead(e.to_string())))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))?;
        config.validate()?;
        tracing::debug!(?config, "Loaded execution config");
        Ok(config)
    }

    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token_estimate_divisor == 0 {
            return Err(ConfigError::new(ConfigErrorKind::InvalidValue(
                "token_estimate_divisor must be greater than zero".to_string(),
            )));
        }
        Ok(())
    }
}
