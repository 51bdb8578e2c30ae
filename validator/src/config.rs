//! Validator configuration.

use attest_registry::Registry;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while reading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid validator config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration recognized by [`Validator::new`](crate::Validator::new).
///
/// Unknown keys are ignored. The class registry cannot be deserialized and is
/// attached with [`ValidatorConfig::with_registry`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// When false, every assertion is a no-op.
    pub enabled: bool,
    /// Class hierarchy for instance checks. Defaults to the builtin classes.
    #[serde(skip)]
    pub registry: Option<Arc<Registry>>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            registry: None,
        }
    }
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration whose validators skip every check.
    pub fn disabled() -> Self {
        Self::default().enabled(false)
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_registry(mut self, registry: Arc<Registry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Parse a JSON configuration object such as `{"enabled": false}`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
