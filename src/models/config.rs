use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Largest pixel count a single conversion accepts
    pub max_pixels: usize,

    /// Allow chaining converters when no direct pair is registered
    pub allow_multi_step: bool,

    /// Maximum converters chained in one route
    pub max_hops: usize,

    /// PNG preview settings
    pub preview: PreviewConfig,

    /// Default tracing filter (overridden by RUST_LOG)
    pub log_filter: String,
}

/// PNG preview settings
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PreviewConfig {
    /// Row width used when the CLI is not given one
    pub width: Option<u32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_pixels: 64 * 1024 * 1024,
            allow_multi_step: true,
            max_hops: 2,
            preview: PreviewConfig::default(),
            log_filter: "pixconv=info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Read and parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Load configuration from an optional path, falling back to defaults
    pub fn load(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::resolve(path, Self::from_file(path)),
            None => Self::default(),
        }
    }

    /// Log the outcome of reading `path`, using defaults on failure
    pub fn resolve(path: &Path, loaded: Result<Self, ConfigError>) -> Self {
        match loaded {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    max_pixels = config.max_pixels,
                    allow_multi_step = config.allow_multi_step,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }
}
