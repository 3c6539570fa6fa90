//! # CLI Configuration
//!
//! Optional YAML file passed with the global `--config` flag. Every field
//! has a default, so an empty file is valid; command-line flags override
//! file values.
//!
//! ```yaml
//! format: yaml
//! fail_fast: true
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;

/// Output encoding for structured results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Settings shared by all subcommands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Default output format for `convert`.
    pub format: OutputFormat,
    /// Stop `check` at the first invalid input.
    pub fail_fast: bool,
}

impl CliConfig {
    /// Load the configuration file, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_yaml(&raw)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    fn from_yaml(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }
}
