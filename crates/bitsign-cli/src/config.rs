use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use bitsign_types::limits::DEFAULT_SALT_LEN;

use crate::cli::OutputFormat;

/// Settings loaded from the `--config` TOML file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Salt length used by `bitsign salt` when `--size` is not given.
    pub default_salt_size: usize,
    /// Output format used when `--format` is not given.
    pub format: OutputFormat,
    /// Maximum log level (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_salt_size: DEFAULT_SALT_LEN,
            format: OutputFormat::Text,
            log_level: "warn".into(),
        }
    }
}

impl CliConfig {
    /// Load from `path`, or return the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn log_level(&self) -> anyhow::Result<tracing::Level> {
        self.log_level
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid log level '{}'", self.log_level))
    }
}
