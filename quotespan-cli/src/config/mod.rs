//! TOML configuration file support

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::CliResult;

/// On-disk configuration, loadable with `-c/--config`
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Quote extraction options
    pub quotes: QuoteOptions,
}

/// Extraction options mirroring the core configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuoteOptions {
    /// Enable the straight single quote family
    pub single_quotes: bool,
    /// Enable the smart directional families
    pub smart_quotes: bool,
    /// Scan ASCII families over an ASCII-converted view
    pub ascii_quotes: bool,
    /// Allow a family to nest directly within itself
    pub allow_embedded_same: bool,
    /// Recover unmatched opening delimiters
    pub extract_unclosed: bool,
    /// Maximum span length in scalars; negative means unlimited
    pub max_length: i32,
}

impl Default for QuoteOptions {
    fn default() -> Self {
        Self {
            single_quotes: false,
            smart_quotes: false,
            ascii_quotes: false,
            allow_embedded_same: false,
            extract_unclosed: false,
            max_length: -1,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> CliResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: CliConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Render the default configuration as TOML
    pub fn default_toml() -> CliResult<String> {
        Ok(toml::to_string_pretty(&CliConfig::default())?)
    }

    /// Convert to the core extraction configuration
    pub fn to_core_config(&self) -> quotespan_core::Config {
        quotespan_core::Config::builder()
            .single_quotes(self.quotes.single_quotes)
            .smart_quotes(self.quotes.smart_quotes)
            .ascii_quotes(self.quotes.ascii_quotes)
            .allow_embedded_same(self.quotes.allow_embedded_same)
            .extract_unclosed(self.quotes.extract_unclosed)
            .max_length(self.quotes.max_length)
            .build()
    }
}
