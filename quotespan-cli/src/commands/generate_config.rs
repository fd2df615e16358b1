//! Generate-config command implementation

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::config::CliConfig;
use crate::error::CliResult;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> CliResult<()> {
        let rendered = CliConfig::default_toml()?;
        match &self.output {
            Some(path) => {
                std::fs::write(path, rendered)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
            None => print!("{rendered}"),
        }
        Ok(())
    }
}
