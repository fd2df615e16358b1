//! CLI command implementations

use clap::Subcommand;

use crate::error::CliResult;

pub mod extract;
pub mod generate_config;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract quotation spans from text files
    Extract(extract::ExtractArgs),

    /// Write a default configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Extract(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}
