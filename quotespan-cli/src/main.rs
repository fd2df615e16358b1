//! quotespan command-line entry point

use clap::Parser;

use quotespan_cli::commands::Commands;

/// Extract quotation spans and their nesting structure from text
#[derive(Debug, Parser)]
#[command(name = "quotespan", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    if let Err(error) = cli.command.execute() {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}
