//! Extract command implementation

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use rayon::prelude::*;

use quotespan_core::{Config, Input, QuoteExtractor};

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{
    DocumentReport, JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter,
};

/// Arguments for the extract command
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Input files or patterns (supports glob, "-" for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable the straight single quote family
    #[arg(long)]
    pub single_quotes: bool,

    /// Enable the smart directional quote families
    #[arg(long)]
    pub smart_quotes: bool,

    /// Match ASCII families over an ASCII-converted view
    #[arg(long)]
    pub ascii_quotes: bool,

    /// Allow a quote family to nest directly within itself
    #[arg(long)]
    pub allow_embedded_same: bool,

    /// Recover unmatched opening delimiters as unclosed spans
    #[arg(long)]
    pub extract_unclosed: bool,

    /// Maximum span length in characters (negative = unlimited)
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub max_length: Option<i32>,

    /// Process multiple input files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One span per line, nesting indented
    Text,
    /// JSON array of per-document reports
    Json,
    /// Markdown sections per document
    Markdown,
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        log::info!("Starting quote extraction");
        log::debug!("Arguments: {:?}", self);

        let config = self.build_config()?;
        let extractor = QuoteExtractor::with_config(config);
        let documents = self.collect_documents()?;
        log::info!("Processing {} document(s)", documents.len());

        let reports = if self.parallel {
            documents
                .into_par_iter()
                .map(|(source, text)| Self::process_document(&extractor, source, text))
                .collect::<CliResult<Vec<_>>>()?
        } else {
            documents
                .into_iter()
                .map(|(source, text)| Self::process_document(&extractor, source, text))
                .collect::<CliResult<Vec<_>>>()?
        };

        self.write_reports(&reports)
    }

    fn process_document(
        extractor: &QuoteExtractor,
        source: String,
        text: String,
    ) -> CliResult<DocumentReport> {
        let output = extractor
            .extract(Input::from_text(text))
            .map_err(|e| CliError::ExtractionError(format!("{source}: {e}")))?;
        log::debug!(
            "{}: {} quote(s), {} unclosed",
            source,
            output.metadata.stats.quote_count,
            output.metadata.stats.unclosed_count
        );
        Ok(DocumentReport {
            source,
            quotes: output.quotes,
            unclosed: output.unclosed,
            stats: output.metadata.stats,
        })
    }

    /// Merge the config file (if any) with command-line overrides
    fn build_config(&self) -> CliResult<Config> {
        let file_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let base = file_config.quotes;
        Ok(Config::builder()
            .single_quotes(base.single_quotes || self.single_quotes)
            .smart_quotes(base.smart_quotes || self.smart_quotes)
            .ascii_quotes(base.ascii_quotes || self.ascii_quotes)
            .allow_embedded_same(base.allow_embedded_same || self.allow_embedded_same)
            .extract_unclosed(base.extract_unclosed || self.extract_unclosed)
            .max_length(self.max_length.unwrap_or(base.max_length))
            .build())
    }

    /// Resolve input patterns to (source label, text) pairs
    fn collect_documents(&self) -> CliResult<Vec<(String, String)>> {
        let mut documents = Vec::new();
        for pattern in &self.input {
            if pattern == "-" {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read from stdin")?;
                documents.push(("-".to_string(), text));
                continue;
            }

            let paths: Vec<PathBuf> = glob::glob(pattern)
                .map_err(|_| CliError::InvalidPattern(pattern.clone()))?
                .filter_map(Result::ok)
                .collect();
            if paths.is_empty() {
                return Err(CliError::FileNotFound(pattern.clone()).into());
            }
            for path in paths {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                documents.push((path.display().to_string(), text));
            }
        }
        Ok(documents)
    }

    fn write_reports(&self, reports: &[DocumentReport]) -> CliResult<()> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            )),
            None => Box::new(std::io::stdout()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };
        for report in reports {
            formatter.format_document(report)?;
        }
        formatter.finish()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
