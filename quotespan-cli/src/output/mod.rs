//! Output formatting module

use anyhow::Result;
use serde::Serialize;

use quotespan_core::{ExtractionStats, QuoteSpan};

/// Extraction results for one input document
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    /// Source label (file path or "-" for stdin)
    pub source: String,
    /// Accepted top-level spans with nested children
    pub quotes: Vec<QuoteSpan>,
    /// Recovered unclosed spans, when enabled
    pub unclosed: Vec<QuoteSpan>,
    /// Extraction statistics
    pub stats: ExtractionStats,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one document's extraction results
    fn format_document(&mut self, report: &DocumentReport) -> Result<()>;

    /// Finalize output (e.g. close a JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
