//! Output types for quote extraction

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::span::QuoteSpan;

/// Extraction output with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Output {
    /// Accepted top-level spans, sorted by begin offset, children nested
    pub quotes: Vec<QuoteSpan>,
    /// Recovered unclosed spans, present only when enabled
    pub unclosed: Vec<QuoteSpan>,
    /// For each supplied token, the index of the innermost enclosing quote
    pub token_quote_indices: Vec<Option<usize>>,
    /// Extraction metadata
    pub metadata: ExtractionMetadata,
}

/// Metadata about one extraction run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionMetadata {
    /// Total extraction duration
    pub duration: Duration,
    /// Additional statistics
    pub stats: ExtractionStats,
}

/// Additional extraction statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Scalars scanned
    pub chars_processed: usize,
    /// Accepted spans, nested spans included
    pub quote_count: usize,
    /// Accepted top-level spans
    pub top_level_count: usize,
    /// Recovered unclosed spans, nested included
    pub unclosed_count: usize,
}

impl Output {
    pub(crate) fn build(
        quotes: Vec<QuoteSpan>,
        unclosed: Vec<QuoteSpan>,
        token_quote_indices: Vec<Option<usize>>,
        chars_processed: usize,
        duration: Duration,
    ) -> Self {
        let quote_count = quotes.iter().map(QuoteSpan::subtree_len).sum();
        let unclosed_count = unclosed.iter().map(QuoteSpan::subtree_len).sum();
        let top_level_count = quotes.len();
        Self {
            quotes,
            unclosed,
            token_quote_indices,
            metadata: ExtractionMetadata {
                duration,
                stats: ExtractionStats {
                    chars_processed,
                    quote_count,
                    top_level_count,
                    unclosed_count,
                },
            },
        }
    }
}
