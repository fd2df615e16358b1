//! Quotation span detection with nesting reconstruction
//!
//! This crate locates quotation spans inside a document's text and
//! reconstructs their nesting structure, operating purely on Unicode scalar
//! offsets. It is robust to malformed or unclosed input, mixed quote
//! conventions, and markup noise: tokenization, sentence splitting, and
//! speaker attribution are external collaborators consumed through narrow
//! interfaces.
//!
//! # Architecture
//!
//! - **Domain layer**: the family table, offset-preserving masking, the
//!   recursive stack-based matcher, family selection, filtering, offset
//!   binding, and unclosed-span recovery
//! - **API layer**: configuration, input/output types, and the extractor
//!
//! # Example
//!
//! ```rust
//! use quotespan_core::{Input, QuoteExtractor};
//!
//! let extractor = QuoteExtractor::new();
//! let output = extractor
//!     .extract(Input::from_text("He said, \"Hello there!\""))
//!     .unwrap();
//!
//! assert_eq!(output.quotes.len(), 1);
//! assert_eq!(output.quotes[0].text, "\"Hello there!\"");
//! ```

pub mod api;
pub mod domain;

pub use api::{
    Config, ConfigBuilder, Error, ExtractionMetadata, ExtractionStats, Input, Output,
    QuoteExtractor, Result,
};
pub use domain::{to_ascii_quotes, QuoteAttributor, QuoteFamily, QuoteSpan, Sentence, Token};
