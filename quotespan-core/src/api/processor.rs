//! Main quote extractor implementation

use std::sync::Arc;
use std::time::Instant;

use crate::api::{Config, Input, Output, Result};
use crate::domain::family::FamilyRegistry;
use crate::domain::filter::FilterPipeline;
use crate::domain::mapper::OffsetMapper;
use crate::domain::masking::mask_to_tokens;
use crate::domain::matcher::SpanMatcher;
use crate::domain::selector::FamilySelector;
use crate::domain::traits::QuoteAttributor;
use crate::domain::unclosed::UnclosedExtractor;

/// Locates quotation spans in documents and reconstructs their nesting.
///
/// The extractor is stateless across documents: `extract` owns its working
/// buffers, so one instance may serve many threads concurrently.
pub struct QuoteExtractor {
    config: Config,
    attributor: Option<Arc<dyn QuoteAttributor>>,
}

impl QuoteExtractor {
    /// Create an extractor with default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an extractor with custom configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            attributor: None,
        }
    }

    /// Create an extractor that hands accepted spans to an external
    /// attribution collaborator when `attribute_quotes` is set
    pub fn with_attributor(config: Config, attributor: Arc<dyn QuoteAttributor>) -> Self {
        Self {
            config,
            attributor: Some(attributor),
        }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Extract the quote span forest from one document
    pub fn extract(&self, input: Input) -> Result<Output> {
        let start = Instant::now();
        let (text, tokens, sentences) = input.into_parts()?;
        let raw: Vec<char> = text.chars().collect();

        let masked = mask_to_tokens(&raw, &tokens);
        let registry = FamilyRegistry::new(self.config.single_quotes, self.config.smart_quotes);
        let matcher = SpanMatcher::new(
            &raw,
            &masked,
            &registry,
            self.config.ascii_quotes,
            self.config.allow_embedded_same,
        );

        let selector = FamilySelector::new(
            self.config.smart_quotes && self.config.ascii_quotes,
            matcher.pair_counts(),
        );
        let forest = matcher.match_document(&selector);

        // Unclosed recovery reads the pre-filter forest: a span rejected for
        // length still consumed its delimiters.
        let mut unclosed = if self.config.extract_unclosed {
            UnclosedExtractor::new(&matcher, &raw).extract(&forest)
        } else {
            Vec::new()
        };

        let mut quotes = FilterPipeline::new(self.config.max_length).apply(forest);

        let mapper = OffsetMapper::new(&sentences, &tokens);
        let mut token_refs = vec![None; tokens.len()];
        mapper.decorate(&mut quotes, &mut token_refs);
        mapper.decorate_unclosed(&mut unclosed);

        if self.config.attribute_quotes {
            if let Some(attributor) = &self.attributor {
                attributor.attribute(&quotes);
            }
        }

        Ok(Output::build(
            quotes,
            unclosed,
            token_refs,
            raw.len(),
            start.elapsed(),
        ))
    }
}

impl Default for QuoteExtractor {
    fn default() -> Self {
        Self::new()
    }
}
