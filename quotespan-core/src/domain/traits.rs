//! Collaborator seams for downstream consumers.

use crate::domain::span::QuoteSpan;

/// External speaker-attribution collaborator.
///
/// Attribution is never performed by this crate. When the
/// `attribute_quotes` option is set and an attributor is installed, the
/// extractor hands it the accepted span forest after decoration — that span
/// list is the collaborator's sole input.
pub trait QuoteAttributor: Send + Sync {
    /// Receive the accepted top-level span forest for a document.
    fn attribute(&self, quotes: &[QuoteSpan]);
}
