//! Acceptance filtering of candidate spans.

use crate::domain::span::QuoteSpan;

/// Length and content acceptance rules, applied recursively to every
/// candidate span.
///
/// Zero-length spans are never accepted. A whitespace-only interior is fine:
/// a two-glyph pair like `""` is a blank span, not an empty one. Negative
/// `max_length` values are normalized to "unlimited".
#[derive(Debug, Clone)]
pub struct FilterPipeline {
    max_length: Option<usize>,
}

impl FilterPipeline {
    pub fn new(max_length: i32) -> Self {
        Self {
            max_length: usize::try_from(max_length).ok(),
        }
    }

    fn accepts(&self, span: &QuoteSpan) -> bool {
        if span.is_empty() {
            return false;
        }
        self.max_length.map_or(true, |max| span.len() <= max)
    }

    /// Filter a forest. A rejected span's already-accepted children are
    /// spliced into its position; a rejected child never moves to another
    /// level of the tree.
    pub fn apply(&self, spans: Vec<QuoteSpan>) -> Vec<QuoteSpan> {
        let mut accepted = Vec::with_capacity(spans.len());
        for mut span in spans {
            let children = self.apply(std::mem::take(&mut span.children));
            if self.accepts(&span) {
                span.children = children;
                accepted.push(span);
            } else {
                accepted.extend(children);
            }
        }
        accepted
    }
}
