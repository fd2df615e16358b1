//! Recovery of unmatched opening delimiters as degenerate spans.
//!
//! Runs only when `extract_unclosed` is enabled, over the pre-filter
//! matched forest: length filtering never un-matches a delimiter. The pass
//! descends into every matched span's interior, and at each region level
//! re-scans the permitted families with that level's matched spans blanked
//! out. The earliest surviving unmatched opener becomes a synthetic
//! `closed=false` span reaching the region end, whose interior is scanned
//! the same way to build a chain of nested unclosed spans.

use crate::domain::family::QuoteFamily;
use crate::domain::matcher::{scan_region, SpanMatcher};
use crate::domain::span::QuoteSpan;

pub(crate) struct UnclosedExtractor<'m, 'a> {
    matcher: &'m SpanMatcher<'a>,
    raw: &'a [char],
}

impl<'m, 'a> UnclosedExtractor<'m, 'a> {
    pub(crate) fn new(matcher: &'m SpanMatcher<'a>, raw: &'a [char]) -> Self {
        Self { matcher, raw }
    }

    /// Collect every unclosed span in the document, ordered by begin offset.
    /// `matched` is the merged forest produced by ordinary matching.
    pub(crate) fn extract(&self, matched: &[QuoteSpan]) -> Vec<QuoteSpan> {
        let mut found = self.descend(0, self.matcher.text_len(), None, matched);
        found.sort_by_key(|span| span.begin);
        found
    }

    /// Recurse through matched interiors, then recover this level's chain.
    fn descend(
        &self,
        begin: usize,
        end: usize,
        parent: Option<QuoteFamily>,
        matched_here: &[QuoteSpan],
    ) -> Vec<QuoteSpan> {
        let mut found = Vec::new();
        for span in matched_here {
            let inner_begin = span.begin + span.family.open_glyphs().len();
            let inner_end = span.end - span.family.close_glyphs().len();
            found.extend(self.descend(inner_begin, inner_end, Some(span.family), &span.children));
        }
        if let Some(root) = self.level_chain(begin, end, parent, matched_here) {
            found.push(root);
        }
        found
    }

    /// Recover the chain rooted at the earliest unmatched opener left in
    /// `[begin, end)` once this level's matched spans are stepped over.
    fn level_chain(
        &self,
        begin: usize,
        end: usize,
        parent: Option<QuoteFamily>,
        matched_here: &[QuoteSpan],
    ) -> Option<QuoteSpan> {
        let skip: Vec<(usize, usize)> = matched_here
            .iter()
            .filter(|span| span.begin >= begin && span.end <= end)
            .map(|span| (span.begin, span.end))
            .collect();

        let mut earliest: Option<(usize, QuoteFamily)> = None;
        for family in self.permitted(parent) {
            let outcome = scan_region(self.matcher.view(family), begin, end, family, &skip);
            if let Some(&open_at) = outcome.unmatched_opens.first() {
                if earliest.map_or(true, |(at, _)| open_at < at) {
                    earliest = Some((open_at, family));
                }
            }
        }

        let (open_at, family) = earliest?;
        if open_at >= end {
            return None;
        }
        let text = self.raw[open_at..end].iter().collect();
        let mut span = QuoteSpan::unterminated(open_at, end, family, text);
        let inner_begin = open_at + family.open_glyphs().len();
        if inner_begin < end {
            // Nested unclosed openers only; matched spans in the tail stay
            // in the main list, never as children of an unclosed span.
            span.children = self
                .level_chain(inner_begin, end, Some(family), matched_here)
                .into_iter()
                .collect();
        }
        Some(span)
    }

    fn permitted(&self, parent: Option<QuoteFamily>) -> Vec<QuoteFamily> {
        let allow_same = self.matcher.allow_embedded_same();
        self.matcher
            .registry()
            .active()
            .iter()
            .copied()
            .filter(|&family| match parent {
                Some(parent_family) => allow_same || family != parent_family,
                None => true,
            })
            .collect()
    }
}
