//! Recursive, stack-based span matching.
//!
//! Each active family is scanned independently over the masked text; nesting
//! is reconstructed by re-invoking the scan on the interior of every emitted
//! span for the families permitted there. Family results are merged and
//! deduplicated afterwards by the [`FamilySelector`](crate::domain::selector::FamilySelector).
//!
//! Scans walk Unicode scalar values, so offsets stay correct in the presence
//! of supplementary-plane characters.

use smallvec::SmallVec;

use crate::domain::ascii::ascii_quote;
use crate::domain::family::{FamilyRegistry, MatchPolicy, QuoteFamily};
use crate::domain::selector::FamilySelector;
use crate::domain::span::QuoteSpan;

/// Result of one flat, single-family scan over a region.
#[derive(Debug, Default)]
pub(crate) struct ScanOutcome {
    /// Matched `[begin, end)` ranges, delimiters included, ordered by begin
    pub(crate) pairs: Vec<(usize, usize)>,
    /// Offsets of opening delimiters left on the stack, ordered by offset
    pub(crate) unmatched_opens: Vec<usize>,
}

/// A scalar adjacent to a symmetric delimiter counts as a word character
/// when it is a Unicode letter or digit; everything else, including the
/// start and end of the region, is a boundary.
fn is_boundary(ch: Option<char>) -> bool {
    ch.map_or(true, |c| !c.is_alphanumeric())
}

fn glyphs_at(text: &[char], at: usize, end: usize, glyphs: &[char]) -> bool {
    at + glyphs.len() <= end && text[at..at + glyphs.len()] == *glyphs
}

fn skipped(skip: &[(usize, usize)], at: usize) -> Option<usize> {
    skip.iter()
        .find(|&&(begin, end)| at >= begin && at < end)
        .map(|&(_, end)| end)
}

/// Flat scan of `[begin, end)` for one family.
///
/// `skip` ranges are stepped over entirely; the unclosed pass uses them to
/// blank out spans already claimed by the matched interpretation.
pub(crate) fn scan_region(
    text: &[char],
    begin: usize,
    end: usize,
    family: QuoteFamily,
    skip: &[(usize, usize)],
) -> ScanOutcome {
    let open = family.open_glyphs();
    let close = family.close_glyphs();
    let mut stack: SmallVec<[usize; 8]> = SmallVec::new();
    let mut pairs = Vec::new();

    let mut at = begin;
    while at < end {
        if let Some(skip_end) = skipped(skip, at) {
            at = skip_end;
            continue;
        }
        match family.policy() {
            MatchPolicy::Directional => {
                if glyphs_at(text, at, end, open) {
                    stack.push(at);
                    at += open.len();
                } else if glyphs_at(text, at, end, close) {
                    if let Some(open_at) = stack.pop() {
                        pairs.push((open_at, at + close.len()));
                    }
                    // A closer with no pending open is silently discarded.
                    at += close.len();
                } else {
                    at += 1;
                }
            }
            MatchPolicy::Positional => {
                let glyph = open[0];
                if text[at] != glyph {
                    at += 1;
                    continue;
                }
                let before = if at == begin { None } else { Some(text[at - 1]) };
                let after = if at + 1 >= end { None } else { Some(text[at + 1]) };
                let may_open = is_boundary(before);
                let may_close = is_boundary(after);
                if may_close && !stack.is_empty() {
                    let open_at = stack.pop().expect("stack checked non-empty");
                    pairs.push((open_at, at + 1));
                } else if may_open {
                    stack.push(at);
                }
                // An apostrophe buried in a word qualifies as neither role.
                at += 1;
            }
        }
    }

    pairs.sort_unstable_by_key(|&(b, _)| b);
    ScanOutcome {
        pairs,
        unmatched_opens: stack.into_vec(),
    }
}

/// Per-document matcher over the masked scan views.
pub(crate) struct SpanMatcher<'a> {
    raw: &'a [char],
    masked: &'a [char],
    /// ASCII-converted view scanned by the non-smart families when
    /// `ascii_quotes` is set; conversion is scalar-for-scalar.
    ascii: Option<Vec<char>>,
    registry: &'a FamilyRegistry,
    allow_embedded_same: bool,
}

impl<'a> SpanMatcher<'a> {
    pub(crate) fn new(
        raw: &'a [char],
        masked: &'a [char],
        registry: &'a FamilyRegistry,
        ascii_quotes: bool,
        allow_embedded_same: bool,
    ) -> Self {
        let ascii = ascii_quotes.then(|| masked.iter().map(|&c| ascii_quote(c)).collect());
        Self {
            raw,
            masked,
            ascii,
            registry,
            allow_embedded_same,
        }
    }

    /// The scan view a family's delimiters are looked up in.
    pub(crate) fn view(&self, family: QuoteFamily) -> &[char] {
        if family.is_smart() {
            self.masked
        } else {
            self.ascii.as_deref().unwrap_or(self.masked)
        }
    }

    pub(crate) fn registry(&self) -> &FamilyRegistry {
        self.registry
    }

    pub(crate) fn allow_embedded_same(&self) -> bool {
        self.allow_embedded_same
    }

    pub(crate) fn text_len(&self) -> usize {
        self.raw.len()
    }

    fn slice(&self, begin: usize, end: usize) -> String {
        self.raw[begin..end].iter().collect()
    }

    /// Document-wide complete-pair count per active family, from flat scans.
    /// Feeds the selector's count-based preference.
    pub(crate) fn pair_counts(&self) -> Vec<(QuoteFamily, usize)> {
        self.registry
            .active()
            .iter()
            .map(|&family| {
                let outcome =
                    scan_region(self.view(family), 0, self.raw.len(), family, &[]);
                (family, outcome.pairs.len())
            })
            .collect()
    }

    /// Match every active family over the whole document and merge.
    pub(crate) fn match_document(&self, selector: &FamilySelector) -> Vec<QuoteSpan> {
        let forests = self
            .registry
            .active()
            .iter()
            .map(|&family| self.match_region(0, self.raw.len(), family, selector))
            .collect();
        selector.resolve(forests)
    }

    /// Match one family over `[begin, end)`, recursing into each span's
    /// interior for the families permitted there.
    fn match_region(
        &self,
        begin: usize,
        end: usize,
        family: QuoteFamily,
        selector: &FamilySelector,
    ) -> Vec<QuoteSpan> {
        let outcome = scan_region(self.view(family), begin, end, family, &[]);
        outcome
            .pairs
            .into_iter()
            .map(|(span_begin, span_end)| {
                let inner_begin = span_begin + family.open_glyphs().len();
                let inner_end = span_end - family.close_glyphs().len();
                let child_forests = self
                    .registry
                    .permitted_inside(family, self.allow_embedded_same)
                    .map(|inner| self.match_region(inner_begin, inner_end, inner, selector))
                    .collect();
                QuoteSpan::matched(
                    span_begin,
                    span_end,
                    family,
                    self.slice(span_begin, span_end),
                    selector.resolve(child_forests),
                )
            })
            .collect()
    }
}
