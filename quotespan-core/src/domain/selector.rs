//! Merging of per-family match results.
//!
//! Disjoint spans from every active family are always retained. A region
//! claimed by two families is resolved by preference: document-wide pair
//! counts when `smart_quotes` and `ascii_quotes` are both enabled, the fixed
//! family priority order otherwise. A span strictly contained in another is
//! a duplicate of the outer span's recursion result and is dropped.

use std::collections::HashMap;

use crate::domain::family::QuoteFamily;
use crate::domain::span::QuoteSpan;

#[derive(Debug, Clone)]
pub(crate) struct FamilySelector {
    count_preference: bool,
    pair_counts: HashMap<QuoteFamily, usize>,
}

impl FamilySelector {
    pub(crate) fn new(count_preference: bool, pair_counts: Vec<(QuoteFamily, usize)>) -> Self {
        Self {
            count_preference,
            pair_counts: pair_counts.into_iter().collect(),
        }
    }

    fn count(&self, family: QuoteFamily) -> usize {
        self.pair_counts.get(&family).copied().unwrap_or(0)
    }

    /// True when `a` wins a genuine overlap against `b`.
    pub(crate) fn prefers(&self, a: QuoteFamily, b: QuoteFamily) -> bool {
        if self.count_preference {
            let (ca, cb) = (self.count(a), self.count(b));
            if ca != cb {
                return ca > cb;
            }
        }
        a.priority_rank() < b.priority_rank()
    }

    /// Merge one forest per family into a single ordered, non-overlapping
    /// span list. Used for top-level results and, recursively, for the
    /// children of every span.
    pub(crate) fn resolve(&self, forests: Vec<Vec<QuoteSpan>>) -> Vec<QuoteSpan> {
        let mut spans: Vec<QuoteSpan> = forests.into_iter().flatten().collect();
        // Wider spans first at equal begin, then preference for determinism.
        spans.sort_by(|a, b| {
            a.begin
                .cmp(&b.begin)
                .then(b.end.cmp(&a.end))
                .then_with(|| a.family.priority_rank().cmp(&b.family.priority_rank()))
        });

        let mut resolved: Vec<QuoteSpan> = Vec::with_capacity(spans.len());
        for span in spans {
            let Some(last) = resolved.last() else {
                resolved.push(span);
                continue;
            };
            if span.begin >= last.end {
                resolved.push(span);
            } else if span.begin == last.begin && span.end == last.end {
                // Identical region claimed by two families.
                if self.prefers(span.family, last.family) {
                    resolved.pop();
                    resolved.push(span);
                }
            } else if span.end <= last.end {
                // Strictly contained: already represented as a nested child
                // where the nesting rules permit it.
            } else {
                // Partial overlap: genuine competition between families.
                if self.prefers(span.family, last.family) {
                    resolved.pop();
                    resolved.push(span);
                }
            }
        }
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(begin: usize, end: usize, family: QuoteFamily) -> QuoteSpan {
        QuoteSpan::matched(begin, end, family, String::new(), vec![])
    }

    fn priority_selector() -> FamilySelector {
        FamilySelector::new(false, vec![])
    }

    #[test]
    fn test_disjoint_spans_all_retained() {
        let resolved = priority_selector().resolve(vec![
            vec![span(0, 4, QuoteFamily::StraightDouble)],
            vec![span(6, 10, QuoteFamily::CurlyDouble)],
        ]);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].begin, 0);
        assert_eq!(resolved[1].begin, 6);
    }

    #[test]
    fn test_contained_duplicate_dropped() {
        let resolved = priority_selector().resolve(vec![
            vec![span(0, 10, QuoteFamily::StraightDouble)],
            vec![span(2, 8, QuoteFamily::StraightSingle)],
        ]);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].family, QuoteFamily::StraightDouble);
    }

    #[test]
    fn test_identical_region_resolved_by_priority() {
        let resolved = priority_selector().resolve(vec![
            vec![span(0, 5, QuoteFamily::StraightDouble)],
            vec![span(0, 5, QuoteFamily::CurlyDouble)],
        ]);
        assert_eq!(resolved.len(), 1);
        // Smart directional families outrank straight ASCII on ties.
        assert_eq!(resolved[0].family, QuoteFamily::CurlyDouble);
    }

    #[test]
    fn test_count_preference_overrides_priority() {
        let selector = FamilySelector::new(
            true,
            vec![(QuoteFamily::CurlyDouble, 1), (QuoteFamily::StraightDouble, 3)],
        );
        let resolved = selector.resolve(vec![
            vec![span(0, 5, QuoteFamily::StraightDouble)],
            vec![span(0, 5, QuoteFamily::CurlyDouble)],
        ]);
        assert_eq!(resolved[0].family, QuoteFamily::StraightDouble);
    }

    #[test]
    fn test_partial_overlap_keeps_preferred() {
        let resolved = priority_selector().resolve(vec![
            vec![span(0, 6, QuoteFamily::StraightDouble)],
            vec![span(3, 9, QuoteFamily::Guillemet)],
        ]);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].family, QuoteFamily::Guillemet);
    }

    #[test]
    fn test_output_sorted_by_begin() {
        let resolved = priority_selector().resolve(vec![
            vec![span(8, 12, QuoteFamily::StraightDouble)],
            vec![span(0, 4, QuoteFamily::StraightDouble)],
        ]);
        assert_eq!(resolved[0].begin, 0);
        assert_eq!(resolved[1].begin, 8);
    }
}
