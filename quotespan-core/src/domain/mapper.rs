//! Index assignment and sentence/token binding for accepted spans.

use crate::domain::span::{QuoteSpan, Sentence, Token};

/// Decorates accepted spans in document pre-order: global indices, sentence
/// ranges, and per-token back-references to the innermost enclosing span.
///
/// Missing sentence or token lists degrade the corresponding step to a
/// no-op; the spans themselves are unaffected.
#[derive(Debug)]
pub struct OffsetMapper<'a> {
    sentences: &'a [Sentence],
    tokens: &'a [Token],
}

impl<'a> OffsetMapper<'a> {
    pub fn new(sentences: &'a [Sentence], tokens: &'a [Token]) -> Self {
        Self { sentences, tokens }
    }

    /// Walk the forest in pre-order: each span receives the next unused
    /// index, its sentence range, and writes its index over every token it
    /// fully contains. Children are visited after their parent, so deeper
    /// spans overwrite and the innermost span wins per token.
    pub fn decorate(&self, spans: &mut [QuoteSpan], token_refs: &mut [Option<usize>]) {
        let mut next_index = 0;
        for span in spans.iter_mut() {
            self.visit(span, &mut next_index, token_refs);
        }
    }

    fn visit(&self, span: &mut QuoteSpan, next_index: &mut usize, token_refs: &mut [Option<usize>]) {
        let index = *next_index;
        *next_index += 1;
        span.index = Some(index);
        let (begin, end) = self.sentence_range(span.begin, span.end);
        span.sentence_begin = begin;
        span.sentence_end = end;

        for (token_at, token) in self.tokens.iter().enumerate() {
            if token.begin >= span.begin && token.end <= span.end {
                token_refs[token_at] = Some(index);
            }
        }

        for child in span.children.iter_mut() {
            self.visit(child, next_index, token_refs);
        }
    }

    /// Sentence ranges for the unclosed list: no indices, no token refs.
    pub fn decorate_unclosed(&self, spans: &mut [QuoteSpan]) {
        for span in spans.iter_mut() {
            let (begin, end) = self.sentence_range(span.begin, span.end);
            span.sentence_begin = begin;
            span.sentence_end = end;
            self.decorate_unclosed(&mut span.children);
        }
    }

    /// Locate the sentences containing `begin` and `end - 1`.
    fn sentence_range(&self, begin: usize, end: usize) -> (Option<usize>, Option<usize>) {
        let last = end.saturating_sub(1);
        let covering = |offset: usize| {
            self.sentences
                .iter()
                .find(|s| s.begin <= offset && offset < s.end)
                .map(|s| s.index)
        };
        (covering(begin), covering(last))
    }
}
