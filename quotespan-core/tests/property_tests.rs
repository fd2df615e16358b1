//! Property-based tests for the structural invariants.

use proptest::prelude::*;

use quotespan_core::{to_ascii_quotes, Config, Input, QuoteExtractor, QuoteSpan};

fn walk<'a>(spans: &'a [QuoteSpan], visit: &mut impl FnMut(&'a QuoteSpan)) {
    for span in spans {
        visit(span);
        walk(&span.children, visit);
    }
}

/// Text drawn from an alphabet dense in delimiters and word characters, so
/// generated documents actually exercise the matcher.
fn quote_heavy_text() -> impl Strategy<Value = String> {
    let alphabet = prop::sample::select(vec![
        'a', 'b', ' ', ' ', '.', ',', '!', '"', '"', '\'', '\'', '`', '“', '”', '‘', '’', '«',
        '»', '„', '「', '」', '😀',
    ]);
    prop::collection::vec(alphabet, 0..60).prop_map(|chars| chars.into_iter().collect())
}

fn any_config() -> impl Strategy<Value = Config> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        -2i32..40,
    )
        .prop_map(|(single, smart, ascii, embedded, unclosed, max_length)| {
            Config::builder()
                .single_quotes(single)
                .smart_quotes(smart)
                .ascii_quotes(ascii)
                .allow_embedded_same(embedded)
                .extract_unclosed(unclosed)
                .max_length(max_length)
                .build()
        })
}

proptest! {
    #[test]
    fn prop_ascii_conversion_idempotent(text in "\\PC*") {
        let once = to_ascii_quotes(&text);
        prop_assert_eq!(to_ascii_quotes(&once), once);
    }

    #[test]
    fn prop_ascii_conversion_preserves_scalar_length(text in "\\PC*") {
        prop_assert_eq!(
            to_ascii_quotes(&text).chars().count(),
            text.chars().count()
        );
    }

    #[test]
    fn prop_extraction_is_idempotent(text in quote_heavy_text(), config in any_config()) {
        let extractor = QuoteExtractor::with_config(config);
        let first = extractor.extract(Input::from_text(text.clone())).unwrap();
        let second = extractor.extract(Input::from_text(text)).unwrap();
        prop_assert_eq!(first.quotes, second.quotes);
        prop_assert_eq!(first.unclosed, second.unclosed);
    }

    #[test]
    fn prop_length_invariant(text in quote_heavy_text(), config in any_config()) {
        let output = QuoteExtractor::with_config(config)
            .extract(Input::from_text(text))
            .unwrap();
        let mut ok = true;
        walk(&output.quotes, &mut |span| {
            ok &= span.end > span.begin;
            ok &= span.text.chars().count() == span.end - span.begin;
        });
        walk(&output.unclosed, &mut |span| {
            ok &= span.end > span.begin;
            ok &= span.text.chars().count() == span.end - span.begin;
        });
        prop_assert!(ok);
    }

    #[test]
    fn prop_containment_invariant(text in quote_heavy_text(), config in any_config()) {
        let output = QuoteExtractor::with_config(config)
            .extract(Input::from_text(text))
            .unwrap();
        let mut ok = true;
        walk(&output.quotes, &mut |span| {
            for child in &span.children {
                ok &= span.begin < child.begin && child.end < span.end;
            }
            for pair in span.children.windows(2) {
                ok &= pair[0].end <= pair[1].begin;
            }
        });
        prop_assert!(ok);
    }

    #[test]
    fn prop_preorder_indices_strictly_increase(
        text in quote_heavy_text(),
        config in any_config(),
    ) {
        let output = QuoteExtractor::with_config(config)
            .extract(Input::from_text(text))
            .unwrap();
        let mut indices = Vec::new();
        walk(&output.quotes, &mut |span| {
            indices.push(span.index.expect("accepted spans carry an index"));
        });
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_matched_spans_are_closed(text in quote_heavy_text(), config in any_config()) {
        let output = QuoteExtractor::with_config(config)
            .extract(Input::from_text(text))
            .unwrap();
        let mut ok = true;
        walk(&output.quotes, &mut |span| ok &= span.closed);
        walk(&output.unclosed, &mut |span| ok &= !span.closed);
        prop_assert!(ok);
    }

    #[test]
    fn prop_top_level_sorted_and_disjoint(
        text in quote_heavy_text(),
        config in any_config(),
    ) {
        let output = QuoteExtractor::with_config(config)
            .extract(Input::from_text(text))
            .unwrap();
        prop_assert!(output
            .quotes
            .windows(2)
            .all(|w| w[0].end <= w[1].begin));
    }
}
