//! Recovery of unmatched opening delimiters.

use quotespan_core::{Config, Input, Output, QuoteExtractor, QuoteFamily};

fn extract(text: &str, config: Config) -> Output {
    QuoteExtractor::with_config(config)
        .extract(Input::from_text(text))
        .unwrap()
}

fn unclosed_config() -> Config {
    Config::builder()
        .single_quotes(true)
        .extract_unclosed(true)
        .build()
}

#[test]
fn test_disabled_by_default() {
    let output = extract("He said, \"never closed", Config::default());
    assert!(output.quotes.is_empty());
    assert!(output.unclosed.is_empty());
}

#[test]
fn test_single_unclosed_span_reaches_region_end() {
    let output = extract("He said, \"never closed", unclosed_config());
    assert_eq!(output.unclosed.len(), 1);
    let span = &output.unclosed[0];
    assert!(!span.closed);
    assert_eq!(span.begin, 9);
    assert_eq!(span.end, 22);
    assert_eq!(span.text, "\"never closed");
    assert!(span.index.is_none());
}

#[test]
fn test_nested_unclosed_chain() {
    let output = extract("\"abc 'def", unclosed_config());
    assert!(output.quotes.is_empty());
    assert_eq!(output.unclosed.len(), 1);
    let root = &output.unclosed[0];
    assert_eq!(root.family, QuoteFamily::StraightDouble);
    assert_eq!((root.begin, root.end), (0, 9));
    assert_eq!(root.children.len(), 1);
    let child = &root.children[0];
    assert_eq!(child.family, QuoteFamily::StraightSingle);
    assert_eq!((child.begin, child.end), (5, 9));
    assert!(!child.closed);
}

#[test]
fn test_unclosed_inside_matched_quote() {
    let output = extract("\"abc 'def\" xyz", unclosed_config());
    assert_eq!(output.quotes.len(), 1);
    assert_eq!(output.quotes[0].text, "\"abc 'def\"");
    // The dangling single opener is scoped to the enclosing quote's
    // interior, not to the document end.
    assert_eq!(output.unclosed.len(), 1);
    assert_eq!((output.unclosed[0].begin, output.unclosed[0].end), (5, 9));
    assert_eq!(output.unclosed[0].text, "'def");
}

#[test]
fn test_unclosed_exempt_from_max_length() {
    let config = Config::builder()
        .extract_unclosed(true)
        .max_length(3)
        .build();
    let output = extract("\"way past the length limit", config);
    assert_eq!(output.unclosed.len(), 1);
    assert!(output.unclosed[0].len() > 3);
}

#[test]
fn test_matched_quotes_never_become_unclosed_children() {
    let output = extract("\"dangling then \"closed\" after", unclosed_config());
    assert_eq!(output.quotes.len(), 1);
    assert_eq!(output.quotes[0].text, "\"closed\"");
    assert_eq!(output.unclosed.len(), 1);
    let root = &output.unclosed[0];
    assert!(root.children.is_empty());
    assert!(root.children.iter().all(|c| !c.closed));
}

#[test]
fn test_same_family_chain_needs_embedding_flag() {
    let text = "«one «two";
    let config = Config::builder()
        .smart_quotes(true)
        .extract_unclosed(true)
        .build();
    let output = extract(text, config);
    assert_eq!(output.unclosed.len(), 1);
    assert!(output.unclosed[0].children.is_empty());

    let config = Config::builder()
        .smart_quotes(true)
        .extract_unclosed(true)
        .allow_embedded_same(true)
        .build();
    let output = extract(text, config);
    assert_eq!(output.unclosed.len(), 1);
    assert_eq!(output.unclosed[0].children.len(), 1);
    assert_eq!(output.unclosed[0].children[0].begin, 5);
}
