//! ASCII normalization of directional quote glyphs.
//!
//! Usable independently of the matching pipeline; the matcher also applies it
//! to build the scan view for the ASCII families when `ascii_quotes` is set.

/// Map a single scalar to its ASCII quote equivalent, or return it unchanged.
///
/// Double glyphs (curly, low-high, guillemets both widths) map to `"`,
/// curly/low single glyphs map to `'`. Every mapping is one scalar to one
/// scalar, so conversion never shifts offsets.
pub(crate) fn ascii_quote(ch: char) -> char {
    match ch {
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' => '"',
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' => '\'',
        '\u{00AB}' | '\u{00BB}' | '\u{2039}' | '\u{203A}' => '"',
        _ => ch,
    }
}

/// Convert all directional/Unicode quote glyphs in `text` to their ASCII
/// equivalents. The result has the same scalar length as the input.
pub fn to_ascii_quotes(text: &str) -> String {
    text.chars().map(ascii_quote).collect()
}
