//! Offset-preserving masking of untokenized regions.
//!
//! Matching operates on a view of the document where every scalar outside any
//! token range is replaced by a space. Offsets never shift, so everything
//! downstream indexes the original text; delimiters inside markup or other
//! untokenized noise become blank and can never pair.

use crate::domain::span::Token;

/// Produce the masked scan view of `chars`.
///
/// Scalars covered by some token's `[begin, end)` are copied verbatim; all
/// others become a single space. With no tokens the view is the identity.
/// Token ranges beyond the text length are clamped.
pub fn mask_to_tokens(chars: &[char], tokens: &[Token]) -> Vec<char> {
    if tokens.is_empty() {
        return chars.to_vec();
    }

    let mut masked = vec![' '; chars.len()];
    for token in tokens {
        let begin = token.begin.min(chars.len());
        let end = token.end.min(chars.len());
        if begin < end {
            masked[begin..end].copy_from_slice(&chars[begin..end]);
        }
    }
    masked
}
