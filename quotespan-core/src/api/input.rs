//! Input abstraction for quote extraction

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::api::Error;
use crate::domain::span::{Sentence, Token};

enum Source {
    Text(String),
    File(PathBuf),
    Bytes(Vec<u8>),
    Reader(Box<dyn Read + Send + Sync>),
}

/// A document to extract quotes from: a text source plus optional token and
/// sentence annotations from external collaborators.
///
/// Absent or empty token and sentence lists are fine — masking degrades to
/// the identity and the corresponding decoration steps become no-ops. An
/// unobtainable text source is the one fatal condition.
pub struct Input {
    source: Source,
    tokens: Vec<Token>,
    sentences: Vec<Sentence>,
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let source = match &self.source {
            Source::Text(text) => format!("text({} bytes)", text.len()),
            Source::File(path) => format!("file({})", path.display()),
            Source::Bytes(bytes) => format!("bytes({})", bytes.len()),
            Source::Reader(_) => "reader".to_string(),
        };
        f.debug_struct("Input")
            .field("source", &source)
            .field("tokens", &self.tokens.len())
            .field("sentences", &self.sentences.len())
            .finish()
    }
}

impl Input {
    fn from_source(source: Source) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            sentences: Vec::new(),
        }
    }

    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::from_source(Source::Text(text.into()))
    }

    /// Create input from file path
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Self::from_source(Source::File(path.as_ref().to_path_buf()))
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self::from_source(Source::Bytes(bytes))
    }

    /// Create input from reader
    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Self::from_source(Source::Reader(Box::new(reader)))
    }

    /// Attach token ranges (char offsets) from an external tokenizer
    pub fn with_tokens(mut self, tokens: Vec<Token>) -> Self {
        self.tokens = tokens;
        self
    }

    /// Attach sentence ranges (char offsets) from an external splitter
    pub fn with_sentences(mut self, sentences: Vec<Sentence>) -> Self {
        self.sentences = sentences;
        self
    }

    pub(crate) fn into_parts(self) -> Result<(String, Vec<Token>, Vec<Sentence>), Error> {
        let bytes = match self.source {
            Source::Text(text) => return Ok((text, self.tokens, self.sentences)),
            Source::Bytes(bytes) => bytes,
            Source::File(path) => std::fs::read(&path).map_err(|e| {
                Error::Infrastructure(format!("Failed to read file {}: {}", path.display(), e))
            })?,
            Source::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer).map_err(|e| {
                    Error::Infrastructure(format!("Failed to read from reader: {}", e))
                })?;
                buffer
            }
        };
        let text = String::from_utf8(bytes)
            .map_err(|e| Error::InvalidInput(format!("Invalid UTF-8 encoding: {}", e)))?;
        Ok((text, self.tokens, self.sentences))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_round_trip() {
        let input = Input::from_text("Hello.");
        let (text, tokens, sentences) = input.into_parts().unwrap();
        assert_eq!(text, "Hello.");
        assert!(tokens.is_empty());
        assert!(sentences.is_empty());
    }

    #[test]
    fn test_annotations_carried_through() {
        let input = Input::from_text("Hi.")
            .with_tokens(vec![Token::new(0, 2)])
            .with_sentences(vec![Sentence::new(0, 3, 0)]);
        let (_, tokens, sentences) = input.into_parts().unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_invalid_utf8_is_invalid_input() {
        let input = Input::from_bytes(vec![0xff, 0xfe, 0xfd]);
        assert!(matches!(input.into_parts(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_missing_file_is_infrastructure_error() {
        let input = Input::from_file("/nonexistent/quotespan-test.txt");
        assert!(matches!(input.into_parts(), Err(Error::Infrastructure(_))));
    }
}
