use thiserror::Error;

use crate::{
    chunk::{ByteBound, ChunkError, chunk_grapheme_safe},
    segment::{SegmentError, segment_text},
};
use std::borrow::Cow;

#[derive(Debug, Error)]
pub enum WordyError {
    #[error("segment error: {0}")]
    Segment(#[from] SegmentError),
    #[error("chunk error: {0}")]
    Chunk(#[from] ChunkError),
}

/// Front-end combining script-aware segmentation with grapheme-safe
/// chunking: the atom/chunk stream a tokenizer feeds downstream.
pub struct Wordy {
    max_bytes: ByteBound,
}

impl Wordy {
    pub fn builder() -> WordyBuilder {
        WordyBuilder::default()
    }

    /// Segment `text` into word atoms and, when a byte bound is configured,
    /// re-chunk each atom to fit it. Lossless and order-preserving:
    /// concatenating the result reconstructs `text` exactly.
    pub fn pretokenize<'a>(&self, text: &'a str) -> Result<Vec<Cow<'a, str>>, WordyError> {
        if self.max_bytes == ByteBound::Bytes(0) {
            return Err(ChunkError::InvalidBound.into());
        }
        let words = segment_text(text)?;
        if self.max_bytes == ByteBound::Unbounded {
            return Ok(words);
        }

        let mut out = Vec::with_capacity(words.len());
        for word in words {
            match word {
                Cow::Borrowed(word) => {
                    let chunks = chunk_grapheme_safe(word, self.max_bytes)?;
                    out.extend(chunks.into_iter().map(Cow::Borrowed));
                }
                Cow::Owned(word) => {
                    let chunks = chunk_grapheme_safe(&word, self.max_bytes)?;
                    out.extend(
                        chunks
                            .into_iter()
                            .map(|chunk| Cow::Owned(chunk.to_string())),
                    );
                }
            }
        }
        Ok(out)
    }
}

/// Reassemble pretokenized output into the original text.
pub fn words_to_text<I>(words: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut text = String::new();
    for word in words {
        text.push_str(word.as_ref());
    }
    text
}

pub struct WordyBuilder {
    max_bytes: ByteBound,
}

impl Default for WordyBuilder {
    fn default() -> Self {
        Self {
            max_bytes: ByteBound::Unbounded,
        }
    }
}

impl WordyBuilder {
    /// Cap every emitted piece at `max_bytes` UTF-8 bytes (grapheme-safe).
    pub fn max_bytes(mut self, max_bytes: impl Into<ByteBound>) -> Self {
        self.max_bytes = max_bytes.into();
        self
    }

    pub fn build(self) -> Wordy {
        Wordy {
            max_bytes: self.max_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_pretokenize_is_plain_segmentation() {
        let wordy = Wordy::builder().build();
        let words = wordy.pretokenize("hello world").unwrap();
        assert_eq!(words, vec!["hello ", "world"]);
    }

    #[test]
    fn bounded_pretokenize_rechunks_each_atom() {
        let wordy = Wordy::builder().max_bytes(10).build();
        let words = wordy.pretokenize("{\"name\": \"test\", \"value\": 123}").unwrap();
        assert_eq!(words, vec!["{\"name\": ", "\"test\", ", "\"value\": ", "123}"]);
    }

    #[test]
    fn zero_bound_is_rejected_before_processing() {
        let wordy = Wordy::builder().max_bytes(0).build();
        assert!(matches!(
            wordy.pretokenize("anything"),
            Err(WordyError::Chunk(ChunkError::InvalidBound))
        ));
    }

    #[test]
    fn words_round_trip() {
        let wordy = Wordy::builder().max_bytes(8).build();
        let text = "This is a very long string that should be split into multiple chunks";
        let words = wordy.pretokenize(text).unwrap();
        assert_eq!(words_to_text(&words), text);
        assert!(words.iter().all(|w| w.len() <= 8));
    }
}
