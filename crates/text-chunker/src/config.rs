use crate::error::{ChunkerError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for word-window chunking
///
/// Both sizes are expressed in approximate tokens. They are converted to
/// words at 0.75 words per token (rounded down), which is a heuristic and
/// not a bound for any particular tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Target chunk size in tokens
    pub chunk_size: usize,

    /// Tokens repeated between consecutive chunks
    pub overlap: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size: 500,
            overlap: 50,
        }
    }
}

impl ChunkerConfig {
    #[must_use]
    pub const fn new(chunk_size: usize, overlap: usize) -> Self {
        Self {
            chunk_size,
            overlap,
        }
    }

    /// Replace the values that were explicitly provided.
    ///
    /// `None` keeps the current value. `Some(0)` is kept as-is and left for
    /// [`ChunkerConfig::validate`] to reject.
    #[must_use]
    pub fn with_overrides(self, chunk_size: Option<usize>, overlap: Option<usize>) -> Self {
        Self {
            chunk_size: chunk_size.unwrap_or(self.chunk_size),
            overlap: overlap.unwrap_or(self.overlap),
        }
    }

    /// Words per chunk derived from `chunk_size`
    #[must_use]
    pub const fn words_per_chunk(&self) -> usize {
        tokens_to_words(self.chunk_size)
    }

    /// Overlap words derived from `overlap`
    #[must_use]
    pub const fn overlap_words(&self) -> usize {
        tokens_to_words(self.overlap)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(ChunkerError::ZeroChunkSize);
        }

        if self.overlap >= self.chunk_size {
            return Err(ChunkerError::OverlapTooLarge {
                overlap: self.overlap,
                chunk_size: self.chunk_size,
            });
        }

        let words_per_chunk = self.words_per_chunk();
        let overlap_words = self.overlap_words();
        // overlap < chunk_size does not survive the rounding (5/4 -> 3/3)
        if words_per_chunk == 0 || overlap_words >= words_per_chunk {
            return Err(ChunkerError::DegenerateWindow {
                chunk_size: self.chunk_size,
                overlap: self.overlap,
                words_per_chunk,
                overlap_words,
            });
        }

        Ok(())
    }
}

/// floor(tokens * 0.75) without going through floats
const fn tokens_to_words(tokens: usize) -> usize {
    tokens / 4 * 3 + tokens % 4 * 3 / 4
}
