use thiserror::Error;

/// Result type for chunker operations
pub type Result<T> = std::result::Result<T, ChunkerError>;

/// Errors that can occur while setting up a chunker
///
/// Chunking itself never fails once a [`crate::Chunker`] exists: every
/// variant here is a configuration error raised at construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkerError {
    /// Chunk size of zero tokens
    #[error("Invalid configuration: chunk_size must be > 0")]
    ZeroChunkSize,

    /// Overlap is not strictly smaller than the chunk size
    #[error("Invalid configuration: overlap ({overlap}) must be smaller than chunk_size ({chunk_size})")]
    OverlapTooLarge { overlap: usize, chunk_size: usize },

    /// The derived word window is empty or would not advance
    #[error(
        "Invalid configuration: chunk_size={chunk_size}, overlap={overlap} give \
         {words_per_chunk} words per chunk with {overlap_words} overlap words"
    )]
    DegenerateWindow {
        chunk_size: usize,
        overlap: usize,
        words_per_chunk: usize,
        overlap_words: usize,
    },
}

impl ChunkerError {
    /// Whether this error comes from invalid chunker parameters
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ZeroChunkSize | Self::OverlapTooLarge { .. } | Self::DegenerateWindow { .. }
        )
    }
}
