use crate::config::ChunkerConfig;
use crate::error::Result;
use crate::normalize::normalize;
use crate::types::{Chunk, Document};
use crate::window::SlidingWindows;

/// Main chunker interface for splitting text into overlapping word windows
///
/// Holds only the validated configuration and the word sizes derived from
/// it, all fixed at construction. Every method takes `&self`, so one
/// instance can be shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunker {
    config: ChunkerConfig,
    words_per_chunk: usize,
    overlap_words: usize,
}

impl Chunker {
    /// Create a new chunker, rejecting configurations whose windows would
    /// be empty or would never advance
    pub fn new(config: ChunkerConfig) -> Result<Self> {
        config.validate()?;

        let chunker = Self {
            config,
            words_per_chunk: config.words_per_chunk(),
            overlap_words: config.overlap_words(),
        };

        log::info!(
            "Initialized chunker: ~{} words per chunk, {} overlap",
            chunker.words_per_chunk,
            chunker.overlap_words
        );

        Ok(chunker)
    }

    #[must_use]
    pub const fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    #[must_use]
    pub const fn words_per_chunk(&self) -> usize {
        self.words_per_chunk
    }

    #[must_use]
    pub const fn overlap_words(&self) -> usize {
        self.overlap_words
    }

    /// Word windows this chunker would cut from `total_words` words
    #[must_use]
    pub fn windows(&self, total_words: usize) -> SlidingWindows {
        SlidingWindows::new(total_words, self.words_per_chunk, self.overlap_words)
    }

    /// Number of chunks produced for a text of `total_words` words
    #[must_use]
    pub fn max_chunks_for(&self, total_words: usize) -> usize {
        self.windows(total_words).len()
    }

    /// Normalize text the same way chunking does
    #[must_use]
    pub fn normalize(&self, text: &str) -> String {
        normalize(text)
    }

    /// Split one text into overlapping chunks.
    ///
    /// Empty or whitespace-only text gives no chunks. Text that fits in one
    /// window becomes a single `{base_chunk_id}#1` chunk holding the whole
    /// normalized text.
    pub fn chunk_text(&self, text: &str, source: &str, base_chunk_id: &str) -> Vec<Chunk> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let cleaned = normalize(text);
        let words: Vec<&str> = cleaned.split_whitespace().collect();

        if words.len() <= self.words_per_chunk {
            return vec![Chunk::new(base_chunk_id, 1, source, cleaned)];
        }

        let chunks: Vec<Chunk> = self
            .windows(words.len())
            .enumerate()
            .map(|(idx, range)| {
                Chunk::new(base_chunk_id, idx + 1, source, words[range].join(" "))
            })
            .collect();

        log::debug!(
            "Chunked text into {} chunks (source: {source})",
            chunks.len()
        );
        chunks
    }

    /// Chunk several documents, keeping document order.
    ///
    /// Each document is chunked on its own; missing sources and base ids
    /// fall back to [`crate::DEFAULT_SOURCE`] and
    /// [`crate::DEFAULT_BASE_CHUNK_ID`].
    pub fn chunk_documents(&self, documents: &[Document]) -> Vec<Chunk> {
        let all_chunks: Vec<Chunk> = documents
            .iter()
            .flat_map(|doc| {
                self.chunk_text(
                    &doc.text,
                    doc.source_or_default(),
                    doc.base_chunk_id_or_default(),
                )
            })
            .collect();

        log::info!(
            "Processed {} documents into {} total chunks",
            documents.len(),
            all_chunks.len()
        );

        all_chunks
    }
}
