//! # RAG Text Chunker
//!
//! Deterministic, word-window text chunking for retrieval indexing.
//!
//! ## Philosophy
//!
//! The chunker produces overlapping, size-bounded excerpts that:
//! - Never drop a word of the source text
//! - Carry a stable `{base}#{n}` identifier tied to their document
//! - Repeat a configurable tail of each window at the head of the next one
//! - Depend only on the text and the configuration, never on other documents
//!
//! Sizes are configured in "tokens" and converted to words with a fixed
//! ratio of 0.75 words per token. The ratio is a best-effort heuristic, not a
//! guarantee for a downstream tokenizer's hard limit.
//!
//! ## Architecture
//!
//! ```text
//! Raw Text
//!     │
//!     ├──> Normalization
//!     │    ├─> Collapse whitespace runs, trim
//!     │    └─> Curly quotes → ASCII quotes
//!     │
//!     ├──> Word split
//!     │
//!     └──> Sliding windows (words_per_chunk, overlap_words)
//!          └─> Emit Chunk[] with `{base}#{n}` ids
//! ```
//!
//! ## Example
//!
//! ```rust
//! use rag_text_chunker::{Chunker, ChunkerConfig};
//!
//! let chunker = Chunker::new(ChunkerConfig::new(100, 20)).unwrap();
//!
//! let chunks = chunker.chunk_text("Return unworn items within 30 days.", "returns.md", "policy");
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunks[0].chunk_id, "policy#1");
//! ```

mod chunker;
mod config;
mod error;
mod normalize;
pub mod seed;
mod types;
mod window;

pub use chunker::Chunker;
pub use config::ChunkerConfig;
pub use error::{ChunkerError, Result};
pub use normalize::normalize;
pub use types::{Chunk, Document, DEFAULT_BASE_CHUNK_ID, DEFAULT_SOURCE};
pub use window::SlidingWindows;
