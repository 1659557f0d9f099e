use serde::{Deserialize, Serialize};

/// Source recorded for documents that do not name one
pub const DEFAULT_SOURCE: &str = "unknown";

/// Base chunk id used for documents that do not carry one
pub const DEFAULT_BASE_CHUNK_ID: &str = "doc";

/// A document handed to the chunker
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Raw text, normalized during chunking
    #[serde(default)]
    pub text: String,

    /// Source identifier (URL, filename, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Prefix for the ids of this document's chunks
    #[serde(default, alias = "chunk_id", skip_serializing_if = "Option::is_none")]
    pub base_chunk_id: Option<String>,
}

impl Document {
    /// Create a document with source and base chunk id
    pub fn new(
        text: impl Into<String>,
        source: impl Into<String>,
        base_chunk_id: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source: Some(source.into()),
            base_chunk_id: Some(base_chunk_id.into()),
        }
    }

    /// Source, or [`DEFAULT_SOURCE`] when absent
    #[must_use]
    pub fn source_or_default(&self) -> &str {
        self.source.as_deref().unwrap_or(DEFAULT_SOURCE)
    }

    /// Base chunk id, or [`DEFAULT_BASE_CHUNK_ID`] when absent
    #[must_use]
    pub fn base_chunk_id_or_default(&self) -> &str {
        self.base_chunk_id.as_deref().unwrap_or(DEFAULT_BASE_CHUNK_ID)
    }
}

/// A bounded excerpt of a document, ready for indexing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chunk {
    /// `{base_chunk_id}#{n}`, with `n` counting from 1 per document
    pub chunk_id: String,

    /// Source identifier of the originating document
    pub source: String,

    /// Normalized chunk text, words joined by single spaces
    pub text: String,
}

impl Chunk {
    pub(crate) fn new(base_chunk_id: &str, sequence: usize, source: &str, text: String) -> Self {
        Self {
            chunk_id: format!("{base_chunk_id}#{sequence}"),
            source: source.to_string(),
            text,
        }
    }

    /// Sequence number parsed from the end of `chunk_id`
    #[must_use]
    pub fn sequence(&self) -> Option<usize> {
        let (_, n) = self.chunk_id.rsplit_once('#')?;
        n.parse().ok()
    }

    /// Base chunk id, i.e. `chunk_id` without the `#n` suffix
    #[must_use]
    pub fn base_chunk_id(&self) -> Option<&str> {
        self.chunk_id.rsplit_once('#').map(|(base, _)| base)
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_defaults() {
        let doc = Document {
            text: "hello".to_string(),
            ..Default::default()
        };
        assert_eq!(doc.source_or_default(), "unknown");
        assert_eq!(doc.base_chunk_id_or_default(), "doc");
    }

    #[test]
    fn document_accepts_chunk_id_alias() {
        let doc: Document = serde_json::from_str(
            r#"{"chunk_id": "policy_returns_v1", "source": "https://help.example.com/return-policy", "text": "Return Policy"}"#,
        )
        .unwrap();
        assert_eq!(doc.base_chunk_id.as_deref(), Some("policy_returns_v1"));

        let doc: Document = serde_json::from_str(r#"{"text": "only text"}"#).unwrap();
        assert_eq!(doc.source, None);
        assert_eq!(doc.base_chunk_id, None);
    }

    #[test]
    fn chunk_id_parts() {
        let chunk = Chunk::new("faq#v2", 12, "faq.md", "a b c".to_string());
        assert_eq!(chunk.chunk_id, "faq#v2#12");
        assert_eq!(chunk.sequence(), Some(12));
        assert_eq!(chunk.base_chunk_id(), Some("faq#v2"));
        assert_eq!(chunk.word_count(), 3);
    }

    #[test]
    fn chunk_serializes_flat() {
        let chunk = Chunk::new("d1", 1, "s", "text".to_string());
        let value = serde_json::to_value(&chunk).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"chunk_id": "d1#1", "source": "s", "text": "text"})
        );
    }
}
