pub mod sentence;
pub mod splitter;
pub mod window;

pub use sentence::{SentenceChunker, DEFAULT_MAX_CHUNK_SENTENCES};
pub use splitter::{SentenceSplitter, SplitterError, UnicodeSentenceSplitter};
pub use window::WindowChunker;

/// A bounded slice of a document produced by the chunking engine.
#[derive(Debug, Clone)]
pub struct TextChunk {
    /// The chunk's sentences joined by single spaces, or a raw character window.
    pub text: String,
    pub chunk_index: usize,
    /// Sentences in document order. Empty for raw character windows.
    pub sentences: Vec<String>,
    pub char_count: usize,
}

/// Trait for chunking strategies.
pub trait ChunkingStrategy: Send + Sync {
    fn chunk(&self, text: &str) -> Vec<TextChunk>;
}

/// Count whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count Unicode scalar values, the unit all size limits are expressed in.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_ignores_extra_whitespace() {
        assert_eq!(word_count("  one\ttwo \n three  "), 3);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n "), 0);
    }

    #[test]
    fn test_char_count_is_not_byte_length() {
        assert_eq!(char_count("Schrödinger"), 11);
        assert_eq!("Schrödinger".len(), 12);
    }
}
