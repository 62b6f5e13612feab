use std::sync::Arc;

use crate::splitter::SentenceSplitter;
use crate::window::WindowChunker;
use crate::{char_count, ChunkingStrategy, TextChunk};

/// Default cap on sentences per chunk. Rankers hold an n × n matrix per
/// chunk, so this bounds their memory independently of sentence length.
pub const DEFAULT_MAX_CHUNK_SENTENCES: usize = 500;

/// Greedy sentence-aligned splitter.
///
/// Sentences are packed into a chunk until the next one, plus a single
/// separator, would push it past `target_chars`, or until the chunk holds
/// `max_sentences`. A sentence is never cut, so one longer than the target
/// becomes a chunk of its own. Text with no detectable sentences is cut into
/// raw character windows instead.
pub struct SentenceChunker {
    splitter: Arc<dyn SentenceSplitter>,
    target_chars: usize,
    max_sentences: usize,
}

impl SentenceChunker {
    pub fn new(splitter: Arc<dyn SentenceSplitter>, target_chars: usize) -> Self {
        Self {
            splitter,
            target_chars: target_chars.max(1),
            max_sentences: DEFAULT_MAX_CHUNK_SENTENCES,
        }
    }

    pub fn with_max_sentences(mut self, max_sentences: usize) -> Self {
        self.max_sentences = max_sentences.max(1);
        self
    }

    pub fn target_chars(&self) -> usize {
        self.target_chars
    }

    pub fn max_sentences(&self) -> usize {
        self.max_sentences
    }

    fn pack(&self, sentences: Vec<String>) -> Vec<TextChunk> {
        let mut chunks: Vec<TextChunk> = Vec::new();
        let mut current: Vec<String> = Vec::new();
        let mut current_len = 0;

        for sentence in sentences {
            let len = char_count(&sentence);

            let full = current.len() >= self.max_sentences
                || current_len + 1 + len > self.target_chars;
            if !current.is_empty() && full {
                chunks.push(build_chunk(chunks.len(), std::mem::take(&mut current), current_len));
                current_len = 0;
            }

            current_len += if current.is_empty() { len } else { len + 1 };
            current.push(sentence);
        }

        if !current.is_empty() {
            chunks.push(build_chunk(chunks.len(), current, current_len));
        }

        chunks
    }
}

fn build_chunk(chunk_index: usize, sentences: Vec<String>, char_count: usize) -> TextChunk {
    TextChunk {
        text: sentences.join(" "),
        chunk_index,
        sentences,
        char_count,
    }
}

impl ChunkingStrategy for SentenceChunker {
    fn chunk(&self, text: &str) -> Vec<TextChunk> {
        let sentences = self.splitter.split(text);
        if sentences.is_empty() {
            tracing::debug!(
                target_chars = self.target_chars,
                "No sentences detected, falling back to raw character windows"
            );
            return WindowChunker::new(self.target_chars).chunk(text);
        }
        self.pack(sentences)
    }
}
