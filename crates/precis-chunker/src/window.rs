use crate::{char_count, ChunkingStrategy, TextChunk};

/// Fixed-size raw character windows, for text with no sentence structure.
pub struct WindowChunker {
    window_chars: usize,
}

impl WindowChunker {
    pub fn new(window_chars: usize) -> Self {
        Self {
            window_chars: window_chars.max(1),
        }
    }
}

impl ChunkingStrategy for WindowChunker {
    fn chunk(&self, text: &str) -> Vec<TextChunk> {
        let chars: Vec<char> = text.chars().collect();

        chars
            .chunks(self.window_chars)
            .map(|window| window.iter().collect::<String>())
            .filter(|window| !window.trim().is_empty())
            .enumerate()
            .map(|(i, window)| {
                let text = window.trim().to_string();
                TextChunk {
                    char_count: char_count(&text),
                    text,
                    chunk_index: i,
                    sentences: Vec::new(),
                }
            })
            .collect()
    }
}
