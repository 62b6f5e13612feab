use std::sync::Arc;

use precis_chunker::{word_count, SentenceSplitter};

/// Estimates how many sentences to request from a ranker so that the
/// selection lands near a target word count.
pub struct BudgetEstimator {
    splitter: Arc<dyn SentenceSplitter>,
}

impl BudgetEstimator {
    pub fn new(splitter: Arc<dyn SentenceSplitter>) -> Self {
        Self { splitter }
    }

    /// `ceil(target_words / average words per sentence)`, never below 1.
    ///
    /// The target may be fractional, as with a per-chunk share of the
    /// document target, so the ceiling is taken once.
    pub fn estimate(&self, text: &str, target_words: f64) -> usize {
        let sentences = self.splitter.split(text);
        if sentences.is_empty() {
            return 1;
        }

        let words: usize = sentences.iter().map(|s| word_count(s)).sum();
        let avg_words_per_sentence = (words as f64 / sentences.len() as f64).max(1.0);
        ((target_words.max(0.0) / avg_words_per_sentence).ceil() as usize).max(1)
    }

    /// [`estimate`](Self::estimate) capped at `max_sentences`.
    pub fn estimate_capped(&self, text: &str, target_words: f64, max_sentences: usize) -> usize {
        self.estimate(text, target_words).min(max_sentences.max(1))
    }
}
