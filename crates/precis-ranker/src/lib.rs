//! Extractive sentence ranking.
//!
//! Every strategy implements [`SentenceRanker`]: given a document and a
//! sentence count it returns that many sentences, most important first.
//! [`RankerChain`] tries strategies in order and degrades to the leading
//! sentences of the document when all of them fail.

pub mod chain;
pub mod lexrank;
pub mod lsa;
pub mod stopwords;

use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

pub use chain::RankerChain;
pub use lexrank::LexRankRanker;
pub use lsa::LsaRanker;

/// A sentence-importance strategy.
pub trait SentenceRanker: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Return up to `count` sentences of `document`, ranked by importance.
    fn rank(&self, document: &str, count: usize) -> Result<Vec<String>, RankerError>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RankerError {
    #[error("document contains no sentences")]
    EmptyDocument,
    #[error("document contains no content terms")]
    NoTerms,
    #[error("degenerate decomposition: {0}")]
    Degenerate(String),
}

/// Lowercased content-word frequencies of one sentence.
pub(crate) fn term_frequencies(sentence: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for word in sentence.unicode_words() {
        let word = word.to_lowercase();
        if stopwords::is_stopword(&word) {
            continue;
        }
        *counts.entry(word).or_insert(0) += 1;
    }
    counts
}

/// Indexes of the `count` highest scores, ties broken by position.
pub(crate) fn top_indices(scores: &[f64], count: usize) -> Vec<usize> {
    let mut indexed: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();
    indexed.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    indexed.into_iter().take(count).map(|(i, _)| i).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_frequencies_skip_stopwords() {
        let tf = term_frequencies("The cat sat on the Cat mat.");
        assert_eq!(tf.get("cat"), Some(&2));
        assert_eq!(tf.get("mat"), Some(&1));
        assert!(!tf.contains_key("the"));
        assert!(!tf.contains_key("on"));
    }

    #[test]
    fn test_top_indices_ties_by_position() {
        let scores = [0.2, 0.9, 0.2, 0.5];
        assert_eq!(top_indices(&scores, 3), vec![1, 3, 0]);
        assert_eq!(top_indices(&scores, 10).len(), 4);
    }
}
