//! LexRank: sentences as nodes, thresholded IDF-modified cosine similarity as
//! edges, damped power iteration for centrality.

use std::collections::HashMap;
use std::sync::Arc;

use precis_chunker::SentenceSplitter;

use crate::{term_frequencies, top_indices, RankerError, SentenceRanker};

/// Damping factor for the power iteration.
const DAMPING: f64 = 0.85;
/// Convergence threshold.
const CONVERGENCE: f64 = 1e-6;
/// Maximum iterations.
const MAX_ITERATIONS: usize = 100;
/// Minimum similarity for two sentences to share an edge.
const DEFAULT_THRESHOLD: f64 = 0.1;

pub struct LexRankRanker {
    splitter: Arc<dyn SentenceSplitter>,
    threshold: f64,
}

impl LexRankRanker {
    pub fn new(splitter: Arc<dyn SentenceSplitter>) -> Self {
        Self {
            splitter,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Centrality score for each sentence, in document order.
    pub fn scores(&self, sentences: &[String]) -> Vec<f64> {
        let n = sentences.len();
        if n == 0 {
            return Vec::new();
        }
        if n == 1 {
            return vec![1.0];
        }

        let vectors = tfidf_vectors(sentences);
        let norms: Vec<f64> = vectors
            .iter()
            .map(|v| v.values().map(|w| w * w).sum::<f64>().sqrt())
            .collect();

        // Adjacency rows, normalized by degree below. Self-similarity always
        // clears the threshold, so no row is empty.
        let mut matrix = vec![vec![0.0f64; n]; n];
        for i in 0..n {
            matrix[i][i] = 1.0;
            for j in (i + 1)..n {
                let sim = cosine(&vectors[i], &vectors[j], norms[i], norms[j]);
                if sim >= self.threshold {
                    matrix[i][j] = 1.0;
                    matrix[j][i] = 1.0;
                }
            }
        }
        for row in &mut matrix {
            let degree: f64 = row.iter().sum();
            for cell in row.iter_mut() {
                *cell /= degree;
            }
        }

        power_iteration(&matrix)
    }
}

impl SentenceRanker for LexRankRanker {
    fn name(&self) -> &'static str {
        "lexrank"
    }

    fn rank(&self, document: &str, count: usize) -> Result<Vec<String>, RankerError> {
        let sentences = self.splitter.split(document);
        if sentences.is_empty() {
            return Err(RankerError::EmptyDocument);
        }
        if sentences.len() <= count {
            return Ok(sentences);
        }

        let scores = self.scores(&sentences);
        Ok(top_indices(&scores, count)
            .into_iter()
            .map(|i| sentences[i].clone())
            .collect())
    }
}

/// Smoothed TF-IDF weights per sentence, TF normalized by the sentence's
/// most frequent term.
fn tfidf_vectors(sentences: &[String]) -> Vec<HashMap<String, f64>> {
    let frequencies: Vec<HashMap<String, usize>> =
        sentences.iter().map(|s| term_frequencies(s)).collect();

    let mut document_frequency: HashMap<&str, usize> = HashMap::new();
    for tf in &frequencies {
        for term in tf.keys() {
            *document_frequency.entry(term.as_str()).or_insert(0) += 1;
        }
    }

    let n = sentences.len() as f64;
    frequencies
        .iter()
        .map(|tf| {
            let max_tf = tf.values().copied().max().unwrap_or(1) as f64;
            tf.iter()
                .map(|(term, &count)| {
                    let df = document_frequency.get(term.as_str()).copied().unwrap_or(0) as f64;
                    let idf = ((1.0 + n) / (1.0 + df)).ln() + 1.0;
                    (term.clone(), (count as f64 / max_tf) * idf)
                })
                .collect()
        })
        .collect()
}

fn cosine(a: &HashMap<String, f64>, b: &HashMap<String, f64>, norm_a: f64, norm_b: f64) -> f64 {
    if norm_a <= f64::EPSILON || norm_b <= f64::EPSILON {
        return 0.0;
    }
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .iter()
        .filter_map(|(term, w)| large.get(term).map(|v| w * v))
        .sum();
    dot / (norm_a * norm_b)
}

/// Stationary distribution of a row-stochastic matrix with damping.
fn power_iteration(matrix: &[Vec<f64>]) -> Vec<f64> {
    let n = matrix.len();
    let mut scores = vec![1.0 / n as f64; n];

    for _ in 0..MAX_ITERATIONS {
        let mut next = vec![(1.0 - DAMPING) / n as f64; n];
        for (j, row) in matrix.iter().enumerate() {
            let contribution = DAMPING * scores[j];
            for (i, weight) in row.iter().enumerate() {
                next[i] += contribution * weight;
            }
        }

        let delta: f64 = next
            .iter()
            .zip(&scores)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max);
        scores = next;
        if delta < CONVERGENCE {
            break;
        }
    }

    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use precis_chunker::UnicodeSentenceSplitter;

    fn ranker() -> LexRankRanker {
        LexRankRanker::new(Arc::new(UnicodeSentenceSplitter::new()))
    }

    #[test]
    fn test_hub_sentence_ranks_first() {
        let hub = "Solar panels and wind turbines both produce renewable electricity.";
        let text = format!(
            "Solar panels convert sunlight directly. {hub} Wind turbines spin in strong gusts. \
             Renewable electricity reduces emissions. Bananas are yellow."
        );
        let ranked = ranker().rank(&text, 2).unwrap();
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0], hub);
        assert!(ranked.iter().all(|s| s != "Bananas are yellow."));
    }

    #[test]
    fn test_scores_sum_to_one() {
        let sentences: Vec<String> = [
            "Rust is great.",
            "Rust is fast.",
            "Go is simple.",
            "Cats sleep a lot.",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        let scores = ranker().scores(&sentences);
        assert_eq!(scores.len(), 4);
        let sum: f64 = scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6, "scores sum to {sum}");
        assert!(scores.iter().all(|&s| s > 0.0));
    }

    #[test]
    fn test_returns_all_when_count_exceeds_sentences() {
        let ranked = ranker().rank("One idea. Another idea.", 5).unwrap();
        assert_eq!(ranked, vec!["One idea.", "Another idea."]);
    }

    #[test]
    fn test_empty_document_is_error() {
        assert_eq!(ranker().rank("  ", 3), Err(RankerError::EmptyDocument));
    }
}
