//! Latent semantic analysis ranking.
//!
//! Builds the term × sentence matrix A and extracts its leading singular
//! triplets through power iteration on the sentence Gram matrix AᵀA, whose
//! eigenvectors are the right singular vectors of A and whose eigenvalues are
//! the squared singular values. Sentence j scores `sqrt(Σ σ_d² · v_d[j]²)`.

use std::collections::HashMap;
use std::sync::Arc;

use precis_chunker::SentenceSplitter;

use crate::{term_frequencies, top_indices, RankerError, SentenceRanker};

const MIN_DIMENSIONS: usize = 3;
const MAX_DIMENSIONS: usize = 32;
const MAX_ITERATIONS: usize = 200;
const CONVERGENCE: f64 = 1e-9;
/// Eigenvalues below this are treated as zero.
const EIGEN_FLOOR: f64 = 1e-10;
/// Weight floor for a term present in a sentence.
const TF_SMOOTHING: f64 = 0.4;

pub struct LsaRanker {
    splitter: Arc<dyn SentenceSplitter>,
}

impl LsaRanker {
    pub fn new(splitter: Arc<dyn SentenceSplitter>) -> Self {
        Self { splitter }
    }

    /// Topic-weight score for each sentence, in document order.
    pub fn scores(&self, sentences: &[String], dimensions: usize) -> Result<Vec<f64>, RankerError> {
        let weights = term_weights(sentences);
        if weights.iter().all(HashMap::is_empty) {
            return Err(RankerError::NoTerms);
        }

        let n = sentences.len();
        let mut gram = vec![vec![0.0f64; n]; n];
        for i in 0..n {
            for j in i..n {
                let dot = sparse_dot(&weights[i], &weights[j]);
                gram[i][j] = dot;
                gram[j][i] = dot;
            }
        }

        let mut scores = vec![0.0f64; n];
        let mut found = 0;
        for _ in 0..dimensions.min(n) {
            let (eigenvalue, vector) = dominant_eigenpair(&gram);
            if eigenvalue < EIGEN_FLOOR {
                break;
            }
            for (score, v) in scores.iter_mut().zip(&vector) {
                *score += eigenvalue * v * v;
            }
            deflate(&mut gram, eigenvalue, &vector);
            found += 1;
        }

        if found == 0 {
            return Err(RankerError::Degenerate(
                "all singular values are zero".to_string(),
            ));
        }

        Ok(scores.into_iter().map(f64::sqrt).collect())
    }
}

impl SentenceRanker for LsaRanker {
    fn name(&self) -> &'static str {
        "lsa"
    }

    fn rank(&self, document: &str, count: usize) -> Result<Vec<String>, RankerError> {
        let sentences = self.splitter.split(document);
        if sentences.is_empty() {
            return Err(RankerError::EmptyDocument);
        }
        if sentences.len() <= count {
            return Ok(sentences);
        }

        let dimensions = count.max(MIN_DIMENSIONS).min(MAX_DIMENSIONS);
        let scores = self.scores(&sentences, dimensions)?;
        Ok(top_indices(&scores, count)
            .into_iter()
            .map(|i| sentences[i].clone())
            .collect())
    }
}

/// Augmented term frequency per sentence.
fn term_weights(sentences: &[String]) -> Vec<HashMap<String, f64>> {
    sentences
        .iter()
        .map(|sentence| {
            let tf = term_frequencies(sentence);
            let max_tf = tf.values().copied().max().unwrap_or(1) as f64;
            tf.into_iter()
                .map(|(term, count)| {
                    let weight = TF_SMOOTHING + (1.0 - TF_SMOOTHING) * count as f64 / max_tf;
                    (term, weight)
                })
                .collect()
        })
        .collect()
}

fn sparse_dot(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .filter_map(|(term, w)| large.get(term).map(|v| w * v))
        .sum()
}

fn mat_vec(matrix: &[Vec<f64>], v: &[f64]) -> Vec<f64> {
    matrix
        .iter()
        .map(|row| row.iter().zip(v).map(|(a, b)| a * b).sum())
        .collect()
}

fn normalize(v: &mut [f64]) -> f64 {
    let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > f64::EPSILON {
        v.iter_mut().for_each(|x| *x /= norm);
    }
    norm
}

/// Largest eigenvalue and unit eigenvector of a symmetric PSD matrix.
fn dominant_eigenpair(matrix: &[Vec<f64>]) -> (f64, Vec<f64>) {
    let n = matrix.len();
    // Non-uniform start so the iteration is not orthogonal to the target
    // after deflation.
    let mut v: Vec<f64> = (0..n).map(|j| 1.0 + ((j * 7919) % 101) as f64 / 101.0).collect();
    normalize(&mut v);

    for _ in 0..MAX_ITERATIONS {
        let mut next = mat_vec(matrix, &v);
        if normalize(&mut next) <= f64::EPSILON {
            return (0.0, v);
        }
        let delta: f64 = next.iter().zip(&v).map(|(a, b)| (a - b).abs()).sum();
        v = next;
        if delta < CONVERGENCE {
            break;
        }
    }

    let mv = mat_vec(matrix, &v);
    let eigenvalue = v.iter().zip(&mv).map(|(a, b)| a * b).sum();
    (eigenvalue, v)
}

fn deflate(matrix: &mut [Vec<f64>], eigenvalue: f64, v: &[f64]) {
    for (i, row) in matrix.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell -= eigenvalue * v[i] * v[j];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use precis_chunker::UnicodeSentenceSplitter;

    fn ranker() -> LsaRanker {
        LsaRanker::new(Arc::new(UnicodeSentenceSplitter::new()))
    }

    #[test]
    fn test_dominant_eigenpair_of_diagonal() {
        let matrix = vec![vec![1.0, 0.0], vec![0.0, 4.0]];
        let (value, vector) = dominant_eigenpair(&matrix);
        assert!((value - 4.0).abs() < 1e-6);
        assert!(vector[1].abs() > 0.999);
    }

    #[test]
    fn test_dominant_topic_outranks_outlier() {
        let text = "Neural networks learn representations from data. \
                    Deep neural networks stack many layers. \
                    Training neural networks requires large data sets. \
                    My aunt bakes bread.";
        let ranked = ranker().rank(text, 1).unwrap();
        assert_eq!(ranked.len(), 1);
        assert_ne!(ranked[0], "My aunt bakes bread.");
    }

    #[test]
    fn test_stopword_only_document_has_no_terms() {
        let result = ranker().rank("It is to be. Is it so? He was there.", 1);
        assert_eq!(result, Err(RankerError::NoTerms));
    }

    #[test]
    fn test_scores_are_non_negative() {
        let sentences: Vec<String> = ["Alpha beta gamma.", "Beta gamma delta.", "Epsilon zeta."]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let scores = ranker().scores(&sentences, 3).unwrap();
        assert_eq!(scores.len(), 3);
        assert!(scores.iter().all(|s| *s >= 0.0 && s.is_finite()));
    }
}
