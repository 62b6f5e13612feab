use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use precis_chunker::SentenceSplitter;

use crate::{LexRankRanker, LsaRanker, SentenceRanker};

/// Ordered list of ranking strategies tried in sequence.
///
/// A strategy that errors, panics or returns nothing hands over to the next
/// one. When every strategy fails the leading sentences of the text are used,
/// so a summary is produced for any text that has sentences at all.
pub struct RankerChain {
    rankers: Vec<Box<dyn SentenceRanker>>,
    splitter: Arc<dyn SentenceSplitter>,
}

impl RankerChain {
    pub fn new(rankers: Vec<Box<dyn SentenceRanker>>, splitter: Arc<dyn SentenceSplitter>) -> Self {
        Self { rankers, splitter }
    }

    /// LexRank first, LSA second.
    pub fn default_chain(splitter: Arc<dyn SentenceSplitter>) -> Self {
        Self::new(
            vec![
                Box::new(LexRankRanker::new(splitter.clone())),
                Box::new(LsaRanker::new(splitter.clone())),
            ],
            splitter,
        )
    }

    pub fn ranker_names(&self) -> Vec<&'static str> {
        self.rankers.iter().map(|r| r.name()).collect()
    }

    /// Select up to `count` sentences from `text`.
    pub fn summarize(&self, text: &str, count: usize) -> Vec<String> {
        for ranker in &self.rankers {
            let attempt = catch_unwind(AssertUnwindSafe(|| ranker.rank(text, count)));
            match attempt {
                Ok(Ok(sentences)) => {
                    let sentences: Vec<String> = sentences
                        .into_iter()
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect();
                    if !sentences.is_empty() {
                        return sentences;
                    }
                    tracing::warn!(ranker = ranker.name(), "Ranker returned no sentences");
                }
                Ok(Err(e)) => {
                    tracing::warn!(ranker = ranker.name(), error = %e, "Ranker failed");
                }
                Err(_) => {
                    tracing::warn!(ranker = ranker.name(), "Ranker panicked");
                }
            }
        }

        tracing::warn!(count, "All rankers failed, taking leading sentences");
        self.splitter.split(text).into_iter().take(count).collect()
    }
}
