use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use precis_chunker::{
    char_count, word_count, ChunkingStrategy, SentenceChunker, SentenceSplitter, TextChunk,
};
use precis_common::{Summary, SummarizerLimits, SummaryMethod};
use precis_ranker::RankerChain;

use crate::budget::BudgetEstimator;
use crate::ordering::order_by_origin;
use crate::trim::trim_to_words;

/// Documents within this many words of the target are returned verbatim.
const SHORT_CIRCUIT_SLACK: usize = 20;
/// Summaries may overshoot the target by this many words before trimming.
const TRIM_SLACK: usize = 30;
/// Leading sentences used when the recombined summary has none left.
const FALLBACK_SENTENCES: usize = 5;

pub struct SummarizationPipeline {
    limits: SummarizerLimits,
    splitter: Arc<dyn SentenceSplitter>,
    chunker: SentenceChunker,
    budget: BudgetEstimator,
    chain: RankerChain,
}

impl SummarizationPipeline {
    /// Build a pipeline with the default LexRank → LSA ranker chain.
    pub fn new(limits: SummarizerLimits, splitter: Arc<dyn SentenceSplitter>) -> Self {
        let chain = RankerChain::default_chain(splitter.clone());
        Self::with_chain(limits, splitter, chain)
    }

    pub fn with_chain(
        limits: SummarizerLimits,
        splitter: Arc<dyn SentenceSplitter>,
        chain: RankerChain,
    ) -> Self {
        Self {
            limits,
            chunker: SentenceChunker::new(splitter.clone(), limits.chunk_char_target)
                .with_max_sentences(limits.max_chunk_sentences),
            budget: BudgetEstimator::new(splitter.clone()),
            splitter,
            chain,
        }
    }

    pub fn limits(&self) -> &SummarizerLimits {
        &self.limits
    }

    /// Summarize `text` to roughly `max_words` words.
    pub fn summarize(&self, text: &str, max_words: Option<i64>) -> Result<Summary, PipelineError> {
        self.summarize_cancellable(text, max_words, &AtomicBool::new(false))
    }

    /// Like [`summarize`](Self::summarize), but gives up with
    /// [`PipelineError::Cancelled`] once `cancel` is set. The flag is checked
    /// before each chunk and before the final pass.
    pub fn summarize_cancellable(
        &self,
        text: &str,
        max_words: Option<i64>,
        cancel: &AtomicBool,
    ) -> Result<Summary, PipelineError> {
        // 1. Validate
        let document = self.validate(text)?;

        // 2. Short-circuit documents that are already short enough
        let target_words = self.limits.target_words(max_words);
        let total_words = word_count(document);
        if total_words <= target_words + SHORT_CIRCUIT_SLACK {
            tracing::debug!(total_words, target_words, "Document already short, returning as-is");
            return Ok(Summary {
                summary: document.to_string(),
                word_count: total_words,
                method: SummaryMethod::Original,
            });
        }

        // 3. Chunk
        let chunks = self.chunker.chunk(document);
        let per_chunk_target = target_words as f64 / chunks.len().max(1) as f64;
        tracing::info!(
            total_words,
            target_words,
            chunk_count = chunks.len(),
            per_chunk_target,
            "Summarizing document"
        );

        // 4. Summarize each chunk
        let mut partials = Vec::with_capacity(chunks.len());
        for chunk in &chunks {
            check_cancelled(cancel)?;
            let partial = self.summarize_chunk(chunk, per_chunk_target);
            if !partial.is_empty() {
                partials.push(partial);
            }
        }

        // 5. Recombine
        let recombined = partials.join("\n\n");
        check_cancelled(cancel)?;

        // 6. Final pass over the recombined partial summaries
        if self.splitter.split(&recombined).is_empty() {
            tracing::warn!(
                chunk_count = chunks.len(),
                "Recombined summary has no sentences, using leading sentences of the document"
            );
            let lead: Vec<String> = self
                .splitter
                .split(document)
                .into_iter()
                .take(FALLBACK_SENTENCES)
                .collect();
            return Ok(finish(&lead.join(" "), target_words, SummaryMethod::FallbackFirstSents));
        }

        let sentence_count = self.budget.estimate_capped(
            &recombined,
            target_words as f64,
            self.limits.max_sentence_count,
        );
        let selected = self.chain.summarize(&recombined, sentence_count);
        let ordered = order_by_origin(&selected, &recombined);

        // 7. Trim
        let summary = finish(&ordered, target_words, SummaryMethod::ChunkedLexrank);
        tracing::info!(
            word_count = summary.word_count,
            sentence_count,
            method = %summary.method,
            "Summary complete"
        );
        Ok(summary)
    }

    fn validate<'a>(&self, text: &'a str) -> Result<&'a str, PipelineError> {
        let document = text.trim();
        if document.is_empty() {
            return Err(PipelineError::InvalidInput);
        }

        let chars = char_count(document);
        if chars > self.limits.max_input_chars {
            return Err(PipelineError::PayloadTooLarge {
                chars,
                max: self.limits.max_input_chars,
            });
        }

        Ok(document)
    }

    /// Summarize a single chunk, falling back to its leading sentences if
    /// anything in the ranking path panics.
    fn summarize_chunk(&self, chunk: &TextChunk, target_words: f64) -> String {
        let mut sentence_count = 1;

        let attempt = catch_unwind(AssertUnwindSafe(|| {
            sentence_count = self.budget.estimate_capped(
                &chunk.text,
                target_words,
                self.limits.max_sentence_count,
            );
            self.chain.summarize(&chunk.text, sentence_count).join(" ")
        }));

        match attempt {
            Ok(partial) => partial,
            Err(_) => {
                tracing::error!(
                    chunk_index = chunk.chunk_index,
                    sentence_count,
                    "Chunk summarization panicked, using leading sentences"
                );
                leading_sentences(chunk, sentence_count)
            }
        }
    }
}

/// Window chunks carry no sentences; they only exist when the whole document
/// has none, so there is nothing to re-split.
fn leading_sentences(chunk: &TextChunk, count: usize) -> String {
    chunk
        .sentences
        .iter()
        .take(count)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

fn check_cancelled(cancel: &AtomicBool) -> Result<(), PipelineError> {
    if cancel.load(Ordering::Relaxed) {
        tracing::warn!("Summarization cancelled");
        return Err(PipelineError::Cancelled);
    }
    Ok(())
}

fn finish(text: &str, target_words: usize, method: SummaryMethod) -> Summary {
    let summary = trim_to_words(text.trim(), target_words + TRIM_SLACK);
    Summary {
        word_count: word_count(&summary),
        summary,
        method,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    #[error("no text provided")]
    InvalidInput,
    #[error("text has {chars} characters, limit is {max}")]
    PayloadTooLarge { chars: usize, max: usize },
    #[error("summarization cancelled")]
    Cancelled,
}
