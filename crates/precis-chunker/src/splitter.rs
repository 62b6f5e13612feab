//! Sentence segmentation.
//!
//! Boundaries follow UAX #29, so the splitter is script-aware without any
//! downloaded model data. Line and paragraph breaks also end a sentence.

use unicode_segmentation::UnicodeSegmentation;

/// Segments raw text into an ordered sequence of sentence strings.
pub trait SentenceSplitter: Send + Sync {
    fn split(&self, text: &str) -> Vec<String>;
}

#[derive(Debug, thiserror::Error)]
pub enum SplitterError {
    #[error("sentence splitter self-check failed: expected {expected} sentences, got {actual}")]
    SelfCheck { expected: usize, actual: usize },
}

const PROBE_TEXT: &str = "The first sentence ends here. A second one follows! Does a third exist?";
const PROBE_SENTENCES: usize = 3;

/// UAX #29 sentence splitter.
///
/// Segments without a single alphanumeric character (stray punctuation,
/// symbol runs) are not sentences and are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSentenceSplitter;

impl UnicodeSentenceSplitter {
    pub fn new() -> Self {
        Self
    }

    /// Run a fixed probe text through the splitter.
    ///
    /// Intended to be called once during process startup.
    pub fn verify(&self) -> Result<(), SplitterError> {
        let actual = self.split(PROBE_TEXT).len();
        if actual != PROBE_SENTENCES {
            return Err(SplitterError::SelfCheck {
                expected: PROBE_SENTENCES,
                actual,
            });
        }
        Ok(())
    }
}

impl SentenceSplitter for UnicodeSentenceSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        text.split_sentence_bounds()
            .map(str::trim)
            .filter(|s| s.chars().any(char::is_alphanumeric))
            .map(String::from)
            .collect()
    }
}
