use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
    #[serde(default = "default_chunk_char_target")]
    pub chunk_char_target: usize,
    #[serde(default = "default_max_sentence_count")]
    pub max_sentence_count: usize,
    #[serde(default = "default_max_chunk_sentences")]
    pub max_chunk_sentences: usize,
    #[serde(default = "default_min_summary_words")]
    pub min_summary_words: usize,
    #[serde(default = "default_max_summary_words")]
    pub max_summary_words: usize,
    #[serde(default = "default_default_summary_words")]
    pub default_summary_words: usize,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_input_chars() -> usize {
    200_000
}

fn default_chunk_char_target() -> usize {
    45_000
}

fn default_max_sentence_count() -> usize {
    200
}

fn default_max_chunk_sentences() -> usize {
    500
}

fn default_min_summary_words() -> usize {
    30
}

fn default_max_summary_words() -> usize {
    800
}

fn default_default_summary_words() -> usize {
    200
}

fn default_request_timeout_secs() -> u64 {
    60
}

impl AppConfig {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let config: Self = config::Config::builder()
            .add_source(config::Environment::default().try_parsing(true))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make every request fail.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.min_summary_words > self.max_summary_words {
            return Err(config::ConfigError::Message(format!(
                "MIN_SUMMARY_WORDS ({}) exceeds MAX_SUMMARY_WORDS ({})",
                self.min_summary_words, self.max_summary_words
            )));
        }
        if self.max_input_chars == 0 {
            return Err(config::ConfigError::Message(
                "MAX_INPUT_CHARS must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// The read-only limits the summarization pipeline is built from.
    pub fn limits(&self) -> SummarizerLimits {
        SummarizerLimits {
            max_input_chars: self.max_input_chars,
            chunk_char_target: self.chunk_char_target,
            max_sentence_count: self.max_sentence_count,
            max_chunk_sentences: self.max_chunk_sentences,
            min_summary_words: self.min_summary_words,
            max_summary_words: self.max_summary_words,
            default_summary_words: self.default_summary_words,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_input_chars: default_max_input_chars(),
            chunk_char_target: default_chunk_char_target(),
            max_sentence_count: default_max_sentence_count(),
            max_chunk_sentences: default_max_chunk_sentences(),
            min_summary_words: default_min_summary_words(),
            max_summary_words: default_max_summary_words(),
            default_summary_words: default_default_summary_words(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Size limits and word-target bounds applied to every summarization request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummarizerLimits {
    /// Inputs longer than this many characters are rejected outright.
    pub max_input_chars: usize,
    /// Target character length of each chunk handed to the rankers.
    pub chunk_char_target: usize,
    /// Upper bound on the sentence budget requested from a ranker.
    pub max_sentence_count: usize,
    /// Upper bound on sentences per chunk, which bounds ranker memory.
    pub max_chunk_sentences: usize,
    pub min_summary_words: usize,
    pub max_summary_words: usize,
    /// Used when the caller does not ask for a word target.
    pub default_summary_words: usize,
}

impl SummarizerLimits {
    /// Resolve a requested word target into the configured range.
    ///
    /// A missing or zero request falls back to the default target.
    pub fn target_words(&self, requested: Option<i64>) -> usize {
        let requested = match requested {
            Some(n) if n != 0 => n,
            _ => self.default_summary_words as i64,
        };
        // max/min rather than clamp: never panics on an inverted range.
        requested
            .max(self.min_summary_words as i64)
            .min(self.max_summary_words as i64)
            .max(0) as usize
    }
}

impl Default for SummarizerLimits {
    fn default() -> Self {
        AppConfig::default().limits()
    }
}
