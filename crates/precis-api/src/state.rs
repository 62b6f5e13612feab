use std::sync::Arc;
use std::time::Duration;

use precis_chunker::UnicodeSentenceSplitter;
use precis_common::{AppConfig, SummarizerLimits};
use precis_pipeline::SummarizationPipeline;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<SummarizationPipeline>,
    pub limits: SummarizerLimits,
    pub request_timeout: Duration,
    /// Recorded once at startup; handlers never re-check the splitter.
    pub tokenizer_status: &'static str,
}

impl AppState {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        config.validate()?;

        let splitter = UnicodeSentenceSplitter::new();
        splitter.verify().map_err(|e| {
            tracing::error!("Sentence splitter self-check failed: {e}");
            anyhow::anyhow!("sentence splitter unavailable: {e}")
        })?;
        tracing::info!("Sentence splitter ready");

        let limits = config.limits();
        let pipeline = Arc::new(SummarizationPipeline::new(limits, Arc::new(splitter)));
        tracing::info!(
            max_input_chars = limits.max_input_chars,
            chunk_char_target = limits.chunk_char_target,
            max_sentence_count = limits.max_sentence_count,
            "Summarization pipeline configured"
        );

        Ok(Self {
            pipeline,
            limits,
            request_timeout: Duration::from_secs(config.request_timeout_secs),
            tokenizer_status: "ready",
        })
    }
}
