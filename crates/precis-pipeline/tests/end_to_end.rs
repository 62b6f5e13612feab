//! End-to-end summarization scenarios.

use std::sync::Arc;

use precis_chunker::{SentenceSplitter, UnicodeSentenceSplitter};
use precis_common::{SummarizerLimits, SummaryMethod};
use precis_pipeline::{PipelineError, SummarizationPipeline};

const SUBJECTS: &[&str] = &[
    "The city council",
    "Local farmers",
    "Independent researchers",
    "The regional hospital",
    "Volunteer firefighters",
    "Several small businesses",
];

const ACTIONS: &[&str] = &[
    "reported steady progress on the new water treatment project",
    "raised concerns about rising costs for seasonal equipment",
    "published detailed findings on drought resilience in the valley",
    "expanded evening clinics to reduce waiting times for patients",
    "trained new recruits in wildfire prevention and rapid response",
    "joined a shared program to lower energy bills through solar panels",
    "requested clearer guidance on permits for rebuilding damaged roads",
];

const CLOSINGS: &[&str] = &[
    "during the spring meeting",
    "after months of careful review",
    "despite a tight annual budget",
    "with support from neighbouring towns",
    "ahead of the busy summer season",
];

/// A deterministic multi-paragraph article of roughly `words` words.
fn article(words: usize) -> String {
    let mut paragraphs = Vec::new();
    let mut paragraph = Vec::new();
    let mut count = 0;
    let mut i = 0;

    while count < words {
        let sentence = format!(
            "{} {} {} in year {}.",
            SUBJECTS[i % SUBJECTS.len()],
            ACTIONS[(i * 3) % ACTIONS.len()],
            CLOSINGS[(i * 2) % CLOSINGS.len()],
            2000 + i
        );
        count += sentence.split_whitespace().count();
        paragraph.push(sentence);
        if paragraph.len() == 6 {
            paragraphs.push(paragraph.join(" "));
            paragraph.clear();
        }
        i += 1;
    }
    if !paragraph.is_empty() {
        paragraphs.push(paragraph.join(" "));
    }

    paragraphs.join("\n\n")
}

fn pipeline(limits: SummarizerLimits) -> SummarizationPipeline {
    SummarizationPipeline::new(limits, Arc::new(UnicodeSentenceSplitter::new()))
}

#[test]
fn test_short_paragraph_returned_unchanged() {
    let text = "Rivers shape the land over thousands of years as water carries sediment downstream. \
                Floods deposit rich soil across wide plains that farmers have relied on for generations. \
                Dams now control many rivers, changing how sediment moves and where it settles.";
    assert_eq!(text.split_whitespace().count(), 40);

    let summary = pipeline(SummarizerLimits::default()).summarize(text, Some(50)).unwrap();
    assert_eq!(summary.method, SummaryMethod::Original);
    assert_eq!(summary.summary, text);
    assert_eq!(summary.word_count, 40);
}

#[test]
fn test_long_article_summarized_near_target() {
    let text = article(1500);
    let summary = pipeline(SummarizerLimits::default()).summarize(&text, Some(100)).unwrap();

    assert_eq!(summary.method, SummaryMethod::ChunkedLexrank);
    assert!(summary.word_count <= 130, "word_count = {}", summary.word_count);
    assert!(summary.word_count >= 50, "word_count = {}", summary.word_count);

    // Extractive: every sentence of the summary exists in the article.
    let splitter = UnicodeSentenceSplitter::new();
    for sentence in splitter.split(&summary.summary) {
        assert!(text.contains(&sentence), "not extractive: {sentence}");
    }
}

#[test]
fn test_long_article_across_many_chunks() {
    let limits = SummarizerLimits {
        chunk_char_target: 1_000,
        ..SummarizerLimits::default()
    };
    let text = article(1500);
    let summary = pipeline(limits).summarize(&text, Some(100)).unwrap();

    assert_eq!(summary.method, SummaryMethod::ChunkedLexrank);
    assert!(summary.word_count <= 130);

    let splitter = UnicodeSentenceSplitter::new();
    let offsets: Vec<usize> = splitter
        .split(&summary.summary)
        .iter()
        .map(|s| text.find(s.as_str()).expect("sentence comes from the article"))
        .collect();
    assert!(offsets.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_oversized_input_rejected_before_work() {
    let text = "All work and no play makes a dull summary. ".repeat(6_000);
    assert!(text.trim().chars().count() > 250_000);

    let err = pipeline(SummarizerLimits::default()).summarize(&text, Some(100)).unwrap_err();
    assert!(matches!(err, PipelineError::PayloadTooLarge { max: 200_000, .. }));
}

#[test]
fn test_text_without_sentences_falls_back() {
    let text = "→ ← ↑ ↓ ".repeat(120);
    let summary = pipeline(SummarizerLimits::default()).summarize(&text, Some(30)).unwrap();
    assert_eq!(summary.method, SummaryMethod::FallbackFirstSents);
    assert!(summary.word_count <= 60);
}
