use serde::Serialize;
use std::fmt;

/// Which path through the pipeline produced a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SummaryMethod {
    /// Input was already short enough and is returned verbatim.
    Original,
    /// Single-pass extractive summary. Kept as a wire value for clients.
    ExtractiveLexrank,
    ChunkedLexrank,
    /// The recombined partial summaries had no sentences left.
    FallbackFirstSents,
}

impl fmt::Display for SummaryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryMethod::Original => write!(f, "original"),
            SummaryMethod::ExtractiveLexrank => write!(f, "extractive-lexrank"),
            SummaryMethod::ChunkedLexrank => write!(f, "chunked-lexrank"),
            SummaryMethod::FallbackFirstSents => write!(f, "fallback-first-sents"),
        }
    }
}

/// The result of summarizing one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct Summary {
    pub summary: String,
    pub word_count: usize,
    pub method: SummaryMethod,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_wire_names() {
        let json = serde_json::to_string(&SummaryMethod::FallbackFirstSents).unwrap();
        assert_eq!(json, "\"fallback-first-sents\"");

        for method in [
            SummaryMethod::Original,
            SummaryMethod::ExtractiveLexrank,
            SummaryMethod::ChunkedLexrank,
            SummaryMethod::FallbackFirstSents,
        ] {
            let wire = serde_json::to_string(&method).unwrap();
            assert_eq!(wire.trim_matches('"'), method.to_string());
        }
    }
}
