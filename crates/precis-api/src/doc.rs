use utoipa::OpenApi;

use crate::routes::{health, root, summarize};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Precis API",
        description = "Extractive summarization of long plain-text documents.",
    ),
    tags(
        (name = "Summarize", description = "Chunked LexRank summarization with graceful fallback"),
        (name = "Health", description = "Liveness, splitter status and configured limits"),
    ),
    paths(
        root::root,
        health::health,
        summarize::summarize,
    ),
    components(schemas(
        root::RootResponse,
        health::HealthResponse,
        health::HealthLimits,
        summarize::SummarizeRequest,
        precis_common::Summary,
        precis_common::SummaryMethod,
    ))
)]
pub struct ApiDoc;
