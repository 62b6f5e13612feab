//! The chunk → summarize → recombine → summarize pipeline.

pub mod budget;
pub mod ordering;
pub mod pipeline;
pub mod trim;

pub use budget::BudgetEstimator;
pub use ordering::order_by_origin;
pub use pipeline::{PipelineError, SummarizationPipeline};
pub use trim::trim_to_words;
