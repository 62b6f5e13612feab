pub mod config;
pub mod telemetry;
pub mod types;

pub use config::{AppConfig, SummarizerLimits};
pub use types::{Summary, SummaryMethod};
