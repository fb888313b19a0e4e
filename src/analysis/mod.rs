//! Request validation, the analysis pipeline and score aggregation.

pub mod aggregator;
pub mod pipeline;
pub mod validator;

pub use aggregator::aggregate;
pub use pipeline::SentimentPipeline;
pub use validator::{is_json_content_type, validate};
