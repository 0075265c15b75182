//! Application services for the lead pipeline.

mod pipeline;

pub use pipeline::{PipelineError, PipelineResult, PipelineService, TransitionRequest};
