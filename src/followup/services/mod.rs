//! Application services for the follow-up task engine.

mod lifecycle;

pub use lifecycle::{
    ChainOutcome, ChainRequest, CreateTaskRequest, FollowUpError, FollowUpResult, FollowUpService,
};
