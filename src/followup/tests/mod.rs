//! Unit and service tests for the follow-up task context.
