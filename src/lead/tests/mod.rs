//! Unit and service tests for the lead pipeline context.
