//! Step definitions for follow-up task chaining scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
