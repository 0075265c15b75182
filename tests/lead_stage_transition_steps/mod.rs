//! Step definitions for lead stage transition scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
