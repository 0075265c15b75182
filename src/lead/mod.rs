//! Lead pipeline management for Canvass.
//!
//! This module covers the lead book and the pipeline engine: capturing
//! and editing lead records, enforcing the stage state machine with its
//! closed-outcome sub-states, and computing the filtered, paginated list
//! views consumed by displays. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
