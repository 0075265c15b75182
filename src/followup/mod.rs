//! Follow-up task management for Canvass.
//!
//! This module covers the per-lead task engine: creating follow-up
//! tasks, moving them through their status lifecycle with completion
//! bookkeeping, saving notes, and the chaining rule that completes a
//! task while spawning its successor. The module follows hexagonal
//! architecture:
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
