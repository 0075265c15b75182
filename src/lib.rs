//! Canvass: lead pipeline and follow-up task engine.
//!
//! This crate provides the core behaviour of a sales back-office for a
//! home-services marketplace: the lead-stage state machine with its
//! closed-outcome sub-states, the per-lead follow-up task lifecycle with
//! its chaining rule, and the filtered, paginated lead list queries. It
//! is a library-level contract meant to sit behind any transport; no
//! HTTP, UI, or storage technology lives here.
//!
//! # Architecture
//!
//! Canvass follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory stores)
//!
//! # Modules
//!
//! - [`lead`]: Lead records, the pipeline stage machine, and list queries
//! - [`followup`]: Per-lead task lifecycle and the chaining rule
//! - [`intake`]: Register-with-seed-task and cascading-removal workflows

pub mod followup;
pub mod intake;
pub mod lead;
