//! Persistence adapters for the lead pipeline.
//!
//! Concrete implementations of the [`LeadRepository`] port. The domain
//! stays pure; adapters own every storage concern.
//!
//! [`LeadRepository`]: crate::lead::ports::LeadRepository

pub mod memory;

pub use memory::InMemoryLeadRepository;
