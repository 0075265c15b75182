//! Port contracts for the lead pipeline.
//!
//! Ports define infrastructure-agnostic interfaces used by lead services.

pub mod repository;

pub use repository::{LeadRepository, LeadRepositoryError, LeadRepositoryResult};
