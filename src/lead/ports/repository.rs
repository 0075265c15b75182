//! Repository port for lead persistence and filtered list queries.
//!
//! This contract is the lead store consumed by the pipeline engine, the
//! follow-up task engine, and list displays. Implementations own nothing
//! beyond storage: validation happens in the domain before any write.

use crate::lead::domain::{Lead, LeadFilter, LeadId, OwnerName, Page, PageRequest};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for lead repository operations.
pub type LeadRepositoryResult<T> = Result<T, LeadRepositoryError>;

/// Lead persistence contract.
#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// Stores a new lead.
    ///
    /// # Errors
    ///
    /// Returns [`LeadRepositoryError::DuplicateLead`] when the lead ID
    /// already exists.
    async fn store(&self, lead: &Lead) -> LeadRepositoryResult<()>;

    /// Persists changes to an existing lead (stage, contact and sales
    /// attributes).
    ///
    /// # Errors
    ///
    /// Returns [`LeadRepositoryError::NotFound`] when the lead does not
    /// exist.
    async fn update(&self, lead: &Lead) -> LeadRepositoryResult<()>;

    /// Finds a lead by identifier.
    ///
    /// Returns `None` when the lead does not exist.
    async fn find_by_id(&self, id: LeadId) -> LeadRepositoryResult<Option<Lead>>;

    /// Removes a lead permanently.
    ///
    /// Removal of the lead's tasks is a separate write owned by the
    /// intake workflow, not by this store.
    ///
    /// # Errors
    ///
    /// Returns [`LeadRepositoryError::NotFound`] when the lead does not
    /// exist.
    async fn delete(&self, id: LeadId) -> LeadRepositoryResult<()>;

    /// Returns every lead in creation order.
    async fn list_all(&self) -> LeadRepositoryResult<Vec<Lead>>;

    /// Returns one page of the filtered collection, in creation order.
    async fn query(
        &self,
        filter: &LeadFilter,
        page: PageRequest,
    ) -> LeadRepositoryResult<Page<Lead>>;

    /// Returns the distinct owners across the full, unfiltered
    /// collection, sorted lexicographically.
    async fn distinct_owners(&self) -> LeadRepositoryResult<Vec<OwnerName>>;
}

/// Errors returned by lead repository implementations.
#[derive(Debug, Clone, Error)]
pub enum LeadRepositoryError {
    /// A lead with the same identifier already exists.
    #[error("duplicate lead identifier: {0}")]
    DuplicateLead(LeadId),

    /// The lead was not found.
    #[error("lead not found: {0}")]
    NotFound(LeadId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl LeadRepositoryError {
    /// Wraps a persistence error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
