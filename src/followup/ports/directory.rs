//! Read-only port for the external employee directory.

use crate::followup::domain::UNASSIGNED;
use crate::lead::domain::OwnerName;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for directory lookups.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// External employee directory, consulted only to resolve a default task
/// assignee from a lead's owner. Never written to from this crate.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// Resolves the display name of the employee a lead owner refers to.
    ///
    /// Returns `None` when no directory entry matches; callers fall back
    /// to the unassigned sentinel.
    async fn employee_name(&self, owner: &OwnerName) -> DirectoryResult<Option<String>>;
}

/// Resolves the default assignee for a task on a lead owned by `owner`.
///
/// Directory misses resolve to the unassigned sentinel. Every
/// task-creating path defaults its assignee through this lookup.
///
/// # Errors
///
/// Returns [`DirectoryError::Lookup`] when the directory backend fails.
pub async fn default_assignee(
    directory: &impl EmployeeDirectory,
    owner: &OwnerName,
) -> DirectoryResult<String> {
    Ok(directory
        .employee_name(owner)
        .await?
        .unwrap_or_else(|| UNASSIGNED.to_owned()))
}

/// Errors returned by employee directory implementations.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// The directory backend failed to answer.
    #[error("employee directory lookup failed: {0}")]
    Lookup(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryError {
    /// Wraps a backend lookup failure.
    #[must_use]
    pub fn lookup(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Lookup(Arc::new(err))
    }
}
