//! Service layer for pipeline stage transitions.

use crate::lead::{
    domain::{ClosedReason, Lead, LeadDomainError, LeadId, Stage, StageKind},
    ports::{LeadRepository, LeadRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for moving a lead to another pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRequest {
    lead_id: LeadId,
    target: StageKind,
    closed_reason: Option<ClosedReason>,
    closed_note: Option<String>,
}

impl TransitionRequest {
    /// Creates a request targeting the given stage.
    #[must_use]
    pub const fn new(lead_id: LeadId, target: StageKind) -> Self {
        Self {
            lead_id,
            target,
            closed_reason: None,
            closed_note: None,
        }
    }

    /// Sets the closed reason; required when targeting the closed stage.
    #[must_use]
    pub const fn with_closed_reason(mut self, reason: ClosedReason) -> Self {
        self.closed_reason = Some(reason);
        self
    }

    /// Sets the justification note; required for lost closed reasons.
    #[must_use]
    pub fn with_closed_note(mut self, note: impl Into<String>) -> Self {
        self.closed_note = Some(note.into());
        self
    }
}

/// Service-level errors for pipeline operations.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] LeadDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] LeadRepositoryError),
}

/// Result type for pipeline service operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Stage transition orchestration service.
///
/// Transition inputs are resolved and validated in the domain before the
/// stored lead is touched, so a rejected transition never reaches the
/// lead store.
#[derive(Clone)]
pub struct PipelineService<R>
where
    R: LeadRepository,
{
    repository: Arc<R>,
}

impl<R> PipelineService<R>
where
    R: LeadRepository,
{
    /// Creates a new pipeline service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Moves a lead to the requested stage and persists the result.
    ///
    /// Any of the four stages may be targeted from any other; moving away
    /// from the closed stage clears the recorded outcome, and re-running
    /// an identical transition yields the same stored state.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Domain`] when the closed-stage inputs are
    /// incomplete, and [`PipelineError::Repository`] when the lead does
    /// not exist or the store rejects the write.
    pub async fn transition(&self, request: TransitionRequest) -> PipelineResult<Lead> {
        let stage = Stage::resolve(
            request.target,
            request.closed_reason,
            request.closed_note.as_deref(),
        )?;
        let mut lead = self
            .repository
            .find_by_id(request.lead_id)
            .await?
            .ok_or(LeadRepositoryError::NotFound(request.lead_id))?;
        lead.set_stage(stage);
        self.repository.update(&lead).await?;
        Ok(lead)
    }
}
