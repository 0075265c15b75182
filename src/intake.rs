//! Lead intake and removal workflows.
//!
//! Registering a lead is an explicit two-step workflow: store the lead,
//! then store its seed follow-up task. The steps are independent writes
//! that can be tested and can fail separately; nothing is hidden inside
//! a constructor. Removal is the mirror image: delete the lead, then
//! cascade-delete its tasks.

use crate::followup::{
    domain::{FollowUpTask, Subject},
    ports::{
        DirectoryError, EmployeeDirectory, TaskRepository, TaskRepositoryError, default_assignee,
    },
};
use crate::lead::{
    domain::{
        ClientName, ContactChannels, Lead, LeadDetails, LeadDomainError, LeadId, LeadSource,
        LeadSubSource, OwnerName, PostalAddress,
    },
    ports::{LeadRepository, LeadRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for registering a new lead.
///
/// Names arrive as raw caller input and are validated during
/// registration; provenance is already typed because callers choose it
/// from the fixed source lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLeadRequest {
    client_name: String,
    owner: String,
    source: LeadSource,
    sub_source: Option<LeadSubSource>,
    contact: ContactChannels,
    address: PostalAddress,
    profession: Option<String>,
    desired_service: String,
    discussion_notes: String,
    comment: String,
}

impl NewLeadRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(
        client_name: impl Into<String>,
        owner: impl Into<String>,
        source: LeadSource,
    ) -> Self {
        Self {
            client_name: client_name.into(),
            owner: owner.into(),
            source,
            sub_source: None,
            contact: ContactChannels::empty(),
            address: PostalAddress::empty(),
            profession: None,
            desired_service: String::new(),
            discussion_notes: String::new(),
            comment: String::new(),
        }
    }

    /// Sets the provenance sub-source.
    #[must_use]
    pub const fn with_sub_source(mut self, sub_source: LeadSubSource) -> Self {
        self.sub_source = Some(sub_source);
        self
    }

    /// Sets the contact channels.
    #[must_use]
    pub fn with_contact(mut self, contact: ContactChannels) -> Self {
        self.contact = contact;
        self
    }

    /// Sets the postal address.
    #[must_use]
    pub fn with_address(mut self, address: PostalAddress) -> Self {
        self.address = address;
        self
    }

    /// Sets the client's profession.
    #[must_use]
    pub fn with_profession(mut self, profession: impl Into<String>) -> Self {
        self.profession = Some(profession.into());
        self
    }

    /// Sets the service the client asked about.
    #[must_use]
    pub fn with_desired_service(mut self, desired_service: impl Into<String>) -> Self {
        self.desired_service = desired_service.into();
        self
    }

    /// Sets the initial discussion notes.
    #[must_use]
    pub fn with_discussion_notes(mut self, discussion_notes: impl Into<String>) -> Self {
        self.discussion_notes = discussion_notes.into();
        self
    }

    /// Sets the free-form comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

/// Service-level errors for intake operations.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] LeadDomainError),
    /// Lead store operation failed.
    #[error(transparent)]
    Lead(#[from] LeadRepositoryError),
    /// Task repository operation failed.
    #[error(transparent)]
    Task(#[from] TaskRepositoryError),
    /// Employee directory lookup failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

/// Result type for intake operations.
pub type IntakeResult<T> = Result<T, IntakeError>;

/// Lead intake orchestration service.
#[derive(Clone)]
pub struct IntakeService<L, T, D, C>
where
    L: LeadRepository,
    T: TaskRepository,
    D: EmployeeDirectory,
    C: Clock + Send + Sync,
{
    leads: Arc<L>,
    tasks: Arc<T>,
    directory: Arc<D>,
    clock: Arc<C>,
}

impl<L, T, D, C> IntakeService<L, T, D, C>
where
    L: LeadRepository,
    T: TaskRepository,
    D: EmployeeDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a new intake service.
    #[must_use]
    pub const fn new(leads: Arc<L>, tasks: Arc<T>, directory: Arc<D>, clock: Arc<C>) -> Self {
        Self {
            leads,
            tasks,
            directory,
            clock,
        }
    }

    /// Registers a lead and its seed follow-up task.
    ///
    /// The lead opens in the `New` stage. The seed task is titled
    /// "Follow up call", starts not-started, and is assigned to the
    /// lead's owner as the employee directory knows them, or to the
    /// unassigned sentinel on a directory miss.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Domain`] when the client or owner name is
    /// empty after trimming; nothing is stored in that case. Store
    /// failures surface as [`IntakeError::Lead`] or [`IntakeError::Task`]
    /// depending on which of the two writes failed.
    pub async fn register(&self, request: NewLeadRequest) -> IntakeResult<(Lead, FollowUpTask)> {
        let client_name = ClientName::new(request.client_name)?;
        let owner = OwnerName::new(request.owner)?;
        let mut details = LeadDetails::new(client_name, owner, request.source)
            .with_contact(request.contact)
            .with_address(request.address)
            .with_desired_service(request.desired_service)
            .with_discussion_notes(request.discussion_notes)
            .with_comment(request.comment);
        if let Some(sub_source) = request.sub_source {
            details = details.with_sub_source(sub_source);
        }
        if let Some(profession) = request.profession {
            details = details.with_profession(profession);
        }

        let lead = Lead::new(details, self.clock.as_ref());
        self.leads.store(&lead).await?;

        let assignee = default_assignee(self.directory.as_ref(), lead.owner()).await?;
        let seed = FollowUpTask::new(
            lead.id(),
            Subject::follow_up_call(),
            assignee,
            self.clock.as_ref(),
        );
        self.tasks.store(&seed).await?;

        Ok((lead, seed))
    }

    /// Removes a lead and every task that belonged to it, returning the
    /// number of tasks removed. Removal is irreversible and cascades to
    /// nothing else.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Lead`] when the lead does not exist; its
    /// tasks are left untouched in that case.
    pub async fn remove(&self, lead_id: LeadId) -> IntakeResult<usize> {
        self.leads.delete(lead_id).await?;
        let removed = self.tasks.delete_for_lead(lead_id).await?;
        Ok(removed)
    }
}
