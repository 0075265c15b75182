//! Service layer for the follow-up task lifecycle.
//!
//! Owns task creation, status bookkeeping, notes, deletion, and the
//! chaining rule: saving notes on a task may complete it and spawn its
//! successor in one operation.

use crate::followup::{
    domain::{self, FollowUpTask, Subject, TaskDomainError, TaskId, TaskStatus},
    ports::{
        DirectoryError, EmployeeDirectory, TaskRepository, TaskRepositoryError, default_assignee,
    },
};
use crate::lead::{
    domain::LeadId,
    ports::{LeadRepository, LeadRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a follow-up task on a lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    lead_id: LeadId,
    subject: String,
    due_date: Option<NaiveDate>,
}

impl CreateTaskRequest {
    /// Creates a request for the given lead and raw subject.
    #[must_use]
    pub fn new(lead_id: LeadId, subject: impl Into<String>) -> Self {
        Self {
            lead_id,
            subject: subject.into(),
            due_date: None,
        }
    }

    /// Sets the due date of the new task.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Request payload for saving notes and chaining a successor task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainRequest {
    task_id: TaskId,
    description: String,
    follow_up_subject: Option<String>,
    follow_up_due_date: Option<NaiveDate>,
}

impl ChainRequest {
    /// Creates a request carrying the notes to save.
    #[must_use]
    pub fn new(task_id: TaskId, description: impl Into<String>) -> Self {
        Self {
            task_id,
            description: description.into(),
            follow_up_subject: None,
            follow_up_due_date: None,
        }
    }

    /// Sets the subject of the successor task. Without it the successor
    /// is titled "Follow up".
    #[must_use]
    pub fn with_follow_up_subject(mut self, subject: impl Into<String>) -> Self {
        self.follow_up_subject = Some(subject.into());
        self
    }

    /// Sets the successor's due date. A chain request without a due date
    /// completes the current task and spawns nothing.
    #[must_use]
    pub const fn with_follow_up_due_date(mut self, due_date: NaiveDate) -> Self {
        self.follow_up_due_date = Some(due_date);
        self
    }
}

/// Result of a chaining operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainOutcome {
    /// The task whose notes were saved and which is now completed.
    pub updated: FollowUpTask,
    /// The successor task, present when a follow-up due date was given.
    pub spawned: Option<FollowUpTask>,
}

/// Service-level errors for follow-up task operations.
#[derive(Debug, Error)]
pub enum FollowUpError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// Lead store operation failed.
    #[error(transparent)]
    Lead(#[from] LeadRepositoryError),
    /// Employee directory lookup failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

/// Result type for follow-up service operations.
pub type FollowUpResult<T> = Result<T, FollowUpError>;

/// Follow-up task orchestration service.
///
/// All validation happens before any write, so a rejected operation
/// leaves every stored task and lead unchanged. The chaining operation
/// issues two independent writes (complete the current task, store the
/// successor); no cross-entity transaction is assumed.
#[derive(Clone)]
pub struct FollowUpService<T, L, D, C>
where
    T: TaskRepository,
    L: LeadRepository,
    D: EmployeeDirectory,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    leads: Arc<L>,
    directory: Arc<D>,
    clock: Arc<C>,
}

impl<T, L, D, C> FollowUpService<T, L, D, C>
where
    T: TaskRepository,
    L: LeadRepository,
    D: EmployeeDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a new follow-up service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, leads: Arc<L>, directory: Arc<D>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            leads,
            directory,
            clock,
        }
    }

    /// Creates a task on the given lead.
    ///
    /// The new task starts not-started at normal priority; its assignee
    /// is the lead's owner as the employee directory knows them, or the
    /// unassigned sentinel on a directory miss.
    ///
    /// # Errors
    ///
    /// Returns [`FollowUpError::Domain`] when the subject is empty after
    /// trimming, [`FollowUpError::Lead`] when the lead does not exist,
    /// and [`FollowUpError::Directory`] when the lookup fails. No task is
    /// stored on any failure.
    pub async fn create_task(&self, request: CreateTaskRequest) -> FollowUpResult<FollowUpTask> {
        let subject = Subject::new(request.subject)?;
        let lead = self
            .leads
            .find_by_id(request.lead_id)
            .await?
            .ok_or(LeadRepositoryError::NotFound(request.lead_id))?;
        let assignee = default_assignee(self.directory.as_ref(), lead.owner()).await?;
        let mut task = FollowUpTask::new(lead.id(), subject, assignee, self.clock.as_ref());
        if let Some(due_date) = request.due_date {
            task = task.with_due_date(due_date);
        }
        self.tasks.store(&task).await?;
        Ok(task)
    }

    /// Moves a task to the given status and persists the result.
    ///
    /// Entering the completed status stamps today's date on the task;
    /// leaving it clears the date. Every transition is permitted.
    ///
    /// # Errors
    ///
    /// Returns [`FollowUpError::Repository`] when the task does not exist
    /// or the store rejects the write.
    pub async fn set_status(
        &self,
        task_id: TaskId,
        status: TaskStatus,
    ) -> FollowUpResult<FollowUpTask> {
        let mut task = self.find_task(task_id).await?;
        task.set_status(status, self.clock.as_ref());
        self.tasks.update(&task).await?;
        Ok(task)
    }

    /// Overwrites a task's notes without touching its status.
    ///
    /// # Errors
    ///
    /// Returns [`FollowUpError::Repository`] when the task does not exist
    /// or the store rejects the write.
    pub async fn save_notes(
        &self,
        task_id: TaskId,
        description: impl Into<String> + Send,
    ) -> FollowUpResult<FollowUpTask> {
        let mut task = self.find_task(task_id).await?;
        task.save_notes(description);
        self.tasks.update(&task).await?;
        Ok(task)
    }

    /// Saves notes, completes the task, and optionally spawns its
    /// successor.
    ///
    /// The current task's notes are overwritten and its status forced to
    /// completed with today's date, whatever it was before. When the
    /// request carries a follow-up due date, one successor task is
    /// created on the same lead: not-started, subject from the request or
    /// "Follow up", assignee resolved exactly as in
    /// [`Self::create_task`]. Without a due date nothing is spawned.
    ///
    /// This is the only path through which a task spawns another task.
    /// Successions are unbounded and carry no explicit chain link beyond
    /// creation order.
    ///
    /// # Errors
    ///
    /// Returns [`FollowUpError::Domain`] when a supplied follow-up
    /// subject is empty after trimming and [`FollowUpError::Repository`]
    /// or [`FollowUpError::Lead`] on store failures. Validation precedes
    /// every write.
    pub async fn save_notes_and_chain(
        &self,
        request: ChainRequest,
    ) -> FollowUpResult<ChainOutcome> {
        let mut task = self.find_task(request.task_id).await?;

        // Resolve everything the successor needs before the first write.
        let plan = self
            .successor_plan(
                task.lead_id(),
                request.follow_up_subject,
                request.follow_up_due_date,
            )
            .await?;

        task.save_notes(request.description);
        task.complete(self.clock.as_ref());
        self.tasks.update(&task).await?;

        let mut spawned = None;
        if let Some(next) = plan {
            let successor =
                FollowUpTask::new(task.lead_id(), next.subject, next.assignee, self.clock.as_ref())
                    .with_due_date(next.due_date);
            self.tasks.store(&successor).await?;
            spawned = Some(successor);
        }

        Ok(ChainOutcome {
            updated: task,
            spawned,
        })
    }

    /// Removes a task permanently. Deletion has no effect beyond the
    /// task's own lifecycle.
    ///
    /// # Errors
    ///
    /// Returns [`FollowUpError::Repository`] when the task does not
    /// exist.
    pub async fn delete_task(&self, task_id: TaskId) -> FollowUpResult<()> {
        self.tasks.delete(task_id).await?;
        Ok(())
    }

    /// Returns a lead's tasks in creation order, optionally narrowed to
    /// one status. `None` lists every task.
    ///
    /// # Errors
    ///
    /// Returns [`FollowUpError::Repository`] when the store fails.
    pub async fn list_tasks(
        &self,
        lead_id: LeadId,
        status: Option<TaskStatus>,
    ) -> FollowUpResult<Vec<FollowUpTask>> {
        let tasks = self.tasks.list_for_lead(lead_id).await?;
        Ok(domain::filter_by_status(tasks, status))
    }

    async fn find_task(&self, task_id: TaskId) -> FollowUpResult<FollowUpTask> {
        Ok(self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TaskRepositoryError::NotFound(task_id))?)
    }

    /// Validates and gathers the successor's attributes, without writing.
    ///
    /// No due date means no successor. A supplied subject must survive
    /// validation; an absent one falls back to "Follow up".
    async fn successor_plan(
        &self,
        lead_id: LeadId,
        raw_subject: Option<String>,
        due: Option<NaiveDate>,
    ) -> FollowUpResult<Option<SuccessorPlan>> {
        let Some(due_date) = due else {
            return Ok(None);
        };
        let subject = raw_subject.map_or_else(|| Ok(Subject::follow_up()), Subject::new)?;
        let lead = self
            .leads
            .find_by_id(lead_id)
            .await?
            .ok_or(LeadRepositoryError::NotFound(lead_id))?;
        let assignee = default_assignee(self.directory.as_ref(), lead.owner()).await?;
        Ok(Some(SuccessorPlan {
            subject,
            due_date,
            assignee,
        }))
    }
}

/// Everything a chained successor needs, resolved before any write.
struct SuccessorPlan {
    subject: Subject,
    due_date: NaiveDate,
    assignee: String,
}
