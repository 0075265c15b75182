//! Follow-up task aggregate root.

use super::{Subject, TaskId, TaskPriority, TaskStatus};
use crate::lead::domain::LeadId;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Assignee recorded when no directory entry matches the lead owner.
pub const UNASSIGNED: &str = "Unassigned";

/// Follow-up task aggregate root.
///
/// A task belongs to exactly one lead. Status changes are routed through
/// [`FollowUpTask::set_status`] so the completion date always mirrors the
/// status: present exactly when the task is completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpTask {
    id: TaskId,
    lead_id: LeadId,
    subject: Subject,
    description: String,
    status: TaskStatus,
    priority: TaskPriority,
    due_date: Option<NaiveDate>,
    assigned_to: String,
    created_at: DateTime<Utc>,
    completed_date: Option<NaiveDate>,
}

impl FollowUpTask {
    /// Creates a task for the given lead.
    ///
    /// New tasks start not-started at normal priority with an empty
    /// description and no due date.
    #[must_use]
    pub fn new(
        lead_id: LeadId,
        subject: Subject,
        assigned_to: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: TaskId::new(),
            lead_id,
            subject,
            description: String::new(),
            status: TaskStatus::NotStarted,
            priority: TaskPriority::default(),
            due_date: None,
            assigned_to: assigned_to.into(),
            created_at: clock.utc(),
            completed_date: None,
        }
    }

    /// Sets the due date on a freshly created task.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the identifier of the owning lead.
    #[must_use]
    pub const fn lead_id(&self) -> LeadId {
        self.lead_id
    }

    /// Returns the task subject.
    #[must_use]
    pub const fn subject(&self) -> &Subject {
        &self.subject
    }

    /// Returns the free-text notes.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the display priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the due date, if one is set.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the assignee name.
    #[must_use]
    pub fn assigned_to(&self) -> &str {
        &self.assigned_to
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the completion date, present exactly when completed.
    #[must_use]
    pub const fn completed_date(&self) -> Option<NaiveDate> {
        self.completed_date
    }

    /// Reports whether the task is past due on the given day.
    ///
    /// Completed tasks are never overdue; tasks without a due date are
    /// never overdue; a task due today is not yet overdue.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status != TaskStatus::Completed && self.due_date.is_some_and(|due| due < today)
    }

    /// Moves the task to the given status.
    ///
    /// Any status is reachable from any other. Entering
    /// [`TaskStatus::Completed`] stamps the completion date with the
    /// clock's current day; any other target clears it.
    pub fn set_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        self.status = status;
        self.completed_date = match status {
            TaskStatus::Completed => Some(clock.utc().date_naive()),
            TaskStatus::NotStarted | TaskStatus::InProgress => None,
        };
    }

    /// Forces the task into the completed status, stamping today's date.
    pub fn complete(&mut self, clock: &impl Clock) {
        self.set_status(TaskStatus::Completed, clock);
    }

    /// Overwrites the free-text notes. Leaves the status untouched.
    pub fn save_notes(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Replaces the subject. Edited subjects are unconstrained beyond the
    /// non-empty rule [`Subject::new`] enforces.
    pub fn set_subject(&mut self, subject: Subject) {
        self.subject = subject;
    }

    /// Replaces the display priority.
    pub const fn set_priority(&mut self, priority: TaskPriority) {
        self.priority = priority;
    }

    /// Replaces or clears the due date.
    pub const fn set_due_date(&mut self, due_date: Option<NaiveDate>) {
        self.due_date = due_date;
    }

    /// Replaces the assignee name. The assignee is never re-derived from
    /// the lead owner after creation.
    pub fn set_assignee(&mut self, assigned_to: impl Into<String>) {
        self.assigned_to = assigned_to.into();
    }
}
