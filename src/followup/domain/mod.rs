//! Domain model for follow-up tasks.
//!
//! The follow-up domain models the per-lead task lifecycle: validated
//! subjects, the status machine with its completion-date bookkeeping,
//! and the pure status-filter view consumed by task list displays.

mod error;
mod ids;
mod status;
mod subject;
mod task;
mod views;

pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use status::{TaskPriority, TaskStatus};
pub use subject::Subject;
pub use task::{FollowUpTask, UNASSIGNED};
pub use views::filter_by_status;
