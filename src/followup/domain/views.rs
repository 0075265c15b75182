//! Pure derived views over task collections.

use super::{FollowUpTask, TaskStatus};

/// Narrows a task collection to one status.
///
/// `None` means "all": the collection passes through unchanged. The
/// relative order of the surviving tasks is preserved.
#[must_use]
pub fn filter_by_status(
    mut tasks: Vec<FollowUpTask>,
    status: Option<TaskStatus>,
) -> Vec<FollowUpTask> {
    if let Some(wanted) = status {
        tasks.retain(|task| task.status() == wanted);
    }
    tasks
}
