//! In-memory follow-up task repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::followup::{
    domain::{FollowUpTask, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use crate::lead::domain::LeadId;

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, FollowUpTask>,
    // Per-lead creation order, so task lists are stable.
    by_lead: HashMap<LeadId, Vec<TaskId>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &FollowUpTask) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        state.by_lead.entry(task.lead_id()).or_default().push(task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &FollowUpTask) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::NotFound(task.id()));
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<FollowUpTask>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let Some(removed) = state.tasks.remove(&id) else {
            return Err(TaskRepositoryError::NotFound(id));
        };
        if let Some(order) = state.by_lead.get_mut(&removed.lead_id()) {
            order.retain(|ordered| *ordered != id);
        }
        Ok(())
    }

    async fn list_for_lead(&self, lead_id: LeadId) -> TaskRepositoryResult<Vec<FollowUpTask>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let tasks = state
            .by_lead
            .get(&lead_id)
            .into_iter()
            .flatten()
            .filter_map(|id| state.tasks.get(id).cloned())
            .collect();
        Ok(tasks)
    }

    async fn delete_for_lead(&self, lead_id: LeadId) -> TaskRepositoryResult<usize> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let ids = state.by_lead.remove(&lead_id).unwrap_or_default();
        let mut removed = 0;
        for id in &ids {
            if state.tasks.remove(id).is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }
}
