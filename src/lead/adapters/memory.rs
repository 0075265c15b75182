//! In-memory lead repository.
//!
//! Thread-safe lead store used by unit tests and by deployments that keep
//! the lead book in process memory. Filtering and pagination delegate to
//! the pure query layer so the port and the in-process algorithm cannot
//! drift apart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::lead::{
    domain::{self, Lead, LeadFilter, LeadId, OwnerName, Page, PageRequest},
    ports::{LeadRepository, LeadRepositoryError, LeadRepositoryResult},
};

/// Thread-safe in-memory lead repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLeadRepository {
    state: Arc<RwLock<InMemoryLeadState>>,
}

#[derive(Debug, Default)]
struct InMemoryLeadState {
    leads: HashMap<LeadId, Lead>,
    // Creation order, so list and query results are stable.
    order: Vec<LeadId>,
}

impl InMemoryLeadState {
    fn snapshot(&self) -> Vec<Lead> {
        self.order
            .iter()
            .filter_map(|id| self.leads.get(id).cloned())
            .collect()
    }
}

impl InMemoryLeadRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LeadRepository for InMemoryLeadRepository {
    async fn store(&self, lead: &Lead) -> LeadRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            LeadRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.leads.contains_key(&lead.id()) {
            return Err(LeadRepositoryError::DuplicateLead(lead.id()));
        }
        state.order.push(lead.id());
        state.leads.insert(lead.id(), lead.clone());
        Ok(())
    }

    async fn update(&self, lead: &Lead) -> LeadRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            LeadRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.leads.contains_key(&lead.id()) {
            return Err(LeadRepositoryError::NotFound(lead.id()));
        }
        state.leads.insert(lead.id(), lead.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: LeadId) -> LeadRepositoryResult<Option<Lead>> {
        let state = self.state.read().map_err(|err| {
            LeadRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.leads.get(&id).cloned())
    }

    async fn delete(&self, id: LeadId) -> LeadRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            LeadRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.leads.remove(&id).is_none() {
            return Err(LeadRepositoryError::NotFound(id));
        }
        state.order.retain(|ordered| *ordered != id);
        Ok(())
    }

    async fn list_all(&self) -> LeadRepositoryResult<Vec<Lead>> {
        let state = self.state.read().map_err(|err| {
            LeadRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.snapshot())
    }

    async fn query(
        &self,
        filter: &LeadFilter,
        page: PageRequest,
    ) -> LeadRepositoryResult<Page<Lead>> {
        let state = self.state.read().map_err(|err| {
            LeadRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let matching: Vec<Lead> = state
            .snapshot()
            .into_iter()
            .filter(|lead| filter.matches(lead))
            .collect();
        Ok(domain::paginate(&matching, page))
    }

    async fn distinct_owners(&self) -> LeadRepositoryResult<Vec<OwnerName>> {
        let state = self.state.read().map_err(|err| {
            LeadRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(domain::distinct_owners(&state.snapshot()))
    }
}
