//! Shared world state for lead stage transition BDD scenarios.

use std::sync::Arc;

use canvass::lead::{
    adapters::memory::InMemoryLeadRepository,
    domain::Lead,
    services::{PipelineError, PipelineService},
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestPipelineService = PipelineService<InMemoryLeadRepository>;

/// Scenario world for stage transition behaviour tests.
pub struct StageTransitionWorld {
    pub repository: Arc<InMemoryLeadRepository>,
    pub service: TestPipelineService,
    pub current_lead: Option<Lead>,
    pub last_transition_result: Option<Result<Lead, PipelineError>>,
}

impl StageTransitionWorld {
    /// Creates a world with an empty lead store.
    #[must_use]
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryLeadRepository::new());
        let service = PipelineService::new(Arc::clone(&repository));

        Self {
            repository,
            service,
            current_lead: None,
            last_transition_result: None,
        }
    }
}

impl Default for StageTransitionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> StageTransitionWorld {
    StageTransitionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
