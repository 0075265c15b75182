//! Shared world state for follow-up task chaining BDD scenarios.

use std::sync::Arc;

use canvass::followup::{
    adapters::memory::{InMemoryEmployeeDirectory, InMemoryTaskRepository},
    domain::FollowUpTask,
    services::{ChainOutcome, FollowUpError, FollowUpService},
};
use canvass::lead::{adapters::memory::InMemoryLeadRepository, domain::Lead};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestFollowUpService = FollowUpService<
    InMemoryTaskRepository,
    InMemoryLeadRepository,
    InMemoryEmployeeDirectory,
    DefaultClock,
>;

/// Scenario world for task chaining behaviour tests.
pub struct TaskChainingWorld {
    pub tasks: Arc<InMemoryTaskRepository>,
    pub leads: Arc<InMemoryLeadRepository>,
    pub service: TestFollowUpService,
    pub current_lead: Option<Lead>,
    pub current_task: Option<FollowUpTask>,
    pub last_outcome: Option<Result<ChainOutcome, FollowUpError>>,
}

impl TaskChainingWorld {
    /// Creates a world whose directory knows one employee, Jane Rahman.
    #[must_use]
    pub fn new() -> Self {
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let leads = Arc::new(InMemoryLeadRepository::new());
        let directory = Arc::new(InMemoryEmployeeDirectory::with_names(["Jane Rahman"]));
        let service = FollowUpService::new(
            Arc::clone(&tasks),
            Arc::clone(&leads),
            directory,
            Arc::new(DefaultClock),
        );

        Self {
            tasks,
            leads,
            service,
            current_lead: None,
            current_task: None,
            last_outcome: None,
        }
    }
}

impl Default for TaskChainingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskChainingWorld {
    TaskChainingWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
