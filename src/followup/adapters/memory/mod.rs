//! In-memory adapters for the follow-up task engine.

pub mod directory;
pub mod task;

pub use directory::InMemoryEmployeeDirectory;
pub use task::InMemoryTaskRepository;
