//! Port contracts for the follow-up task engine.
//!
//! Ports define infrastructure-agnostic interfaces used by follow-up
//! services: task persistence and the read-only employee directory.

pub mod directory;
pub mod repository;

pub use directory::{DirectoryError, DirectoryResult, EmployeeDirectory, default_assignee};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
