//! Adapter implementations for follow-up ports.

pub mod memory;

pub use memory::{InMemoryEmployeeDirectory, InMemoryTaskRepository};
