//! In-memory employee directory.

use async_trait::async_trait;
use std::collections::HashSet;

use crate::followup::ports::{DirectoryResult, EmployeeDirectory};
use crate::lead::domain::OwnerName;

/// Employee directory backed by a fixed set of names.
///
/// Lead owners are soft references: a lookup answers with the matching
/// name when the directory knows it and `None` otherwise. The directory
/// is seeded at construction and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeDirectory {
    names: HashSet<String>,
}

impl InMemoryEmployeeDirectory {
    /// Creates a directory containing the given employee names.
    #[must_use]
    pub fn with_names<I, N>(names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl EmployeeDirectory for InMemoryEmployeeDirectory {
    async fn employee_name(&self, owner: &OwnerName) -> DirectoryResult<Option<String>> {
        Ok(self
            .names
            .contains(owner.as_str())
            .then(|| owner.as_str().to_owned()))
    }
}
