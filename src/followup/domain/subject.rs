//! Validated task subject type.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated, non-empty task subject.
///
/// New tasks draw subjects from a small vocabulary exposed as
/// constructors; edits and chained follow-ups accept any non-empty
/// string through [`Subject::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Subject(String);

impl Subject {
    /// Creates a validated subject.
    ///
    /// The input is trimmed before the emptiness check and before
    /// storage.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptySubject`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptySubject);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// The default subject of a chained follow-up task.
    #[must_use]
    pub fn follow_up() -> Self {
        Self("Follow up".to_owned())
    }

    /// The subject of the seed task created with every new lead.
    #[must_use]
    pub fn follow_up_call() -> Self {
        Self("Follow up call".to_owned())
    }

    /// The catch-all vocabulary subject.
    #[must_use]
    pub fn other() -> Self {
        Self("Other".to_owned())
    }

    /// Returns the subject as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Subject {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
