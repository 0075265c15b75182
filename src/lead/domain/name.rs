//! Validated name types for the lead domain.

use super::LeadDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated, non-empty client name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientName(String);

impl ClientName {
    /// Creates a validated client name.
    ///
    /// The input is trimmed before the emptiness check and before storage.
    ///
    /// # Errors
    ///
    /// Returns [`LeadDomainError::EmptyClientName`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, LeadDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LeadDomainError::EmptyClientName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ClientName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ClientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated, non-empty lead owner name.
///
/// The owner references an entry in the external employee directory by
/// name only; the reference is soft and never enforced as a foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerName(String);

impl OwnerName {
    /// Creates a validated owner name.
    ///
    /// The input is trimmed before the emptiness check and before storage.
    ///
    /// # Errors
    ///
    /// Returns [`LeadDomainError::EmptyOwnerName`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, LeadDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LeadDomainError::EmptyOwnerName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for OwnerName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for OwnerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
