//! Error types for lead domain validation and parsing.
//!
//! Validation messages are written to be surfaced verbatim to the end
//! user; parse errors cover storage-boundary rejection of unknown
//! enumeration values.

use thiserror::Error;

/// Errors returned while constructing or mutating lead domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LeadDomainError {
    /// The client name is empty after trimming.
    #[error("Please enter a client name.")]
    EmptyClientName,

    /// The lead owner name is empty after trimming.
    #[error("Please select a lead owner.")]
    EmptyOwnerName,

    /// A lead was moved to the closed stage without a closed reason.
    #[error("Please select a closed reason.")]
    MissingClosedReason,

    /// A lost closure was attempted without a justification note.
    #[error("Please provide a reason for closing this lead as lost.")]
    EmptyLossNote,
}

/// Error returned while parsing pipeline stages from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown pipeline stage: {0}")]
pub struct ParseStageError(pub String);

/// Error returned while parsing closed reasons from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown closed reason: {0}")]
pub struct ParseClosedReasonError(pub String);

/// Error returned while parsing lead sources from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown lead source: {0}")]
pub struct ParseLeadSourceError(pub String);

/// Error returned while parsing lead sub-sources from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown lead sub-source: {0}")]
pub struct ParseLeadSubSourceError(pub String);
