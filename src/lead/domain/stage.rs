//! Pipeline stage state machine and closed-outcome sub-states.
//!
//! The terminal `Closed` stage folds its outcome into the variant so that
//! a closed lead always carries exactly one outcome and an open lead can
//! never carry one. Lost outcomes carry a mandatory justification note;
//! a won outcome structurally cannot.

use super::{LeadDomainError, ParseClosedReasonError, ParseStageError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline stage of a lead, including the closed outcome when terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "stage", content = "outcome", rename_all = "snake_case")]
pub enum Stage {
    /// Freshly captured, not yet worked.
    New,
    /// Vetted as a genuine sales opportunity.
    Qualified,
    /// A proposal has been sent to the client.
    Proposal,
    /// Terminal stage, sub-divided by outcome.
    Closed(ClosedOutcome),
}

impl Stage {
    /// Resolves caller-supplied transition inputs into a stage value.
    ///
    /// Non-closed targets ignore `reason` and `note`, which also clears any
    /// previously recorded outcome once the resolved stage is stored. A
    /// closed target requires a reason; lost reasons additionally require a
    /// non-empty note, trimmed before storage. A won closure discards any
    /// supplied note.
    ///
    /// # Errors
    ///
    /// Returns [`LeadDomainError::MissingClosedReason`] when closing without
    /// a reason, or [`LeadDomainError::EmptyLossNote`] when a lost reason
    /// lacks a justification note.
    pub fn resolve(
        target: StageKind,
        reason: Option<ClosedReason>,
        note: Option<&str>,
    ) -> Result<Self, LeadDomainError> {
        match target {
            StageKind::New => Ok(Self::New),
            StageKind::Qualified => Ok(Self::Qualified),
            StageKind::Proposal => Ok(Self::Proposal),
            StageKind::Closed => {
                let chosen = reason.ok_or(LeadDomainError::MissingClosedReason)?;
                let outcome = match chosen {
                    ClosedReason::Won => ClosedOutcome::Won,
                    ClosedReason::Lost => {
                        ClosedOutcome::Lost(LossNote::new(note.unwrap_or_default())?)
                    }
                    ClosedReason::LostUnqualified => {
                        ClosedOutcome::LostUnqualified(LossNote::new(note.unwrap_or_default())?)
                    }
                };
                Ok(Self::Closed(outcome))
            }
        }
    }

    /// Returns the stage discriminant without outcome data.
    #[must_use]
    pub const fn kind(&self) -> StageKind {
        match self {
            Self::New => StageKind::New,
            Self::Qualified => StageKind::Qualified,
            Self::Proposal => StageKind::Proposal,
            Self::Closed(_) => StageKind::Closed,
        }
    }

    /// Returns the closed outcome when the stage is terminal.
    #[must_use]
    pub const fn closed_outcome(&self) -> Option<&ClosedOutcome> {
        match self {
            Self::Closed(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Returns `true` when the stage is the terminal closed stage.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Closed(_))
    }

    /// Returns the zero-based position index used for progress rendering.
    #[must_use]
    pub const fn position(&self) -> u8 {
        self.kind().position()
    }

    /// Returns the human-readable stage label, including the outcome.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Qualified => "Qualified",
            Self::Proposal => "Proposal",
            Self::Closed(ClosedOutcome::Won) => "Closed Won",
            Self::Closed(ClosedOutcome::Lost(_)) => "Closed Lost",
            Self::Closed(ClosedOutcome::LostUnqualified(_)) => "Closed Lost (Unqualified)",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome sub-state of a closed lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", content = "note", rename_all = "snake_case")]
pub enum ClosedOutcome {
    /// The lead converted into business.
    Won,
    /// The lead was lost; carries the mandatory justification.
    Lost(LossNote),
    /// The lead was lost because it never qualified; carries the mandatory
    /// justification.
    LostUnqualified(LossNote),
}

impl ClosedOutcome {
    /// Returns the reason discriminant without note data.
    #[must_use]
    pub const fn reason(&self) -> ClosedReason {
        match self {
            Self::Won => ClosedReason::Won,
            Self::Lost(_) => ClosedReason::Lost,
            Self::LostUnqualified(_) => ClosedReason::LostUnqualified,
        }
    }

    /// Returns the justification note for lost outcomes.
    #[must_use]
    pub const fn loss_note(&self) -> Option<&LossNote> {
        match self {
            Self::Won => None,
            Self::Lost(note) | Self::LostUnqualified(note) => Some(note),
        }
    }
}

/// Non-empty, trimmed justification recorded when a lead is lost.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LossNote(String);

impl LossNote {
    /// Creates a validated loss note.
    ///
    /// Leading and trailing whitespace is trimmed before the emptiness
    /// check and before storage.
    ///
    /// # Errors
    ///
    /// Returns [`LeadDomainError::EmptyLossNote`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, LeadDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LeadDomainError::EmptyLossNote);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the note as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LossNote {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for LossNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stage discriminant used for transition targets and list filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    /// Freshly captured, not yet worked.
    New,
    /// Vetted as a genuine sales opportunity.
    Qualified,
    /// A proposal has been sent to the client.
    Proposal,
    /// Terminal stage.
    Closed,
}

impl StageKind {
    /// All stages in pipeline order, for progress bars and filter choices.
    pub const ALL: [Self; 4] = [Self::New, Self::Qualified, Self::Proposal, Self::Closed];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Qualified => "qualified",
            Self::Proposal => "proposal",
            Self::Closed => "closed",
        }
    }

    /// Returns the human-readable stage label.
    ///
    /// `Closed` renders without an outcome; callers with an outcome in view
    /// use [`Stage::label`] instead.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Qualified => "Qualified",
            Self::Proposal => "Proposal",
            Self::Closed => "Closed",
        }
    }

    /// Returns the zero-based position in pipeline order.
    ///
    /// The index drives progress rendering only; transitions are not
    /// restricted to moving forward through it.
    #[must_use]
    pub const fn position(self) -> u8 {
        match self {
            Self::New => 0,
            Self::Qualified => 1,
            Self::Proposal => 2,
            Self::Closed => 3,
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for StageKind {
    type Error = ParseStageError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "new" => Ok(Self::New),
            "qualified" => Ok(Self::Qualified),
            "proposal" => Ok(Self::Proposal),
            "closed" => Ok(Self::Closed),
            _ => Err(ParseStageError(value.to_owned())),
        }
    }
}

/// Closed-reason discriminant used for transition requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosedReason {
    /// The lead converted into business.
    Won,
    /// The lead was lost to a competitor or went cold.
    Lost,
    /// The lead never qualified as genuine business.
    LostUnqualified,
}

impl ClosedReason {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Won => "won",
            Self::Lost => "lost",
            Self::LostUnqualified => "lost_unqualified",
        }
    }

    /// Returns `true` for the lost family of reasons, which require a
    /// justification note.
    #[must_use]
    pub const fn requires_note(self) -> bool {
        matches!(self, Self::Lost | Self::LostUnqualified)
    }
}

impl fmt::Display for ClosedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ClosedReason {
    type Error = ParseClosedReasonError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "won" => Ok(Self::Won),
            "lost" => Ok(Self::Lost),
            "lost_unqualified" => Ok(Self::LostUnqualified),
            _ => Err(ParseClosedReasonError(value.to_owned())),
        }
    }
}
