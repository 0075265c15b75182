//! Domain model for the lead pipeline.
//!
//! The lead domain models client leads, the pipeline stage state machine
//! with its closed-outcome sub-states, and the pure query layer used by
//! list displays, keeping all infrastructure concerns outside of the
//! domain boundary.

mod contact;
mod error;
mod ids;
mod lead;
mod name;
mod query;
mod source;
mod stage;

pub use contact::{ContactChannels, PostalAddress};
pub use error::{
    LeadDomainError, ParseClosedReasonError, ParseLeadSourceError, ParseLeadSubSourceError,
    ParseStageError,
};
pub use ids::LeadId;
pub use lead::{Lead, LeadDetails, LeadEdit};
pub use name::{ClientName, OwnerName};
pub use query::{DEFAULT_PAGE_SIZE, LeadFilter, Page, PageRequest, distinct_owners, paginate};
pub use source::{LeadSource, LeadSubSource};
pub use stage::{ClosedOutcome, ClosedReason, LossNote, Stage, StageKind};
