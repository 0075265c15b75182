//! Lead aggregate root and creation/edit payloads.

use super::{
    ClientName, ContactChannels, LeadDomainError, LeadId, LeadSource, LeadSubSource, OwnerName,
    PostalAddress, Stage,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated attribute bundle for opening a new lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadDetails {
    client_name: ClientName,
    owner: OwnerName,
    source: LeadSource,
    sub_source: Option<LeadSubSource>,
    contact: ContactChannels,
    address: PostalAddress,
    profession: Option<String>,
    desired_service: String,
    discussion_notes: String,
    comment: String,
}

impl LeadDetails {
    /// Creates details with the required fields.
    #[must_use]
    pub fn new(client_name: ClientName, owner: OwnerName, source: LeadSource) -> Self {
        Self {
            client_name,
            owner,
            source,
            sub_source: None,
            contact: ContactChannels::empty(),
            address: PostalAddress::empty(),
            profession: None,
            desired_service: String::new(),
            discussion_notes: String::new(),
            comment: String::new(),
        }
    }

    /// Sets the provenance sub-source.
    #[must_use]
    pub const fn with_sub_source(mut self, sub_source: LeadSubSource) -> Self {
        self.sub_source = Some(sub_source);
        self
    }

    /// Sets the contact channels.
    #[must_use]
    pub fn with_contact(mut self, contact: ContactChannels) -> Self {
        self.contact = contact;
        self
    }

    /// Sets the postal address.
    #[must_use]
    pub fn with_address(mut self, address: PostalAddress) -> Self {
        self.address = address;
        self
    }

    /// Sets the client's profession.
    #[must_use]
    pub fn with_profession(mut self, profession: impl Into<String>) -> Self {
        self.profession = Some(profession.into());
        self
    }

    /// Sets the service the client asked about.
    #[must_use]
    pub fn with_desired_service(mut self, desired_service: impl Into<String>) -> Self {
        self.desired_service = desired_service.into();
        self
    }

    /// Sets the initial discussion notes.
    #[must_use]
    pub fn with_discussion_notes(mut self, discussion_notes: impl Into<String>) -> Self {
        self.discussion_notes = discussion_notes.into();
        self
    }

    /// Sets the free-form comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

/// Partial edit of a lead's contact and sales attributes.
///
/// `None` fields are left unchanged. Stage and creation timestamp are
/// never touched by an edit; stage changes go through the pipeline
/// engine instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadEdit {
    /// Replacement client name; revalidated on application.
    pub client_name: Option<String>,
    /// Replacement owner name; revalidated on application.
    pub owner: Option<String>,
    /// Replacement lead source.
    pub source: Option<LeadSource>,
    /// Replacement sub-source.
    pub sub_source: Option<LeadSubSource>,
    /// Replacement contact channels.
    pub contact: Option<ContactChannels>,
    /// Replacement postal address.
    pub address: Option<PostalAddress>,
    /// Replacement profession; an empty string clears it.
    pub profession: Option<String>,
    /// Replacement desired service.
    pub desired_service: Option<String>,
    /// Replacement discussion notes.
    pub discussion_notes: Option<String>,
    /// Replacement comment.
    pub comment: Option<String>,
}

/// Lead aggregate root.
///
/// Stage mutations route through [`Lead::set_stage`] with values produced
/// by [`Stage::resolve`]; every other attribute is edited freely via
/// [`Lead::apply_edit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    id: LeadId,
    client_name: ClientName,
    owner: OwnerName,
    source: LeadSource,
    sub_source: Option<LeadSubSource>,
    contact: ContactChannels,
    address: PostalAddress,
    profession: Option<String>,
    desired_service: String,
    discussion_notes: String,
    comment: String,
    stage: Stage,
    created_at: DateTime<Utc>,
}

impl Lead {
    /// Creates a new lead in the `New` stage.
    #[must_use]
    pub fn new(details: LeadDetails, clock: &impl Clock) -> Self {
        Self {
            id: LeadId::new(),
            client_name: details.client_name,
            owner: details.owner,
            source: details.source,
            sub_source: details.sub_source,
            contact: details.contact,
            address: details.address,
            profession: details.profession,
            desired_service: details.desired_service,
            discussion_notes: details.discussion_notes,
            comment: details.comment,
            stage: Stage::New,
            created_at: clock.utc(),
        }
    }

    /// Returns the lead identifier.
    #[must_use]
    pub const fn id(&self) -> LeadId {
        self.id
    }

    /// Returns the client name.
    #[must_use]
    pub const fn client_name(&self) -> &ClientName {
        &self.client_name
    }

    /// Returns the owning staff member's name.
    #[must_use]
    pub const fn owner(&self) -> &OwnerName {
        &self.owner
    }

    /// Returns the lead source.
    #[must_use]
    pub const fn source(&self) -> LeadSource {
        self.source
    }

    /// Returns the provenance sub-source, if recorded.
    #[must_use]
    pub const fn sub_source(&self) -> Option<LeadSubSource> {
        self.sub_source
    }

    /// Returns the contact channels.
    #[must_use]
    pub const fn contact(&self) -> &ContactChannels {
        &self.contact
    }

    /// Returns the postal address.
    #[must_use]
    pub const fn address(&self) -> &PostalAddress {
        &self.address
    }

    /// Returns the client's profession, if recorded.
    #[must_use]
    pub fn profession(&self) -> Option<&str> {
        self.profession.as_deref()
    }

    /// Returns the service the client asked about.
    #[must_use]
    pub fn desired_service(&self) -> &str {
        &self.desired_service
    }

    /// Returns the initial discussion notes.
    #[must_use]
    pub fn discussion_notes(&self) -> &str {
        &self.discussion_notes
    }

    /// Returns the free-form comment.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Returns the current pipeline stage.
    #[must_use]
    pub const fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces the pipeline stage.
    ///
    /// Any stage is reachable from any other; replacing a closed stage
    /// with an open one drops the previous outcome along with the old
    /// value.
    pub fn set_stage(&mut self, stage: Stage) {
        self.stage = stage;
    }

    /// Applies a partial edit to contact and sales attributes.
    ///
    /// Name fields are validated before anything is assigned, so a
    /// rejected edit leaves the lead unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`LeadDomainError::EmptyClientName`] or
    /// [`LeadDomainError::EmptyOwnerName`] when a supplied name is empty
    /// after trimming.
    pub fn apply_edit(&mut self, edit: LeadEdit) -> Result<(), LeadDomainError> {
        let new_client_name = edit.client_name.map(ClientName::new).transpose()?;
        let new_owner = edit.owner.map(OwnerName::new).transpose()?;

        if let Some(client_name) = new_client_name {
            self.client_name = client_name;
        }
        if let Some(owner) = new_owner {
            self.owner = owner;
        }
        if let Some(source) = edit.source {
            self.source = source;
        }
        if let Some(sub_source) = edit.sub_source {
            self.sub_source = Some(sub_source);
        }
        if let Some(contact) = edit.contact {
            self.contact = contact;
        }
        if let Some(address) = edit.address {
            self.address = address;
        }
        if let Some(profession) = edit.profession {
            self.profession = (!profession.trim().is_empty()).then_some(profession);
        }
        if let Some(desired_service) = edit.desired_service {
            self.desired_service = desired_service;
        }
        if let Some(discussion_notes) = edit.discussion_notes {
            self.discussion_notes = discussion_notes;
        }
        if let Some(comment) = edit.comment {
            self.comment = comment;
        }
        Ok(())
    }
}
