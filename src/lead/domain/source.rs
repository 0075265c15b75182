//! Lead provenance enumerations.

use super::{ParseLeadSourceError, ParseLeadSubSourceError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Channel through which a lead entered the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadSource {
    /// Captured through the marketplace website.
    Website,
    /// Referred by an existing customer or partner.
    Referral,
    /// Found via a social media channel.
    SocialMedia,
    /// Responded to a paid advertisement.
    Advertisement,
    /// Reached through outbound cold calling.
    ColdCall,
    /// Any channel outside the enumerated set.
    Other,
}

impl LeadSource {
    /// All sources, for filter choices.
    pub const ALL: [Self; 6] = [
        Self::Website,
        Self::Referral,
        Self::SocialMedia,
        Self::Advertisement,
        Self::ColdCall,
        Self::Other,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Referral => "referral",
            Self::SocialMedia => "social_media",
            Self::Advertisement => "advertisement",
            Self::ColdCall => "cold_call",
            Self::Other => "other",
        }
    }

    /// Returns the human-readable source label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Website => "Website",
            Self::Referral => "Referral",
            Self::SocialMedia => "Social Media",
            Self::Advertisement => "Advertisement",
            Self::ColdCall => "Cold Call",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for LeadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for LeadSource {
    type Error = ParseLeadSourceError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "website" => Ok(Self::Website),
            "referral" => Ok(Self::Referral),
            "social_media" => Ok(Self::SocialMedia),
            "advertisement" => Ok(Self::Advertisement),
            "cold_call" => Ok(Self::ColdCall),
            "other" => Ok(Self::Other),
            _ => Err(ParseLeadSourceError(value.to_owned())),
        }
    }
}

/// Finer-grained provenance detail beneath [`LeadSource`].
///
/// The set is fixed but semantically freeform: a sub-source is never
/// cross-validated against the lead's source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadSubSource {
    /// Company Facebook page.
    FacebookPage,
    /// Community Facebook group.
    FacebookGroup,
    /// Instagram profile or ad.
    Instagram,
    /// Organic Google search.
    GoogleSearch,
    /// Word of mouth.
    WordOfMouth,
    /// Previous customer returning.
    ReturningCustomer,
    /// Newspaper listing or ad.
    Newspaper,
    /// Billboard or street signage.
    Billboard,
    /// Inbound phone inquiry.
    PhoneInquiry,
    /// Brought in by a field agent.
    Agent,
}

impl LeadSubSource {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FacebookPage => "facebook_page",
            Self::FacebookGroup => "facebook_group",
            Self::Instagram => "instagram",
            Self::GoogleSearch => "google_search",
            Self::WordOfMouth => "word_of_mouth",
            Self::ReturningCustomer => "returning_customer",
            Self::Newspaper => "newspaper",
            Self::Billboard => "billboard",
            Self::PhoneInquiry => "phone_inquiry",
            Self::Agent => "agent",
        }
    }

    /// Returns the human-readable sub-source label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FacebookPage => "Facebook Page",
            Self::FacebookGroup => "Facebook Group",
            Self::Instagram => "Instagram",
            Self::GoogleSearch => "Google Search",
            Self::WordOfMouth => "Word of Mouth",
            Self::ReturningCustomer => "Returning Customer",
            Self::Newspaper => "Newspaper",
            Self::Billboard => "Billboard",
            Self::PhoneInquiry => "Phone Inquiry",
            Self::Agent => "Agent",
        }
    }
}

impl fmt::Display for LeadSubSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for LeadSubSource {
    type Error = ParseLeadSubSourceError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "facebook_page" => Ok(Self::FacebookPage),
            "facebook_group" => Ok(Self::FacebookGroup),
            "instagram" => Ok(Self::Instagram),
            "google_search" => Ok(Self::GoogleSearch),
            "word_of_mouth" => Ok(Self::WordOfMouth),
            "returning_customer" => Ok(Self::ReturningCustomer),
            "newspaper" => Ok(Self::Newspaper),
            "billboard" => Ok(Self::Billboard),
            "phone_inquiry" => Ok(Self::PhoneInquiry),
            "agent" => Ok(Self::Agent),
            _ => Err(ParseLeadSubSourceError(value.to_owned())),
        }
    }
}
