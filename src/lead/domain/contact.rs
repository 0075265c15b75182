//! Contact and postal address value objects.
//!
//! Every field is optional free text; the surrounding system treats these
//! purely as display data, so no format validation is applied here.

use serde::{Deserialize, Serialize};

/// Optional reachability channels for a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactChannels {
    /// Mobile phone number.
    pub mobile: Option<String>,
    /// WhatsApp number, when different from the mobile number.
    pub whatsapp: Option<String>,
    /// Facebook profile name or URL.
    pub facebook: Option<String>,
    /// Email address.
    pub email: Option<String>,
}

impl ContactChannels {
    /// Creates an empty set of contact channels.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            mobile: None,
            whatsapp: None,
            facebook: None,
            email: None,
        }
    }
}

/// Optional postal address of a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    /// Street and house number.
    pub street: Option<String>,
    /// City name.
    pub city: Option<String>,
    /// Thana (police-station subdivision).
    pub thana: Option<String>,
    /// District name.
    pub district: Option<String>,
    /// Country name.
    pub country: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
}

impl PostalAddress {
    /// Creates an empty postal address.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            street: None,
            city: None,
            thana: None,
            district: None,
            country: None,
            postal_code: None,
        }
    }
}
