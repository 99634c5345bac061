//! Contact record extracted from the card page.

use serde::{Deserialize, Serialize};

/// The shareable contact details printed on a business card.
///
/// Every field is plain text and empty when the page does not provide it.
/// A record is built fresh for each user action and dropped afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRecord {
    /// Full display name
    pub name: String,

    /// Job title (from the role line)
    pub title: String,

    /// Organization (from the role line)
    pub organization: String,

    /// Secondary title (from the department line)
    pub secondary_title: String,

    /// Secondary organization (from the department line)
    pub secondary_organization: String,

    /// Office phone without its label
    pub office_phone: String,

    /// Personal phone without its label
    pub personal_phone: String,

    pub email: String,

    pub secondary_email: String,

    /// Website link target
    pub website: String,

    /// Postal address, single line
    pub address: String,

    /// LinkedIn profile link target
    pub linkedin: String,

    /// Facebook profile link target
    pub facebook: String,

    /// Personal phone reduced to digits, used for chat deep links
    pub whatsapp_number: String,
}

impl ContactRecord {
    /// Whether the page provided nothing at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
