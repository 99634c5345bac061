//! Profile extraction.
//!
//! Turns the card page into a [`ContactRecord`].

use crate::domain::{digits_only, strip_label, RoleLine, OFFICE_LABEL, PERSONAL_LABEL};
use crate::models::ContactRecord;
use crate::page::PageFieldReader;
use std::sync::Arc;

/// Reads the contact record from the current page.
#[derive(Clone)]
pub struct ProfileExtractor {
    reader: Arc<dyn PageFieldReader>,
}

impl ProfileExtractor {
    pub fn new(reader: Arc<dyn PageFieldReader>) -> Self {
        Self { reader }
    }

    /// Build a fresh record from the page.
    ///
    /// Never fails: a missing element yields an empty field.
    pub fn extract(&self) -> ContactRecord {
        extract_from(self.reader.as_ref())
    }
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Build a record from any field reader.
fn extract_from(reader: &dyn PageFieldReader) -> ContactRecord {
    let (title, organization) = RoleLine::parse(&trimmed(reader.role())).into_parts();
    let (secondary_title, secondary_organization) =
        RoleLine::parse(&trimmed(reader.department())).into_parts();

    let office_phone = strip_label(&trimmed(reader.office_phone()), OFFICE_LABEL).to_string();
    let personal_phone =
        strip_label(&trimmed(reader.personal_phone()), PERSONAL_LABEL).to_string();
    let whatsapp_number = digits_only(&personal_phone);

    ContactRecord {
        name: trimmed(reader.name()),
        title,
        organization,
        secondary_title,
        secondary_organization,
        office_phone,
        personal_phone,
        email: trimmed(reader.email()),
        secondary_email: trimmed(reader.secondary_email()),
        website: trimmed(reader.website()),
        address: trimmed(reader.address()),
        linkedin: trimmed(reader.linkedin()),
        facebook: trimmed(reader.facebook()),
        whatsapp_number,
    }
}
