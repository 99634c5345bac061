//! Domain value objects and text rules.
//!
//! This module contains the small pieces of text handling the card relies on:
//! the "title at organization" composite line, labeled phone numbers, and
//! the person name split used by the contact file and its download name.
//! None of these can fail; malformed input degrades to empty parts.

pub mod person_name;
pub mod phone;
pub mod role_line;

pub use person_name::PersonName;
pub use phone::{digits_only, strip_label, OFFICE_LABEL, PERSONAL_LABEL};
pub use role_line::RoleLine;
