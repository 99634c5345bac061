//! Data models for the business card.
//!
//! This module contains the contact record read from the page, the transient
//! notifications shown to the visitor, and the page theme.

pub mod contact_record;
pub mod notification;
pub mod theme;

pub use contact_record::ContactRecord;
pub use notification::{Notification, NotificationKind};
pub use theme::{Theme, DARK_MODE_KEY};
