//! Application service layer.
//!
//! Services hold the card's behavior: they read the page through the
//! injected capabilities, build what the visitor asked for, and report the
//! outcome through notifications. None of them propagates a fault to the
//! caller.

mod chat_link;
mod contact_exporter;
mod profile_extractor;
mod theme_controller;

pub use chat_link::{build_chat_link, ChatLinkOpener, DEFAULT_CHAT_DOMAIN, DEFAULT_CHAT_MESSAGE};
pub use contact_exporter::{ContactExporter, ExportOutcome};
pub use profile_extractor::ProfileExtractor;
pub use theme_controller::{ThemeController, BODY, THEME_TOGGLE, THEME_TOGGLE_ICON};

// Re-export common types used by services
pub use crate::models::{ContactRecord, NotificationKind, Theme};
