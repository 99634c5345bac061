//! Transient notification banners.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual kind of a notification banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Danger,
    Warning,
    #[default]
    Info,
}

impl NotificationKind {
    /// Icon shown in front of the message.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "check-circle",
            Self::Danger => "exclamation-circle",
            Self::Warning => "exclamation-triangle",
            Self::Info => "info-circle",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Parse a kind name; unknown names fall back to `Info`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "danger" => Self::Danger,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A banner currently or previously shown on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Page-unique identifier
    pub id: u64,

    pub message: String,

    pub kind: NotificationKind,

    /// When the banner was pushed
    pub shown_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(id: u64, message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            id,
            message: message.into(),
            kind,
            shown_at: Utc::now(),
        }
    }

    /// CSS class list of the banner element.
    pub fn class_name(&self) -> String {
        format!("alert alert-{} position-fixed", self.kind)
    }
}
