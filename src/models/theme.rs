//! Page color theme.

use serde::{Deserialize, Serialize};

/// Preference key holding the dark-mode flag.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Color theme of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Read the stored flag. Only the literal `"true"` means dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("true") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// The literal stored for this theme.
    pub fn stored_value(&self) -> &'static str {
        match self {
            Self::Dark => "true",
            Self::Light => "false",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Font Awesome icon class of the toggle button.
    pub fn icon_class(&self) -> &'static str {
        match self {
            Self::Dark => "fa-sun",
            Self::Light => "fa-moon",
        }
    }
}
