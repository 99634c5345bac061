//! Error types for the e-card runtime.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Missing markup is never an error: extraction degrades to empty fields instead.

use thiserror::Error;

/// Errors that can occur while exporting a contact or opening a chat link.
///
/// These never escape the user-facing actions; they are logged and turned
/// into a notification.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The host could not create a resource URL for the contact file
    #[error("Failed to create resource for {file_name}: {reason}")]
    ResourceCreation { file_name: String, reason: String },

    /// The host refused or failed a navigation
    #[error("Navigation failed: {0}")]
    Navigation(String),

    /// The synthesized download could not be triggered
    #[error("Download failed for {file_name}: {reason}")]
    Download { file_name: String, reason: String },

    /// A new browsing context could not be opened
    #[error("Failed to open new browsing context: {0}")]
    OpenContext(String),

    /// Writing the downloaded file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while reading or writing the persisted preference.
#[derive(Error, Debug)]
pub enum PreferenceError {
    /// The backing file could not be read or written
    #[error("Preference storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file is not a JSON object of strings
    #[error("Preference file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The store's lock was poisoned by a panicking writer
    #[error("Preference store is unavailable")]
    Unavailable,
}

/// Errors that can occur while loading the card page.
#[derive(Error, Debug)]
pub enum PageError {
    /// The page file could not be read
    #[error("Failed to read page {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Required cosmetic structure is missing from the page
    #[error("Missing page element: {0}")]
    MissingElement(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ExportError
pub type ExportResult<T> = Result<T, ExportError>;

/// Convenience type alias for Results with PreferenceError
pub type PreferenceResult<T> = Result<T, PreferenceError>;

/// Convenience type alias for Results with PageError
pub type PageResult<T> = Result<T, PageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
