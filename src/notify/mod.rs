//! Transient notifications.

mod center;

pub use center::{NotificationCenter, EXIT_ANIMATION, NOTIFICATION_TTL};

use crate::models::NotificationKind;

/// Shows transient messages to the visitor.
pub trait Notifier: Send + Sync {
    /// Show `message` and return the banner's id.
    fn show(&self, message: &str, kind: NotificationKind) -> u64;
}
