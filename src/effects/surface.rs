//! Style surfaces receiving cosmetic changes.

use std::fmt;
use std::sync::{Arc, Mutex};
use tokio::time::{Duration, Instant};

/// A single visual mutation of a page element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleChange {
    AddClass { target: String, class: String },
    RemoveClass { target: String, class: String },
    SetStyle {
        target: String,
        property: String,
        value: String,
    },
    /// Element removed from the page
    Remove { target: String },
}

impl StyleChange {
    pub fn add_class(target: impl Into<String>, class: impl Into<String>) -> Self {
        Self::AddClass {
            target: target.into(),
            class: class.into(),
        }
    }

    pub fn remove_class(target: impl Into<String>, class: impl Into<String>) -> Self {
        Self::RemoveClass {
            target: target.into(),
            class: class.into(),
        }
    }

    pub fn set_style(
        target: impl Into<String>,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::SetStyle {
            target: target.into(),
            property: property.into(),
            value: value.into(),
        }
    }

    pub fn remove(target: impl Into<String>) -> Self {
        Self::Remove {
            target: target.into(),
        }
    }

    /// Element the change applies to.
    pub fn target(&self) -> &str {
        match self {
            Self::AddClass { target, .. }
            | Self::RemoveClass { target, .. }
            | Self::SetStyle { target, .. }
            | Self::Remove { target } => target,
        }
    }
}

impl fmt::Display for StyleChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddClass { target, class } => write!(f, "{} +.{}", target, class),
            Self::RemoveClass { target, class } => write!(f, "{} -.{}", target, class),
            Self::SetStyle {
                target,
                property,
                value,
            } => write!(f, "{} {{ {}: {} }}", target, property, value),
            Self::Remove { target } => write!(f, "{} removed", target),
        }
    }
}

/// Receives the visual changes produced by the card.
pub trait StyleSurface: Send + Sync {
    fn apply(&self, change: StyleChange);
}

/// Surface that only logs changes.
#[derive(Debug, Clone, Default)]
pub struct LogSurface;

impl StyleSurface for LogSurface {
    fn apply(&self, change: StyleChange) {
        tracing::debug!(target_element = %change.target(), change = %change, "Style change");
    }
}

/// A change together with its offset from the surface's creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedChange {
    pub at: Duration,
    pub change: StyleChange,
}

/// Surface that keeps every change with its timing.
///
/// Offsets come from the tokio clock, so they are exact under a paused
/// test runtime.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    started: Instant,
    changes: Arc<Mutex<Vec<RecordedChange>>>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            changes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// All changes so far, in application order.
    pub fn changes(&self) -> Vec<RecordedChange> {
        self.changes
            .lock()
            .map(|changes| changes.clone())
            .unwrap_or_default()
    }

    /// Changes applied to one target, in application order.
    pub fn changes_for(&self, target: &str) -> Vec<RecordedChange> {
        self.changes()
            .into_iter()
            .filter(|recorded| recorded.change.target() == target)
            .collect()
    }

    pub fn clear(&self) {
        if let Ok(mut changes) = self.changes.lock() {
            changes.clear();
        }
    }
}

impl StyleSurface for RecordingSurface {
    fn apply(&self, change: StyleChange) {
        let at = self.started.elapsed();
        if let Ok(mut changes) = self.changes.lock() {
            changes.push(RecordedChange { at, change });
        }
    }
}
