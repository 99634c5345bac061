//! Basic metrics instrumentation for the card's user actions.
//!
//! Provides counters for exports, chat links, theme toggles and notifications.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics collector shared by the card components.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Contact exports attempted
    exports_total: Arc<AtomicU64>,

    /// Contact exports that failed
    export_failures_total: Arc<AtomicU64>,

    /// Chat links opened
    chats_opened_total: Arc<AtomicU64>,

    /// Chat links that failed to open
    chat_failures_total: Arc<AtomicU64>,

    /// Theme toggles handled
    theme_toggles_total: Arc<AtomicU64>,

    /// Notifications pushed
    notifications_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            exports_total: Arc::new(AtomicU64::new(0)),
            export_failures_total: Arc::new(AtomicU64::new(0)),
            chats_opened_total: Arc::new(AtomicU64::new(0)),
            chat_failures_total: Arc::new(AtomicU64::new(0)),
            theme_toggles_total: Arc::new(AtomicU64::new(0)),
            notifications_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record an export attempt and whether it succeeded.
    pub fn record_export(&self, success: bool) {
        self.exports_total.fetch_add(1, Ordering::Relaxed);
        if !success {
            self.export_failures_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a chat link attempt and whether it succeeded.
    pub fn record_chat(&self, success: bool) {
        if success {
            self.chats_opened_total.fetch_add(1, Ordering::Relaxed);
        } else {
            self.chat_failures_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_theme_toggle(&self) {
        self.theme_toggles_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_notification(&self) {
        self.notifications_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn exports_total(&self) -> u64 {
        self.exports_total.load(Ordering::Relaxed)
    }

    pub fn export_failures_total(&self) -> u64 {
        self.export_failures_total.load(Ordering::Relaxed)
    }

    pub fn chats_opened_total(&self) -> u64 {
        self.chats_opened_total.load(Ordering::Relaxed)
    }

    pub fn chat_failures_total(&self) -> u64 {
        self.chat_failures_total.load(Ordering::Relaxed)
    }

    pub fn theme_toggles_total(&self) -> u64 {
        self.theme_toggles_total.load(Ordering::Relaxed)
    }

    pub fn notifications_total(&self) -> u64 {
        self.notifications_total.load(Ordering::Relaxed)
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.exports_total.store(0, Ordering::Relaxed);
        self.export_failures_total.store(0, Ordering::Relaxed);
        self.chats_opened_total.store(0, Ordering::Relaxed);
        self.chat_failures_total.store(0, Ordering::Relaxed);
        self.theme_toggles_total.store(0, Ordering::Relaxed);
        self.notifications_total.store(0, Ordering::Relaxed);
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            exports_total: self.exports_total(),
            export_failures_total: self.export_failures_total(),
            chats_opened_total: self.chats_opened_total(),
            chat_failures_total: self.chat_failures_total(),
            theme_toggles_total: self.theme_toggles_total(),
            notifications_total: self.notifications_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSummary {
    pub exports_total: u64,
    pub export_failures_total: u64,
    pub chats_opened_total: u64,
    pub chat_failures_total: u64,
    pub theme_toggles_total: u64,
    pub notifications_total: u64,
}
