use super::Notifier;
use crate::effects::{Deferred, StyleChange, StyleSurface};
use crate::metrics::Metrics;
use crate::models::{Notification, NotificationKind};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Default time a banner stays before it starts leaving.
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(3000);

/// Length of the exit animation.
pub const EXIT_ANIMATION: Duration = Duration::from_millis(300);

/// The page-wide stack of notification banners.
///
/// Banners enter with a slide-in animation, start sliding out after the TTL
/// and are removed once the exit animation has played. A banner closed by
/// hand is removed at once and its pending steps do nothing.
#[derive(Clone)]
pub struct NotificationCenter {
    active: Arc<Mutex<Vec<Notification>>>,
    next_id: Arc<AtomicU64>,
    ttl: Duration,
    surface: Arc<dyn StyleSurface>,
    deferred: Deferred,
    metrics: Metrics,
}

impl NotificationCenter {
    pub fn new(
        surface: Arc<dyn StyleSurface>,
        deferred: Deferred,
        ttl: Duration,
        metrics: Metrics,
    ) -> Self {
        Self {
            active: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(1)),
            ttl,
            surface,
            deferred,
            metrics,
        }
    }

    /// Banners currently on the page, oldest first.
    pub fn active(&self) -> Vec<Notification> {
        self.active
            .lock()
            .map(|active| active.clone())
            .unwrap_or_default()
    }

    /// Close a banner by hand. Returns whether it was still shown.
    pub fn dismiss(&self, id: u64) -> bool {
        let removed = remove_banner(&self.active, id);
        if removed {
            self.surface.apply(StyleChange::remove(banner_target(id)));
        }
        removed
    }

    fn is_active(active: &Mutex<Vec<Notification>>, id: u64) -> bool {
        active
            .lock()
            .map(|active| active.iter().any(|n| n.id == id))
            .unwrap_or(false)
    }
}

fn banner_target(id: u64) -> String {
    format!("#notification-{}", id)
}

fn remove_banner(active: &Mutex<Vec<Notification>>, id: u64) -> bool {
    match active.lock() {
        Ok(mut active) => {
            let before = active.len();
            active.retain(|n| n.id != id);
            active.len() != before
        }
        Err(_) => false,
    }
}

impl Notifier for NotificationCenter {
    fn show(&self, message: &str, kind: NotificationKind) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let notification = Notification::new(id, message, kind);
        let target = banner_target(id);

        match kind {
            NotificationKind::Danger | NotificationKind::Warning => {
                tracing::warn!(id, kind = %kind, icon = kind.icon(), "{}", message)
            }
            _ => tracing::info!(id, kind = %kind, icon = kind.icon(), "{}", message),
        }

        self.surface
            .apply(StyleChange::add_class(target.clone(), notification.class_name()));
        self.surface.apply(StyleChange::set_style(
            target.clone(),
            "animation",
            "slideInRight 0.3s ease",
        ));

        if let Ok(mut active) = self.active.lock() {
            active.push(notification);
        }
        self.metrics.record_notification();

        let active = self.active.clone();
        let surface = self.surface.clone();
        let deferred = self.deferred.clone();
        self.deferred.after(self.ttl, move || {
            if !Self::is_active(&active, id) {
                return;
            }

            surface.apply(StyleChange::set_style(
                target.clone(),
                "animation",
                "slideOutRight 0.3s ease",
            ));

            deferred.after(EXIT_ANIMATION, move || {
                if remove_banner(&active, id) {
                    surface.apply(StyleChange::remove(target));
                }
            });
        });

        id
    }
}
