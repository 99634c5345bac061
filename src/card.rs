//! The card's global object.
//!
//! [`ECard`] wires the services to the page and exposes what inline page
//! handlers call: `save_contact`, `open_chat`, `show_notification`, plus the
//! page lifecycle hooks.

use crate::config::Config;
use crate::delivery::{resolve_delivery, PageHost};
use crate::effects::{schedule_entrance, Deferred, HoverEffects, StyleSurface};
use crate::metrics::Metrics;
use crate::models::{ContactRecord, NotificationKind, Theme};
use crate::notify::{NotificationCenter, Notifier};
use crate::page::{PageFieldReader, PageLayout};
use crate::preferences::PreferenceStore;
use crate::services::{
    ChatLinkOpener, ContactExporter, ExportOutcome, ProfileExtractor, ThemeController,
};
use std::sync::Arc;

const INIT_FAILED_MESSAGE: &str = "Error loading page features. Please refresh.";

/// Capabilities the card runs against.
#[derive(Clone)]
pub struct PageContext {
    pub reader: Arc<dyn PageFieldReader>,
    pub layout: Arc<dyn PageLayout>,
    pub host: Arc<dyn PageHost>,
    pub store: Arc<dyn PreferenceStore>,
    pub surface: Arc<dyn StyleSurface>,
}

/// Summary of page initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    /// Theme applied at load, `None` when the toggle was missing
    pub theme: Option<Theme>,

    pub animated: usize,

    pub social_buttons: usize,
}

/// A running business card page.
///
/// Delayed steps are spawned on the current tokio runtime, so the card's
/// actions must run inside one.
pub struct ECard {
    extractor: ProfileExtractor,
    exporter: ContactExporter,
    chat: ChatLinkOpener,
    theme: ThemeController,
    hover: HoverEffects,
    notifications: NotificationCenter,
    layout: Arc<dyn PageLayout>,
    surface: Arc<dyn StyleSurface>,
    deferred: Deferred,
    metrics: Metrics,
}

impl ECard {
    /// Wire the card. The delivery strategy is resolved here, once, from the
    /// configured user agent.
    pub fn new(context: PageContext, config: &Config) -> Self {
        let deferred = Deferred::new();
        let metrics = Metrics::new();

        let notifications = NotificationCenter::new(
            context.surface.clone(),
            deferred.clone(),
            config.notification_ttl,
            metrics.clone(),
        );
        let notifier: Arc<dyn Notifier> = Arc::new(notifications.clone());

        let delivery = resolve_delivery(
            &config.user_agent,
            context.host.clone(),
            deferred.clone(),
            config.revoke_delay,
        );

        Self {
            extractor: ProfileExtractor::new(context.reader),
            exporter: ContactExporter::new(
                delivery,
                notifier.clone(),
                config.vcard_dialect,
                metrics.clone(),
            ),
            chat: ChatLinkOpener::new(
                context.host,
                notifier,
                config.chat_domain.clone(),
                config.chat_message.clone(),
                metrics.clone(),
            ),
            theme: ThemeController::new(
                context.store,
                context.layout.clone(),
                context.surface.clone(),
                deferred.clone(),
                metrics.clone(),
            ),
            hover: HoverEffects::new(context.surface.clone()),
            notifications,
            layout: context.layout,
            surface: context.surface,
            deferred,
            metrics,
        }
    }

    /// Page load: theme, entrance animations and hover effects.
    ///
    /// A missing theme toggle is logged and skipped; the rest of the page
    /// keeps working.
    pub fn init(&self) -> InitReport {
        let theme = match self.theme.init() {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::error!("Dark mode toggle elements not found: {}", e);
                None
            }
        };

        let animated = schedule_entrance(
            self.layout.as_ref(),
            self.surface.clone(),
            &self.deferred,
        );
        let social_buttons = self.hover.init(self.layout.as_ref());

        tracing::info!("E-Card initialized successfully");

        InitReport {
            theme,
            animated,
            social_buttons,
        }
    }

    /// Report a page that failed to initialize.
    pub fn report_init_failure(&self, error: &dyn std::error::Error) {
        tracing::error!("Error initializing E-Card: {}", error);
        self.notifications
            .show(INIT_FAILED_MESSAGE, NotificationKind::Warning);
    }

    /// Page visibility changed.
    pub fn on_visibility_change(&self, hidden: bool) {
        if hidden {
            tracing::info!("Page hidden - optimizing performance");
        } else {
            tracing::info!("Page visible - resuming normal operation");
        }
    }

    /// Current contact record, read fresh from the page.
    pub fn contact(&self) -> ContactRecord {
        self.extractor.extract()
    }

    /// Export the card's contact as a vCard.
    pub async fn save_contact(&self) -> ExportOutcome {
        let record = self.extractor.extract();
        self.exporter.export_contact(&record).await
    }

    /// Open a prefilled chat with the card owner.
    pub fn open_chat(&self) -> Option<String> {
        let record = self.extractor.extract();
        self.chat.open_chat(&record)
    }

    /// Show a notification banner. Returns its id.
    pub fn show_notification(&self, message: &str, kind: NotificationKind) -> u64 {
        self.notifications.show(message, kind)
    }

    /// Theme toggle clicked.
    pub fn toggle_theme(&self) -> Option<Theme> {
        self.theme.toggle()
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    /// Pointer entered a social button.
    pub fn hover_enter(&self, target: &str) -> bool {
        self.hover.enter(target)
    }

    /// Pointer left a social button.
    pub fn hover_leave(&self, target: &str) -> bool {
        self.hover.leave(target)
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Wait for every delayed step to run.
    pub async fn settle(&self) {
        self.deferred.settle().await;
    }
}
