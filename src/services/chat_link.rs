//! Chat deep links.

use crate::delivery::PageHost;
use crate::metrics::Metrics;
use crate::models::{ContactRecord, NotificationKind};
use crate::notify::Notifier;
use std::sync::Arc;

/// Host of the chat deep links.
pub const DEFAULT_CHAT_DOMAIN: &str = "wa.me";

/// Message prefilled in the chat.
pub const DEFAULT_CHAT_MESSAGE: &str =
    "Hello! I found your contact through your digital business card.";

const FAILED_MESSAGE: &str = "Error opening WhatsApp. Please try again.";

/// Build `https://<domain>/<number>?text=<encoded message>`.
///
/// # Example
///
/// ```
/// use ecard::services::build_chat_link;
///
/// let link = build_chat_link("wa.me", "8801711000000", "Hi there!");
/// assert_eq!(link, "https://wa.me/8801711000000?text=Hi%20there%21");
/// ```
pub fn build_chat_link(domain: &str, number: &str, message: &str) -> String {
    format!(
        "https://{}/{}?text={}",
        domain,
        number,
        urlencoding::encode(message)
    )
}

/// Opens a prefilled chat with the card owner.
#[derive(Clone)]
pub struct ChatLinkOpener {
    host: Arc<dyn PageHost>,
    notifier: Arc<dyn Notifier>,
    domain: String,
    message: String,
    metrics: Metrics,
}

impl ChatLinkOpener {
    pub fn new(
        host: Arc<dyn PageHost>,
        notifier: Arc<dyn Notifier>,
        domain: impl Into<String>,
        message: impl Into<String>,
        metrics: Metrics,
    ) -> Self {
        Self {
            host,
            notifier,
            domain: domain.into(),
            message: message.into(),
            metrics,
        }
    }

    /// Open the chat in a new browsing context.
    ///
    /// Returns the opened link, or `None` when opening failed; failures are
    /// logged and reported to the visitor.
    pub fn open_chat(&self, record: &ContactRecord) -> Option<String> {
        let link = build_chat_link(&self.domain, &record.whatsapp_number, &self.message);

        match self.host.open_new_context(&link) {
            Ok(()) => {
                tracing::debug!(link = %link, "Opened chat link");
                self.metrics.record_chat(true);
                Some(link)
            }
            Err(e) => {
                tracing::error!("Error opening WhatsApp: {}", e);
                self.metrics.record_chat(false);
                self.notifier.show(FAILED_MESSAGE, NotificationKind::Danger);
                None
            }
        }
    }
}
