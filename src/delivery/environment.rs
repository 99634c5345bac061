use super::host::PageHost;
use super::strategy::{AnchorDownloadDelivery, DeliveryStrategy, NavigationDelivery};
use crate::effects::Deferred;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;
use std::time::Duration;

static SAFARI: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)safari").expect("Failed to compile Safari regex"));
static CHROME_OR_ANDROID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)chrome|android").expect("Failed to compile Chrome/Android regex")
});
static ANDROID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)android").expect("Failed to compile Android regex"));

/// What the user-agent string says about the visitor's client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClientEnvironment {
    /// Safari-like: "Safari" with no "Chrome" or "Android" before it
    pub safari_like: bool,

    /// Android-like: "Android" anywhere
    pub android_like: bool,
}

impl ClientEnvironment {
    pub fn detect(user_agent: &str) -> Self {
        let safari_like = match SAFARI.find(user_agent) {
            Some(safari) => CHROME_OR_ANDROID
                .find(user_agent)
                .map_or(true, |blocker| blocker.start() >= safari.start()),
            None => false,
        };

        Self {
            safari_like,
            android_like: ANDROID.is_match(user_agent),
        }
    }

    /// Whether download anchors are unreliable and navigation must be used.
    pub fn prefers_navigation(&self) -> bool {
        self.safari_like || self.android_like
    }
}

/// Pick the delivery strategy for a client, once, at startup.
pub fn resolve_delivery(
    user_agent: &str,
    host: Arc<dyn PageHost>,
    deferred: Deferred,
    revoke_delay: Duration,
) -> Arc<dyn DeliveryStrategy> {
    let environment = ClientEnvironment::detect(user_agent);

    let strategy: Arc<dyn DeliveryStrategy> = if environment.prefers_navigation() {
        Arc::new(NavigationDelivery::new(host))
    } else {
        Arc::new(AnchorDownloadDelivery::new(host, deferred, revoke_delay))
    };

    tracing::debug!(
        safari_like = environment.safari_like,
        android_like = environment.android_like,
        strategy = strategy.name(),
        "Resolved contact delivery"
    );

    strategy
}
