use super::host::PageHost;
use crate::effects::Deferred;
use crate::error::ExportResult;
use crate::vcard::ContactFile;
use async_trait::async_trait;
use base64::Engine;
use std::sync::Arc;
use std::time::Duration;

/// Default delay before a download's object URL is released.
pub const REVOKE_DELAY: Duration = Duration::from_millis(100);

/// How a contact file was handed to the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// The current page navigated to the file itself
    Navigated { url: String },

    /// A download anchor was activated
    Downloaded { file_name: String, url: String },
}

/// Hands a rendered contact file to the visitor.
#[async_trait]
pub trait DeliveryStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    async fn deliver(&self, file: &ContactFile) -> ExportResult<Delivery>;
}

/// `data:` URI carrying the file inline, base64 encoded.
pub fn data_uri(file: &ContactFile) -> String {
    format!(
        "data:{};base64,{}",
        file.mime_type,
        base64::engine::general_purpose::STANDARD.encode(file.as_bytes())
    )
}

/// Navigate the current page to the file.
///
/// Used where download anchors are unreliable; the client then offers to
/// import the contact itself.
pub struct NavigationDelivery {
    host: Arc<dyn PageHost>,
}

impl NavigationDelivery {
    pub fn new(host: Arc<dyn PageHost>) -> Self {
        Self { host }
    }
}

#[async_trait]
impl DeliveryStrategy for NavigationDelivery {
    fn name(&self) -> &'static str {
        "navigation"
    }

    async fn deliver(&self, file: &ContactFile) -> ExportResult<Delivery> {
        let url = data_uri(file);
        self.host.navigate(&url)?;
        Ok(Delivery::Navigated { url })
    }
}

/// Download the file through a transient anchor.
///
/// The object URL is released after a short delay so the download has time
/// to start. If the download fails the URL is released at once.
pub struct AnchorDownloadDelivery {
    host: Arc<dyn PageHost>,
    deferred: Deferred,
    revoke_delay: Duration,
}

impl AnchorDownloadDelivery {
    pub fn new(host: Arc<dyn PageHost>, deferred: Deferred, revoke_delay: Duration) -> Self {
        Self {
            host,
            deferred,
            revoke_delay,
        }
    }
}

#[async_trait]
impl DeliveryStrategy for AnchorDownloadDelivery {
    fn name(&self) -> &'static str {
        "anchor-download"
    }

    async fn deliver(&self, file: &ContactFile) -> ExportResult<Delivery> {
        let url = self.host.create_object_url(file)?;

        if let Err(e) = self.host.trigger_download(&url, &file.file_name) {
            self.host.revoke_object_url(&url);
            return Err(e);
        }

        let host = self.host.clone();
        let revoked = url.clone();
        self.deferred.after(self.revoke_delay, move || {
            host.revoke_object_url(&revoked);
        });

        Ok(Delivery::Downloaded {
            file_name: file.file_name.clone(),
            url,
        })
    }
}
