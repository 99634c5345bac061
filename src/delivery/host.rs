use crate::error::ExportResult;
use crate::vcard::ContactFile;

/// Browser capabilities the card needs to hand things to the visitor.
pub trait PageHost: Send + Sync {
    /// Register a file and return a URL addressing it.
    fn create_object_url(&self, file: &ContactFile) -> ExportResult<String>;

    /// Release a URL created by [`PageHost::create_object_url`].
    fn revoke_object_url(&self, url: &str);

    /// Navigate the current page to `url`.
    fn navigate(&self, url: &str) -> ExportResult<()>;

    /// Activate a transient download anchor for `url` named `file_name`.
    fn trigger_download(&self, url: &str, file_name: &str) -> ExportResult<()>;

    /// Open `url` in a new browsing context.
    fn open_new_context(&self, url: &str) -> ExportResult<()>;
}
