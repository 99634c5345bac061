use super::host::PageHost;
use crate::error::{ExportError, ExportResult};
use crate::vcard::ContactFile;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Host for running the card outside a browser.
///
/// Object URLs live in memory, downloads are written into the output
/// directory, and navigations or new browsing contexts are printed one URL
/// per line to the given writer.
#[derive(Clone)]
pub struct LocalHost {
    output_dir: PathBuf,
    resources: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    next_resource: Arc<AtomicU64>,
    out: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl LocalHost {
    /// Create a host printing to stdout.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self::with_writer(output_dir, Box::new(std::io::stdout()))
    }

    pub fn with_writer(output_dir: impl Into<PathBuf>, out: Box<dyn Write + Send>) -> Self {
        Self {
            output_dir: output_dir.into(),
            resources: Arc::new(Mutex::new(HashMap::new())),
            next_resource: Arc::new(AtomicU64::new(1)),
            out: Arc::new(Mutex::new(out)),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Number of object URLs that have not been revoked.
    pub fn live_resources(&self) -> usize {
        self.resources.lock().map(|r| r.len()).unwrap_or(0)
    }

    fn print(&self, line: &str) -> std::io::Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| std::io::Error::new(std::io::ErrorKind::Other, "output poisoned"))?;
        writeln!(out, "{}", line)?;
        out.flush()
    }
}

/// Reject names that would escape the output directory.
fn is_plain_file_name(file_name: &str) -> bool {
    !file_name.is_empty()
        && file_name != "."
        && file_name != ".."
        && !file_name.contains(|c: char| c == '/' || c == '\\')
}

impl PageHost for LocalHost {
    fn create_object_url(&self, file: &ContactFile) -> ExportResult<String> {
        let id = self.next_resource.fetch_add(1, Ordering::Relaxed);
        let url = format!("blob:ecard/{}", id);

        let mut resources =
            self.resources
                .lock()
                .map_err(|_| ExportError::ResourceCreation {
                    file_name: file.file_name.clone(),
                    reason: "resource table unavailable".to_string(),
                })?;
        resources.insert(url.clone(), file.as_bytes().to_vec());

        tracing::debug!(url = %url, bytes = file.content.len(), "Created object URL");
        Ok(url)
    }

    fn revoke_object_url(&self, url: &str) {
        if let Ok(mut resources) = self.resources.lock() {
            if resources.remove(url).is_some() {
                tracing::debug!(url = %url, "Revoked object URL");
            }
        }
    }

    fn navigate(&self, url: &str) -> ExportResult<()> {
        self.print(url)
            .map_err(|e| ExportError::Navigation(e.to_string()))
    }

    fn trigger_download(&self, url: &str, file_name: &str) -> ExportResult<()> {
        if !is_plain_file_name(file_name) {
            return Err(ExportError::Download {
                file_name: file_name.to_string(),
                reason: "not a plain file name".to_string(),
            });
        }

        let bytes = self
            .resources
            .lock()
            .ok()
            .and_then(|resources| resources.get(url).cloned())
            .ok_or_else(|| ExportError::Download {
                file_name: file_name.to_string(),
                reason: format!("unknown resource {}", url),
            })?;

        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(file_name);
        std::fs::write(&path, bytes)?;

        tracing::info!(path = %path.display(), "Contact file downloaded");
        Ok(())
    }

    fn open_new_context(&self, url: &str) -> ExportResult<()> {
        self.print(url)
            .map_err(|e| ExportError::OpenContext(e.to_string()))
    }
}
