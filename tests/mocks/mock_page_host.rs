use ecard::error::{ExportError, ExportResult};
use ecard::vcard::ContactFile;
use ecard::PageHost;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A call made against the mock host.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    CreateObjectUrl { file_name: String },
    RevokeObjectUrl { url: String },
    Navigate { url: String },
    TriggerDownload { url: String, file_name: String },
    OpenNewContext { url: String },
}

/// Mock browser host for testing.
///
/// Records every call in order and can be told to fail any method.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockPageHost {
    calls: Arc<Mutex<Vec<HostCall>>>,
    files: Arc<Mutex<HashMap<String, ContactFile>>>,
    failing: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockPageHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `method` return an error from now on.
    pub fn fail_on(&self, method: &str) {
        self.failing.lock().unwrap().push(method.to_string());
    }

    /// All calls so far, in order.
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| call_name(call) == method)
            .count()
    }

    /// The file registered under an object URL, if still live.
    pub fn file_at(&self, url: &str) -> Option<ContactFile> {
        self.files.lock().unwrap().get(url).cloned()
    }

    pub fn live_urls(&self) -> usize {
        self.files.lock().unwrap().len()
    }

    fn track(&self, call: HostCall) -> ExportResult<()> {
        let method = call_name(&call);
        let failing = self.failing.lock().unwrap().iter().any(|m| m == method);
        let error = if failing { Some(injected_error(&call)) } else { None };
        self.calls.lock().unwrap().push(call);
        match error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn call_name(call: &HostCall) -> &'static str {
    match call {
        HostCall::CreateObjectUrl { .. } => "create_object_url",
        HostCall::RevokeObjectUrl { .. } => "revoke_object_url",
        HostCall::Navigate { .. } => "navigate",
        HostCall::TriggerDownload { .. } => "trigger_download",
        HostCall::OpenNewContext { .. } => "open_new_context",
    }
}

fn injected_error(call: &HostCall) -> ExportError {
    let reason = "injected failure".to_string();
    match call {
        HostCall::CreateObjectUrl { file_name } => ExportError::ResourceCreation {
            file_name: file_name.clone(),
            reason,
        },
        HostCall::TriggerDownload { file_name, .. } => ExportError::Download {
            file_name: file_name.clone(),
            reason,
        },
        HostCall::Navigate { .. } | HostCall::RevokeObjectUrl { .. } => {
            ExportError::Navigation(reason)
        }
        HostCall::OpenNewContext { .. } => ExportError::OpenContext(reason),
    }
}

impl PageHost for MockPageHost {
    fn create_object_url(&self, file: &ContactFile) -> ExportResult<String> {
        self.track(HostCall::CreateObjectUrl {
            file_name: file.file_name.clone(),
        })?;

        let mut files = self.files.lock().unwrap();
        let url = format!("blob:mock/{}", files.len() + 1);
        files.insert(url.clone(), file.clone());
        Ok(url)
    }

    fn revoke_object_url(&self, url: &str) {
        let _ = self.track(HostCall::RevokeObjectUrl {
            url: url.to_string(),
        });
        self.files.lock().unwrap().remove(url);
    }

    fn navigate(&self, url: &str) -> ExportResult<()> {
        self.track(HostCall::Navigate {
            url: url.to_string(),
        })
    }

    fn trigger_download(&self, url: &str, file_name: &str) -> ExportResult<()> {
        self.track(HostCall::TriggerDownload {
            url: url.to_string(),
            file_name: file_name.to_string(),
        })
    }

    fn open_new_context(&self, url: &str) -> ExportResult<()> {
        self.track(HostCall::OpenNewContext {
            url: url.to_string(),
        })
    }
}
