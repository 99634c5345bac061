//! Fire-and-forget delayed steps.

use futures::future::join_all;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Tracker for delayed callbacks.
///
/// Steps are never cancelled and run in delay order relative to each other.
/// Handles are kept only so [`Deferred::settle`] can wait for everything that
/// is still pending. Cloning shares the same tracker.
#[derive(Clone, Default)]
pub struct Deferred {
    pending: Arc<Mutex<Vec<JoinHandle<()>>>>,
}

impl Deferred {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `step` after `delay` on a spawned task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn after<F>(&self, delay: Duration, step: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            step();
        });

        if let Ok(mut pending) = self.pending.lock() {
            pending.retain(|handle| !handle.is_finished());
            pending.push(handle);
        }
    }

    /// Number of steps that have not run yet.
    pub fn pending(&self) -> usize {
        self.pending
            .lock()
            .map(|pending| pending.iter().filter(|h| !h.is_finished()).count())
            .unwrap_or(0)
    }

    /// Wait until every scheduled step, including steps scheduled by other
    /// steps, has run.
    pub async fn settle(&self) {
        loop {
            let batch: Vec<JoinHandle<()>> = match self.pending.lock() {
                Ok(mut pending) => pending.drain(..).collect(),
                Err(_) => return,
            };

            if batch.is_empty() {
                return;
            }

            for result in join_all(batch).await {
                if let Err(e) = result {
                    tracing::error!("Deferred step failed: {}", e);
                }
            }
        }
    }
}
