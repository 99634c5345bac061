//! Contact export.
//!
//! Renders the record as a vCard and hands it to the delivery strategy
//! resolved at startup.

use crate::delivery::{Delivery, DeliveryStrategy};
use crate::metrics::Metrics;
use crate::models::{ContactRecord, NotificationKind};
use crate::notify::Notifier;
use crate::vcard::{render_vcard, VCardDialect};
use std::sync::Arc;

const SAVED_MESSAGE: &str = "Contact ready to be saved!";
const FAILED_MESSAGE: &str = "Error saving contact. Please try again.";

/// Result of an export as seen by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Delivered(Delivery),

    /// The fault was logged and reported to the visitor
    Failed,
}

impl ExportOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered(_))
    }
}

/// Exports contact records as downloadable vCards.
#[derive(Clone)]
pub struct ContactExporter {
    delivery: Arc<dyn DeliveryStrategy>,
    notifier: Arc<dyn Notifier>,
    dialect: VCardDialect,
    metrics: Metrics,
}

impl ContactExporter {
    pub fn new(
        delivery: Arc<dyn DeliveryStrategy>,
        notifier: Arc<dyn Notifier>,
        dialect: VCardDialect,
        metrics: Metrics,
    ) -> Self {
        Self {
            delivery,
            notifier,
            dialect,
            metrics,
        }
    }

    /// Export `record`, reporting exactly one notification either way.
    pub async fn export_contact(&self, record: &ContactRecord) -> ExportOutcome {
        let file = render_vcard(record, self.dialect);

        tracing::debug!(
            file_name = %file.file_name,
            strategy = self.delivery.name(),
            dialect = %self.dialect,
            "Exporting contact"
        );

        match self.delivery.deliver(&file).await {
            Ok(delivery) => {
                self.metrics.record_export(true);
                self.notifier.show(SAVED_MESSAGE, NotificationKind::Success);
                ExportOutcome::Delivered(delivery)
            }
            Err(e) => {
                tracing::error!("Error saving contact: {}", e);
                self.metrics.record_export(false);
                self.notifier.show(FAILED_MESSAGE, NotificationKind::Danger);
                ExportOutcome::Failed
            }
        }
    }
}
