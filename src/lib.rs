//! E-Card - a headless runtime for a digital business card page.
//!
//! This library reads the contact details printed on a card page, exports
//! them as a vCard, opens a prefilled chat link, and plays the page's
//! cosmetic behaviors against an injected style surface.
//!
//! # Architecture
//!
//! - **page**: Field reader and layout over the card's HTML
//! - **domain**: Text rules (role lines, phone labels, names)
//! - **models**: Contact record, notifications, theme
//! - **vcard**: Contact file rendering
//! - **delivery**: Browser capabilities and the delivery strategy
//! - **services**: Extraction, export, chat links, dark mode
//! - **notify**: Transient notification banners
//! - **effects**: Style changes, delayed steps, animations, hover
//! - **preferences**: The persisted preference store
//! - **card**: The global object wiring it all together

pub mod card;
pub mod config;
pub mod delivery;
pub mod domain;
pub mod effects;
pub mod error;
pub mod metrics;
pub mod models;
pub mod notify;
pub mod page;
pub mod preferences;
pub mod services;
pub mod vcard;

pub use card::{ECard, InitReport, PageContext};
pub use config::Config;
pub use delivery::{ClientEnvironment, Delivery, DeliveryStrategy, LocalHost, PageHost};
pub use error::{ConfigError, ExportError, PageError, PreferenceError};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{ContactRecord, Notification, NotificationKind, Theme};
pub use notify::{NotificationCenter, Notifier};
pub use page::{HtmlPage, PageFieldReader, PageLayout};
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use services::{ContactExporter, ExportOutcome, ProfileExtractor};
pub use vcard::{render_vcard, ContactFile, VCardDialect};
