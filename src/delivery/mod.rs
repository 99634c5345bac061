//! Delivery of contact files and links to the visitor.
//!
//! [`PageHost`] is the browser-side capability set (resource URLs,
//! navigation, downloads, new browsing contexts). A [`DeliveryStrategy`] is
//! resolved once at startup from the client environment and decides how a
//! contact file reaches the visitor.

mod environment;
mod host;
mod local_host;
mod strategy;

pub use environment::{resolve_delivery, ClientEnvironment};
pub use host::PageHost;
pub use local_host::LocalHost;
pub use strategy::{
    data_uri, AnchorDownloadDelivery, Delivery, DeliveryStrategy, NavigationDelivery,
    REVOKE_DELAY,
};
