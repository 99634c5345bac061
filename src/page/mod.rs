//! Access to the card page.
//!
//! The runtime never walks markup directly: contact fields are read through
//! [`PageFieldReader`] and the cosmetic structure through [`PageLayout`].
//! [`HtmlPage`] implements both over a parsed HTML document; tests supply
//! their own doubles.

mod html_page;
mod traits;

pub use html_page::{field_ids, HtmlPage};
pub use traits::{AnimatedElement, PageFieldReader, PageLayout};
