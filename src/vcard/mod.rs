//! vCard rendering of a contact record.
//!
//! The card always produces the same fixed line schema. Two dialects exist:
//! [`VCardDialect::Strict`] escapes structural characters and ends lines with
//! CRLF; [`VCardDialect::Legacy`] substitutes values verbatim with LF line
//! endings, matching files produced by older versions of the card.

mod render;

pub use render::{render_vcard, ContactFile, VCardDialect, VCARD_MIME_TYPE};
