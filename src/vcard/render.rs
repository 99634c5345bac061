use crate::domain::PersonName;
use crate::models::ContactRecord;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// MIME type of generated contact files.
pub const VCARD_MIME_TYPE: &str = "text/vcard;charset=utf-8";

/// File extension of generated contact files.
const VCARD_EXTENSION: &str = "vcf";

/// How field values are written into the contact file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VCardDialect {
    /// Escape `\`, `,`, `;` and line breaks in text values, keep URIs
    /// unescaped; CRLF line endings.
    #[default]
    Strict,

    /// Verbatim values; LF line endings.
    Legacy,
}

impl VCardDialect {
    fn line_ending(&self) -> &'static str {
        match self {
            Self::Strict => "\r\n",
            Self::Legacy => "\n",
        }
    }

    fn value<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        match self {
            Self::Strict => escape_text(raw),
            Self::Legacy => Cow::Borrowed(raw),
        }
    }

    /// URI values keep `,` and `;`; strict output only drops line breaks.
    fn uri<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        match self {
            Self::Strict if raw.contains(|c: char| c == '\r' || c == '\n') => {
                Cow::Owned(raw.chars().filter(|c| *c != '\r' && *c != '\n').collect())
            }
            _ => Cow::Borrowed(raw),
        }
    }
}

impl FromStr for VCardDialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "legacy" => Ok(Self::Legacy),
            other => Err(format!(
                "unknown vCard dialect '{}', expected 'strict' or 'legacy'",
                other
            )),
        }
    }
}

impl fmt::Display for VCardDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => f.write_str("strict"),
            Self::Legacy => f.write_str("legacy"),
        }
    }
}

/// Escape a text value: backslash, comma, semicolon and line breaks.
fn escape_text(raw: &str) -> Cow<'_, str> {
    if !raw.contains(|c: char| matches!(c, '\\' | ',' | ';' | '\n' | '\r')) {
        return Cow::Borrowed(raw);
    }

    let mut escaped = String::with_capacity(raw.len() + 8);
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ',' => escaped.push_str("\\,"),
            ';' => escaped.push_str("\\;"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                escaped.push_str("\\n");
            }
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// A rendered contact file ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFile {
    /// Download name, `<slug>.vcf`
    pub file_name: String,

    pub mime_type: &'static str,

    /// vCard text
    pub content: String,
}

impl ContactFile {
    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }
}

/// Render a contact record as a vCard 3.0 file.
///
/// # Example
///
/// ```
/// use ecard::models::ContactRecord;
/// use ecard::vcard::{render_vcard, VCardDialect};
///
/// let record = ContactRecord {
///     name: "John Smith".to_string(),
///     ..Default::default()
/// };
/// let file = render_vcard(&record, VCardDialect::Legacy);
/// assert!(file.content.contains("\nN:Smith;John;;;\n"));
/// assert_eq!(file.file_name, "john-smith-contact.vcf");
/// ```
pub fn render_vcard(record: &ContactRecord, dialect: VCardDialect) -> ContactFile {
    let name = PersonName::new(record.name.as_str());
    let v = |raw: &str| dialect.value(raw).into_owned();

    let lines = [
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("FN:{}", v(&record.name)),
        format!(
            "N:{};{};;;",
            v(name.family_name()),
            v(name.given_name())
        ),
        format!("ORG:{}", v(&record.organization)),
        format!("TITLE:{}", v(&record.title)),
        format!("TEL;TYPE=WORK,VOICE:{}", v(&record.office_phone)),
        format!("TEL;TYPE=CELL,VOICE:{}", v(&record.personal_phone)),
        format!("EMAIL:{}", v(&record.email)),
        format!("URL:{}", dialect.uri(&record.website)),
        format!("ADR;TYPE=WORK:;;{};;;", v(&record.address)),
        "END:VCARD".to_string(),
    ];

    let ending = dialect.line_ending();
    let mut content = lines.join(ending);
    if dialect == VCardDialect::Strict {
        content.push_str(ending);
    }

    ContactFile {
        file_name: format!("{}.{}", name.file_slug(), VCARD_EXTENSION),
        mime_type: VCARD_MIME_TYPE,
        content,
    }
}
