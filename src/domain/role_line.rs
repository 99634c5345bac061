//! RoleLine value object.

/// Separator between a job title and the organization in a composite line.
pub const ROLE_SEPARATOR: &str = " at ";

/// A "title at organization" line split into its two parts.
///
/// The line is split once, on the first [`ROLE_SEPARATOR`]: the prefix is the
/// title and the whole suffix is the organization.
///
/// # Example
///
/// ```
/// use ecard::domain::RoleLine;
///
/// let role = RoleLine::parse("Engineer at Acme");
/// assert_eq!(role.title(), "Engineer");
/// assert_eq!(role.organization(), "Acme");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoleLine {
    title: String,
    organization: String,
}

impl RoleLine {
    /// Split a composite line. Without a separator the whole line is the title.
    pub fn parse(text: &str) -> Self {
        match text.split_once(ROLE_SEPARATOR) {
            Some((title, organization)) => Self {
                title: title.to_string(),
                organization: organization.to_string(),
            },
            None => Self {
                title: text.to_string(),
                organization: String::new(),
            },
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Consume the line, returning `(title, organization)`.
    pub fn into_parts(self) -> (String, String) {
        (self.title, self.organization)
    }
}
