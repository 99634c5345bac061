//! PersonName value object.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Suffix appended to the slug of downloaded contact files.
pub const FILE_SLUG_SUFFIX: &str = "-contact";

/// A display name as printed on the card.
///
/// The last whitespace-separated token is the family name and the remaining
/// tokens, joined by single spaces, are the given name. A single-token name
/// is all given name.
///
/// # Example
///
/// ```
/// use ecard::domain::PersonName;
///
/// let name = PersonName::new("John Smith");
/// assert_eq!(name.family_name(), "Smith");
/// assert_eq!(name.given_name(), "John");
/// assert_eq!(name.file_slug(), "john-smith-contact");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    full: String,
    given: String,
    family: String,
}

impl PersonName {
    pub fn new(full: impl Into<String>) -> Self {
        let full = full.into();
        let mut tokens: Vec<&str> = full.split_whitespace().collect();

        let (given, family) = match tokens.len() {
            0 => (String::new(), String::new()),
            1 => (tokens[0].to_string(), String::new()),
            _ => {
                let family = tokens.pop().unwrap_or_default().to_string();
                (tokens.join(" "), family)
            }
        };

        Self {
            full,
            given,
            family,
        }
    }

    /// The name exactly as printed.
    pub fn as_str(&self) -> &str {
        &self.full
    }

    pub fn given_name(&self) -> &str {
        &self.given
    }

    pub fn family_name(&self) -> &str {
        &self.family
    }

    /// Lowercased name with whitespace runs replaced by `-`, suffixed `-contact`.
    pub fn file_slug(&self) -> String {
        let lowered = self.full.to_lowercase();
        format!(
            "{}{}",
            WHITESPACE_RUN.replace_all(&lowered, "-"),
            FILE_SLUG_SUFFIX
        )
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_token_name() {
        let name = PersonName::new("John Smith");
        assert_eq!(name.given_name(), "John");
        assert_eq!(name.family_name(), "Smith");
    }

    #[test]
    fn test_multi_token_name() {
        let name = PersonName::new("M S  Kamran");
        assert_eq!(name.given_name(), "M S");
        assert_eq!(name.family_name(), "Kamran");
    }

    #[test]
    fn test_single_token_name() {
        let name = PersonName::new("Cher");
        assert_eq!(name.given_name(), "Cher");
        assert_eq!(name.family_name(), "");
    }

    #[test]
    fn test_empty_name() {
        let name = PersonName::new("");
        assert_eq!(name.given_name(), "");
        assert_eq!(name.family_name(), "");
        assert_eq!(name.file_slug(), "-contact");
    }

    #[test]
    fn test_file_slug() {
        assert_eq!(PersonName::new("John Smith").file_slug(), "john-smith-contact");
        assert_eq!(
            PersonName::new("Anna  Maria\tLopez").file_slug(),
            "anna-maria-lopez-contact"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", PersonName::new("John Smith")), "John Smith");
    }
}
