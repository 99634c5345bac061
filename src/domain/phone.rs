//! Labeled phone numbers.
//!
//! The card prints phone numbers with a visible label ("Office: +1 555 ...").
//! The label is presentation only and is removed before the number is used.

/// Label in front of the office number on the card.
pub const OFFICE_LABEL: &str = "Office: ";

/// Label in front of the personal number on the card.
pub const PERSONAL_LABEL: &str = "Personal: ";

/// Remove `label` when the text starts with it; otherwise return the text as is.
///
/// # Example
///
/// ```
/// use ecard::domain::{strip_label, OFFICE_LABEL};
///
/// assert_eq!(strip_label("Office: +1 555 0100", OFFICE_LABEL), "+1 555 0100");
/// assert_eq!(strip_label("+1 555 0100", OFFICE_LABEL), "+1 555 0100");
/// ```
pub fn strip_label<'a>(text: &'a str, label: &str) -> &'a str {
    text.strip_prefix(label).unwrap_or(text)
}

/// Keep only ASCII digits, the form chat deep links expect.
pub fn digits_only(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_label_at_start() {
        assert_eq!(strip_label("Personal: 01711-000000", PERSONAL_LABEL), "01711-000000");
    }

    #[test]
    fn test_strip_label_only_at_start() {
        assert_eq!(
            strip_label("Call Office: 123", OFFICE_LABEL),
            "Call Office: 123"
        );
    }

    #[test]
    fn test_strip_label_needs_exact_label() {
        assert_eq!(strip_label("office: 123", OFFICE_LABEL), "office: 123");
        assert_eq!(strip_label("Office:123", OFFICE_LABEL), "Office:123");
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("+880 (171) 100-0000"), "8801711000000");
        assert_eq!(digits_only(""), "");
        assert_eq!(digits_only("no digits"), "");
    }

    #[test]
    fn test_digits_only_ignores_non_ascii_digits() {
        // Bengali digits are not part of a dialable deep link.
        assert_eq!(digits_only("০১৭ 12"), "12");
    }
}
