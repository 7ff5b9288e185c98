//! Contact-form field validation.
//!
//! Standalone collaborator predicates—pure input checks with no engine
//! dependency. Each function answers "does this field pass?" and nothing
//! else; messaging and display belong to the caller.

use once_cell::sync::Lazy;
use regex::Regex;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z\s]+$").expect("valid name pattern"));

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Letters and spaces only, starting with a letter, at least 2 characters.
pub fn is_valid_name(value: &str) -> bool {
    NAME_RE.is_match(value.trim())
}

/// Simple `local@domain.tld` shape: one `@`, a dot in the domain, no
/// whitespace. Deliberately not RFC 5322.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

/// At least 6 characters.
pub fn is_valid_password(value: &str) -> bool {
    value.chars().count() >= 6
}

/// At least 10 characters after trimming.
pub fn is_valid_message(value: &str) -> bool {
    value.trim().chars().count() >= 10
}

/// The terms box must be checked.
pub fn terms_accepted(checked: bool) -> bool {
    checked
}
