//! Contact draft validation.

use folio_domain::constants::MIN_MESSAGE_LEN;
use folio_domain::{ContactDraft, ContactField};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_INVALID: &str = "Valid email is required";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters";

/// Field-level validation messages, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(ContactField, &'static str)>);

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, msg)| *msg)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &'static str)> + '_ {
        self.0.iter().copied()
    }

    pub fn clear(&mut self, field: ContactField) {
        self.0.retain(|(f, _)| *f != field);
    }

    fn push(&mut self, field: ContactField, message: &'static str) {
        self.0.push((field, message));
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Checks every field and collects all failures.
///
/// # Errors
/// Returns the collected [`FieldErrors`] when at least one field is invalid.
pub fn validate(draft: &ContactDraft) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if draft.name.trim().is_empty() {
        errors.push(ContactField::Name, NAME_REQUIRED);
    }
    if !is_valid_email(&draft.email) {
        errors.push(ContactField::Email, EMAIL_INVALID);
    }
    if draft.message.trim().is_empty() || draft.message.chars().count() < MIN_MESSAGE_LEN {
        errors.push(ContactField::Message, MESSAGE_TOO_SHORT);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, message: &str) -> ContactDraft {
        ContactDraft { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() }
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("john@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.co"));
        assert!(!is_valid_email("john@example"));
        assert!(!is_valid_email("john example@x.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn accepts_complete_draft() {
        assert_eq!(validate(&draft("John", "john@example.com", "Hello there!")), Ok(()));
    }

    #[test]
    fn collects_every_failure_in_field_order() {
        let errors = validate(&draft("   ", "nope", "short")).expect_err("invalid");
        let fields: Vec<ContactField> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, [ContactField::Name, ContactField::Email, ContactField::Message]);
        assert_eq!(errors.get(ContactField::Email), Some(EMAIL_INVALID));
        assert_eq!(
            errors.to_string(),
            "name: Name is required; email: Valid email is required; \
             message: Message must be at least 10 characters"
        );
    }

    #[test]
    fn message_length_counts_characters() {
        assert!(validate(&draft("A", "a@b.io", "ééééééééé")).is_err());
        assert!(validate(&draft("A", "a@b.io", "éééééééééé")).is_ok());
        assert!(validate(&draft("A", "a@b.io", "          ")).is_err());
    }

    #[test]
    fn clearing_a_field_error() {
        let mut errors = validate(&draft("", "", "")).expect_err("invalid");
        errors.clear(ContactField::Email);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(ContactField::Email), None);
    }
}
