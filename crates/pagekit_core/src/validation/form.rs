//! Contact form validation.
//!
//! # Responsibility
//! - Check raw form input against presence and email-shape rules.
//! - Report every failing field at once so the form can show all errors.
//!
//! # Invariants
//! - Values are trimmed before any check.
//! - At most one error per field, ordered name, email, phone.
//! - Phone has no format rule beyond non-emptiness.

use crate::messages::field_error_message;
use crate::model::contact::{ContactField, ContactForm};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Why one field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldErrorKind {
    /// Empty after trimming.
    Required,
    /// Present but not `local@domain.tld`-shaped.
    InvalidFormat,
}

/// One rejected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldError {
    pub field: ContactField,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: ContactField, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }

    /// Localized inline message for this error.
    pub fn message(&self) -> &'static str {
        field_error_message(self.field, self.kind)
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let kind = match self.kind {
            FieldErrorKind::Required => "is required",
            FieldErrorKind::InvalidFormat => "has invalid format",
        };
        write!(f, "field `{}` {kind}", self.field.as_str())
    }
}

impl Error for FieldError {}

/// Outcome of validating one form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns field errors; empty when valid.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Returns the error for one field, if that field failed.
    pub fn error_for(&self, field: ContactField) -> Option<FieldErrorKind> {
        self.errors()
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.kind)
    }
}

/// Validates raw form input.
pub fn validate(form: &ContactForm) -> ValidationResult {
    let errors: Vec<FieldError> = ContactField::ALL
        .into_iter()
        .filter_map(|field| check_field(field, form.value(field).trim()))
        .collect();

    if errors.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(errors)
    }
}

/// Returns whether `value` is `local@domain.tld`-shaped.
///
/// Deliberately loose: not RFC 5322.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

fn check_field(field: ContactField, value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::new(field, FieldErrorKind::Required));
    }
    if field == ContactField::Email && !is_valid_email(value) {
        return Some(FieldError::new(field, FieldErrorKind::InvalidFormat));
    }
    None
}
