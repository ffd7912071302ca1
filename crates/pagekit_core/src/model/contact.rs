//! Contact record model.
//!
//! # Invariants
//! - `id` is generated once and never reused for another contact.
//! - Stored contacts hold trimmed field values.
//! - Id-less legacy rows are upgraded by the store, not by `Contact` itself.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of one contact row.
pub type ContactId = Uuid;

/// One row of the contact table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Contact {
    /// Creates a contact with a generated stable ID.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), name, email, phone)
    }

    /// Creates a contact with a caller-provided ID.
    pub fn with_id(
        id: ContactId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

/// Raw form input as typed by the user, before trimming or validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Returns the input value of one field, untrimmed.
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
        }
    }

    /// Builds a new contact from the trimmed field values.
    ///
    /// Does not validate; callers run `validation::form::validate` first.
    pub fn normalized(&self) -> Contact {
        Contact::new(self.name.trim(), self.email.trim(), self.phone.trim())
    }
}

/// Form fields in display and validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [Self::Name, Self::Email, Self::Phone];

    /// Stable field key used by presentation layers (`name-error` etc.).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

/// Sample rows installed when storage holds no contacts.
pub fn seed_contacts() -> Vec<Contact> {
    vec![
        Contact::new("Иван Иванов", "ivan@example.com", "+7 (999) 123-45-67"),
        Contact::new("Мария Петрова", "maria@example.ru", "+7 (999) 234-56-78"),
        Contact::new("Алексей Сидоров", "alex@example.com", "+7 (999) 345-67-89"),
    ]
}
