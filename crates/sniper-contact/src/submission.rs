//! Contact form data and the events that mutate it.

use serde::{Deserialize, Serialize};

/// The contact form's current field values.
///
/// Lives only for one form interaction: built empty, edited field by field,
/// reset after a successful send.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// Sender's full name.
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    /// Sender's email address.
    #[serde(default)]
    pub email: String,
    /// Free-form message.
    #[serde(default)]
    pub message: String,
    /// Decoy field, hidden from people. Posted as `company`.
    #[serde(rename = "company", default)]
    pub honeypot: String,
}

impl ContactSubmission {
    /// Create an empty submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a submission from the three visible fields.
    pub fn with_fields(
        full_name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            message: message.into(),
            honeypot: String::new(),
        }
    }

    /// Set the decoy field.
    pub fn with_honeypot(mut self, value: impl Into<String>) -> Self {
        self.honeypot = value.into();
        self
    }

    /// Read a field.
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FullName => &self.full_name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
            ContactField::Honeypot => &self.honeypot,
        }
    }

    /// Overwrite a field.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::FullName => &mut self.full_name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
            ContactField::Honeypot => &mut self.honeypot,
        };
        *slot = value.into();
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when every field is empty.
    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// A named contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactField {
    #[serde(rename = "fullName")]
    FullName,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "message")]
    Message,
    #[serde(rename = "company")]
    Honeypot,
}

impl ContactField {
    /// Every field, in form order.
    pub const ALL: [ContactField; 4] = [
        ContactField::Honeypot,
        ContactField::FullName,
        ContactField::Email,
        ContactField::Message,
    ];

    /// The form control name.
    pub fn name(&self) -> &'static str {
        match self {
            ContactField::FullName => "fullName",
            ContactField::Email => "email",
            ContactField::Message => "message",
            ContactField::Honeypot => "company",
        }
    }

    /// Look up a field by its form control name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// Input to the contact form state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A field's value changed.
    FieldChanged { field: ContactField, value: String },
    /// The user pressed submit.
    SubmitRequested,
}

impl FormEvent {
    /// Build a `FieldChanged` event.
    pub fn changed(field: ContactField, value: impl Into<String>) -> Self {
        FormEvent::FieldChanged {
            field,
            value: value.into(),
        }
    }
}
