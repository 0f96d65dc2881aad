use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

const MAX_NAME_LEN: usize = 100;
const MAX_EMAIL_LEN: usize = 255;
const MAX_MESSAGE_LEN: usize = 5000;

/// A stored contact-form message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactValidationError {
    #[error("Name is required")]
    EmptyName,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Message is required")]
    EmptyMessage,

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

/// Validated contact form. The same payload is stored and forwarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    name: String,
    email: String,
    message: String,
}

fn bounded(field: &'static str, value: &str, max: usize) -> Result<(), ContactValidationError> {
    if value.chars().count() > max {
        Err(ContactValidationError::TooLong { field, max })
    } else {
        Ok(())
    }
}

impl ContactSubmission {
    pub fn new(name: &str, email: &str, message: &str) -> Result<Self, ContactValidationError> {
        let name = name.trim();
        let email = email.trim();
        let message = message.trim();

        if name.is_empty() {
            return Err(ContactValidationError::EmptyName);
        }
        bounded("name", name, MAX_NAME_LEN)?;

        if EmailAddress::from_str(email).is_err() {
            return Err(ContactValidationError::InvalidEmail);
        }
        bounded("email", email, MAX_EMAIL_LEN)?;

        if message.is_empty() {
            return Err(ContactValidationError::EmptyMessage);
        }
        bounded("message", message, MAX_MESSAGE_LEN)?;

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_fields() {
        let s = ContactSubmission::new("  Ana ", " ana@example.com ", " Hello ").unwrap();
        assert_eq!(s.name(), "Ana");
        assert_eq!(s.email(), "ana@example.com");
        assert_eq!(s.message(), "Hello");
    }

    #[test]
    fn rejects_each_bad_field() {
        assert_eq!(
            ContactSubmission::new(" ", "a@b.co", "hi"),
            Err(ContactValidationError::EmptyName)
        );
        assert_eq!(
            ContactSubmission::new("Ana", "nope", "hi"),
            Err(ContactValidationError::InvalidEmail)
        );
        assert_eq!(
            ContactSubmission::new("Ana", "a@b.co", "   "),
            Err(ContactValidationError::EmptyMessage)
        );
    }

    #[test]
    fn rejects_oversized_message() {
        let long = "x".repeat(MAX_MESSAGE_LEN + 1);
        assert_eq!(
            ContactSubmission::new("Ana", "a@b.co", &long),
            Err(ContactValidationError::TooLong {
                field: "message",
                max: MAX_MESSAGE_LEN
            })
        );
    }

    #[test]
    fn serializes_as_the_forwarded_payload() {
        let s = ContactSubmission::new("Ana", "a@b.co", "hi").unwrap();
        assert_eq!(
            serde_json::to_value(&s).unwrap(),
            serde_json::json!({"name": "Ana", "email": "a@b.co", "message": "hi"})
        );
    }
}
