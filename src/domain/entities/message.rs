use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{contact_email, ValidationFailure};

pub const COLUMNS: &[&str] = &["id", "name", "email", "message", "created_at"];

/// Fields a visitor supplies; everything else is assigned by the store.
pub const INPUT_FIELDS: &[&str] = &["name", "email", "message"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[validate(range(min = 1, message = "Id must be a positive integer"))]
    pub id: i64,

    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,

    #[validate(custom(function = "contact_email"))]
    pub email: String,

    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,

    pub created_at: DateTime<Utc>,
}

/// Raw contact form input. Missing fields deserialize as empty strings so
/// they are reported by the validator rather than the JSON extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewMessage {
    #[serde(default)]
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = "contact_email"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
}

impl NewMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        NewMessage {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Trims surrounding whitespace from every field.
    pub fn normalized(self) -> Self {
        NewMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// Normalizes and checks every rule, collecting all failures.
    pub fn into_validated(self) -> Result<ValidatedMessage, ValidationFailure> {
        let input = self.normalized();

        match input.validate() {
            Ok(()) => Ok(ValidatedMessage {
                name: input.name,
                email: input.email,
                message: input.message,
            }),
            Err(errors) => Err(ValidationFailure::from_errors(&errors, INPUT_FIELDS)),
        }
    }
}

/// A contact message that passed validation. The storage layer only
/// accepts this type.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedMessage {
    name: String,
    email: String,
    message: String,
}

impl ValidatedMessage {
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

impl From<ValidatedMessage> for NewMessage {
    fn from(validated: ValidatedMessage) -> Self {
        NewMessage {
            name: validated.name,
            email: validated.email,
            message: validated.message,
        }
    }
}
