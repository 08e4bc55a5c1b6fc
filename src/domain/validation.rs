use std::fmt;

use serde::{Deserialize, Serialize};
use validator::{ValidateEmail, ValidationError, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Every field that failed validation, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub errors: Vec<FieldError>,
}

impl ValidationFailure {
    /// Flattens `validator` output into field errors.
    ///
    /// `field_order` lists the struct's fields (snake_case) in declaration
    /// order; fields it does not name sort last, alphabetically.
    pub fn from_errors(errors: &ValidationErrors, field_order: &[&str]) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|(a, _), (b, _)| {
            let rank = |name: &str| field_order.iter().position(|f| *f == name).unwrap_or(usize::MAX);
            rank(&**a).cmp(&rank(&**b)).then_with(|| a.cmp(b))
        });

        let errors = fields
            .into_iter()
            .flat_map(|(field, errors)| {
                let field = camel_case(&field);
                errors.iter().map(move |e| FieldError {
                    field: field.clone(),
                    message: e
                        .message
                        .as_ref()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                })
            })
            .collect();

        ValidationFailure { errors }
    }

    /// Prefixes every field with `[index].`, for elements of a list.
    pub fn at_index(self, index: usize) -> Self {
        let errors = self
            .errors
            .into_iter()
            .map(|e| FieldError {
                field: format!("[{index}].{}", e.field),
                message: e.message,
            })
            .collect();

        ValidationFailure { errors }
    }

    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", summarize(&self.errors))
    }
}

impl std::error::Error for ValidationFailure {}

/// Joins field messages into one sentence-per-field string for display.
pub fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(". ")
}

/// Email rule for contact input: RFC-shaped local part, and a dotted
/// domain ending in an alphabetic label of at least two characters.
pub fn contact_email(value: &str) -> Result<(), ValidationError> {
    let has_tld = value
        .rsplit_once('@')
        .and_then(|(_, domain)| domain.rsplit_once('.'))
        .is_some_and(|(host, tld)| {
            !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
        });

    if value.validate_email() && has_tld {
        Ok(())
    } else {
        Err(ValidationError::new("email").with_message("Please enter a valid email address".into()))
    }
}

pub(crate) fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;

    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
