use serde::{Deserialize, Serialize};
use validator::Validate;

pub const COLUMNS: &[&str] = &["id", "role", "company", "duration", "description"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, sqlx::FromRow)]
pub struct Experience {
    #[validate(range(min = 1, message = "Id must be a positive integer"))]
    pub id: i64,

    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,

    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,

    /// Free-text range label such as "2021 - 2023".
    #[validate(length(min = 1, message = "Duration is required"))]
    pub duration: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
}
