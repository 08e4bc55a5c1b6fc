use std::fmt;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use sqlx::error::ErrorKind;

use crate::contract::ErrorBody;
use crate::validation::{summarize, FieldError, ValidationFailure};

/// Message returned to callers for any server-side fault.
pub const GENERIC_FAILURE: &str = "Something went wrong on our end. Please try again later.";

#[derive(Debug)]
pub enum AppError {
    ValidationError(Vec<FieldError>),
    PersistenceError(String),
    NotFound(String),
    MethodNotAllowed(String),
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(errors) => write!(f, "{}", summarize(errors)),
            AppError::PersistenceError(msg) => write!(f, "Persistence error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::MethodNotAllowed(msg) => write!(f, "Method not allowed: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal server error: {}", msg)
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::ValidationError(errors) => ErrorBody {
                message: self.to_string(),
                errors: errors.clone(),
            },
            AppError::NotFound(msg) | AppError::MethodNotAllowed(msg) => ErrorBody::new(msg.clone()),
            AppError::PersistenceError(_) | AppError::InternalError(_) => {
                ErrorBody::new(GENERIC_FAILURE)
            }
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::PersistenceError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationFailure> for AppError {
    fn from(failure: ValidationFailure) -> Self {
        AppError::ValidationError(failure.errors)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(e) if !matches!(e.kind(), ErrorKind::Other) => {
                AppError::PersistenceError(format!("Constraint violation: {}", e.message()))
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                AppError::PersistenceError(format!("Store unavailable: {}", err))
            }
            _ => AppError::PersistenceError(format!("Database error: {}", err))
        }
    }
}
