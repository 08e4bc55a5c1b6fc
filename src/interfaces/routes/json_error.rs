use actix_web::{
    web,
    http::StatusCode,
    ResponseError,
    HttpResponse,
    error::JsonPayloadError,
};

use crate::{constants::JSON_PAYLOAD_LIMIT, contract::ErrorBody};

/// Malformed or oversized JSON bodies answer with the same `{message}`
/// shape as validation failures.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(JSON_PAYLOAD_LIMIT)
            .error_handler(|err, _req| {
                tracing::debug!("Rejected JSON payload: {}", err);
                JsonError::from(err).into()
            })
    );
}

#[derive(Debug)]
pub struct JsonError {
    message: String,
    status: StatusCode
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status).json(ErrorBody::new(self.message.clone()))
    }
}

impl From<JsonPayloadError> for JsonError {
    fn from(err: JsonPayloadError) -> Self {
        match err {
            JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => JsonError {
                message: "Request body is too large".to_string(),
                status: StatusCode::PAYLOAD_TOO_LARGE,
            },
            JsonPayloadError::ContentType => JsonError {
                message: "Request body must be application/json".to_string(),
                status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
            },
            other => JsonError {
                message: format!("Invalid JSON payload: {}", other),
                status: StatusCode::BAD_REQUEST,
            },
        }
    }
}
