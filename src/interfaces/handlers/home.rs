use actix_web::{get, HttpRequest, HttpResponse, Responder};

use crate::{
    contract::{CreateMessage, Endpoint, ListExperiences, ListProjects, ListSkills},
    errors::AppError,
};

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to the Portfolio API!",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            format!("GET {}", ListProjects::PATH),
            format!("GET {}", ListSkills::PATH),
            format!("GET {}", ListExperiences::PATH),
            format!("POST {}", CreateMessage::PATH),
            "GET /health".to_string(),
        ]
    }))
}

pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound(format!("No route for {} {}", req.method(), req.path())))
}

/// Fallback for a known path hit with a method it does not serve.
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed(format!(
        "Method {} is not allowed on {}",
        req.method(),
        req.path()
    )))
}
