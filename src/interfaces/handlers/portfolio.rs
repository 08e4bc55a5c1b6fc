use actix_web::{http::StatusCode, web, HttpResponse};

use crate::{
    contract::{self, CreateMessage, Endpoint, ListExperiences, ListProjects, ListSkills},
    entities::message::NewMessage,
    errors::AppError,
    AppState,
};

/// Checks `value` against the endpoint's schema and wraps it with the
/// endpoint's success status.
fn respond<E: Endpoint>(value: E::Response) -> Result<HttpResponse, AppError> {
    let value = contract::checked::<E>(value)?;
    let status = StatusCode::from_u16(E::SUCCESS_STATUS)
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    Ok(HttpResponse::build(status).json(value))
}

pub async fn get_projects(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let projects = state.portfolio_handler.projects().await?;
    respond::<ListProjects>(projects)
}

pub async fn get_skills(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let skills = state.portfolio_handler.skills().await?;
    respond::<ListSkills>(skills)
}

pub async fn get_experiences(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let experiences = state.portfolio_handler.experiences().await?;
    respond::<ListExperiences>(experiences)
}

pub async fn create_message(
    state: web::Data<AppState>,
    form: web::Json<NewMessage>,
) -> Result<HttpResponse, AppError> {
    let message = state.portfolio_handler
        .send_message(form.into_inner()).await?;

    respond::<CreateMessage>(message)
}
