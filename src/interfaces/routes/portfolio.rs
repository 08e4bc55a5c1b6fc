use actix_web::{web, Route};

use crate::{
    contract::{CreateMessage, Endpoint, HttpMethod, ListExperiences, ListProjects, ListSkills},
    handlers::{home::method_not_allowed, portfolio},
};

/// Route guard for the endpoint's declared method.
fn method<E: Endpoint>() -> Route {
    match E::METHOD {
        HttpMethod::Get => web::get(),
        HttpMethod::Post => web::post(),
    }
}

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(ListProjects::PATH)
            .route(method::<ListProjects>().to(portfolio::get_projects))
            .default_service(web::to(method_not_allowed))
    )
    .service(
        web::resource(ListSkills::PATH)
            .route(method::<ListSkills>().to(portfolio::get_skills))
            .default_service(web::to(method_not_allowed))
    )
    .service(
        web::resource(ListExperiences::PATH)
            .route(method::<ListExperiences>().to(portfolio::get_experiences))
            .default_service(web::to(method_not_allowed))
    )
    .service(
        web::resource(CreateMessage::PATH)
            .route(method::<CreateMessage>().to(portfolio::create_message))
            .default_service(web::to(method_not_allowed))
    );
}
