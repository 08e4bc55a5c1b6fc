use actix_web::web;

use crate::handlers::{home::{home, not_found}, system::health_check};

mod json_error;
mod portfolio;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.configure(portfolio::config_routes);
    cfg.configure(json_error::config_routes);

    cfg.default_service(web::to(not_found));
}
