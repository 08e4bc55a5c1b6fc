pub mod contract;
pub mod handlers;
pub mod repositories;
pub mod routes;
