mod domain;
mod interfaces;
mod infrastructure;
pub mod client;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod telemetry;

pub use domain::{entities, fixtures, use_cases, validation};
pub use interfaces::{contract, handlers, repositories, routes};
pub use infrastructure::{cors, db};

use repositories::sqlx_repo::SqlxPortfolioRepo;
use use_cases::portfolio::PortfolioHandler;

/// Shared by every worker. The storage handle is built by the caller and
/// injected here; nothing in the crate holds a global connection.
pub struct AppState {
    pub portfolio_handler: AppPortfolioHandler,
}

pub type AppPortfolioHandler = PortfolioHandler<SqlxPortfolioRepo>;

impl AppState {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        let portfolio_repo = SqlxPortfolioRepo::new(pool);
        let portfolio_handler = PortfolioHandler::new(portfolio_repo);

        AppState { portfolio_handler }
    }
}
