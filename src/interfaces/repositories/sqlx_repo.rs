use sqlx::SqlitePool;

#[derive(Clone)]
pub struct SqlxPortfolioRepo {
    pub pool: SqlitePool,
}
