use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use anyhow::Context;
use once_cell::sync::Lazy;
use tracing_actix_web::TracingLogger;

use portfolio_api::{
    constants::START_TIME,
    cors::build_cors,
    db::sqlite::create_pool,
    graceful_shutdown::shutdown_signal,
    routes::configure_routes,
    settings::AppConfig,
    telemetry::init_tracing,
    AppState,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::new().context("Configuration error")?;
    init_tracing(&config);
    Lazy::force(&START_TIME);

    tracing::info!("Loaded configuration: {:?}", config);

    let pool = create_pool(&config.database_url)
        .await
        .context("Failed to open the database")?;

    let app_state = web::Data::new(AppState::new(pool.clone()));

    if config.seed_on_start {
        app_state.portfolio_handler
            .seed()
            .await
            .context("Failed to seed fixture data")?;
    }

    let server_addr = config.server_addr();
    let cors_origins = config.cors_origins();

    tracing::info!(
        "🚀 Starting {} v{} on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(build_cors(&cors_origins))
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .disable_signals()
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {}", server_addr))?
    .run();

    let handle = server.handle();
    actix_rt::spawn(async move {
        shutdown_signal().await;
        handle.stop(true).await;
    });

    server.await.context("Server error")?;

    pool.close().await;
    tracing::info!("Database closed, bye.");
    Ok(())
}
