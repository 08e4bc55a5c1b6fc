#![allow(dead_code)]

use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use portfolio_api::{
    client::PortfolioClient,
    db::sqlite::create_pool,
    entities::message::NewMessage,
    routes::configure_routes,
    AppState,
};
use reqwest::Client;
use std::{net::TcpListener, time::Duration};

pub struct TestApp {
    pub state: web::Data<AppState>,
    pub address: String,
    pub client: Client,
}

impl TestApp {
    /// Starts the API on an ephemeral port over a fresh in-memory store.
    pub async fn spawn() -> Self {
        Self::spawn_with(true).await
    }

    pub async fn spawn_unseeded() -> Self {
        Self::spawn_with(false).await
    }

    async fn spawn_with(seed: bool) -> Self {
        let pool = create_pool("sqlite::memory:")
            .await
            .expect("Failed to create test DB pool");

        let state = web::Data::new(AppState::new(pool));
        if seed {
            state.portfolio_handler
                .seed()
                .await
                .expect("Failed to seed test DB");
        }

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let server_state = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(server_state.clone())
                .wrap(NormalizePath::trim())
                .configure(configure_routes)
        })
        .listen(listener)
        .expect("Failed to bind server")
        .workers(1)
        .disable_signals()
        .run();

        tokio::spawn(server);

        let client = Client::new();
        while client.get(&format!("{}/health", address)).send().await.is_err() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        Self {
            state,
            address,
            client,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub fn api_client(&self) -> PortfolioClient {
        PortfolioClient::new(&self.address).expect("Failed to build API client")
    }

    pub async fn post_message(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url("/messages"))
            .json(body)
            .send()
            .await
            .expect("Failed to post message")
    }

    pub async fn count_messages(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM messages")
            .fetch_one(&self.state.portfolio_handler.repo.pool)
            .await
            .expect("Failed to count messages")
    }
}

pub fn valid_message() -> NewMessage {
    NewMessage::new("Jo", "jo@x.com", "Hello there, interested!")
}
