use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod adapters;
mod application;
mod config;
mod error;
mod models;
mod routes;

use adapters::{HttpMonitoringGateway, OpenAiCompletionClient};
use application::ChatService;
use config::ServerConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        // A missing .env is normal outside local development
        if !e.not_found() {
            eprintln!("Failed to load .env: {e}");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("JanAI API initializing...");

    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    tracing::info!(?config, "Configuration loaded");

    let completion = OpenAiCompletionClient::new(
        &config.openai_base_url,
        &config.openai_api_key,
        &config.model,
        config.http_timeout,
    )
    .context("Failed to build completion HTTP client")?;

    let gateway = HttpMonitoringGateway::new(&config.api_url, config.http_timeout)
        .context("Failed to build monitoring HTTP client")?;

    tracing::info!(model = %config.model, "Completion client initialized");

    let state = AppState {
        chat_service: Arc::new(ChatService::new(Arc::new(completion), Arc::new(gateway))),
    };

    let cors = routes::cors_layer(&config.cors_origin)
        .with_context(|| format!("Invalid CORS_ORIGIN: {}", config.cors_origin))?;

    let router = routes::build_router(state, cors);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("JanAI API running on http://{addr}");

    axum::serve(listener, router).await?;

    Ok(())
}
