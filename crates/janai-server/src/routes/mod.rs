//! JanAI API Routes
//!
//! - /api/chatbot - Monitoring assistant (two-phase completion)
//! - /health - Liveness probe
//! - /swagger-ui - OpenAPI documentation

pub mod chatbot;
pub mod swagger;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::AppState;

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "JanAI API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// CORS policy: one exact origin, GET/POST/OPTIONS, Content-Type/Authorization
pub fn cors_layer(origin: &str) -> Result<CorsLayer, header::InvalidHeaderValue> {
    let origin = HeaderValue::from_str(origin)?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::exact(origin))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}

/// Build the full router. Preflight requests are answered by the CORS layer
/// before any route logic runs.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let openapi = swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(chatbot::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
