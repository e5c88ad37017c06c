//! Axum router configuration with middleware.
//!
//! Three chat routes plus a health check. Middleware: CORS locked to the
//! single configured origin (GET/POST/DELETE, Content-Type only) and
//! request tracing.

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
///
/// Fails if the configured allowed origin is not a valid header value.
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let origin: HeaderValue = state.config.server.allowed_origin.parse()?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Ok(Router::new()
        .route("/chatbot/query", post(handlers::chat::submit_query))
        .route(
            "/chatbot/history",
            get(handlers::chat::get_history).delete(handlers::chat::clear_history),
        )
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
