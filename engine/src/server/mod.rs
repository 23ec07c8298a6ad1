//! HTTP API Server
//!
//! REST boundary over the build pipeline and the site store.
//!
//! # Endpoints
//!
//! - GET  /health - Liveness check
//! - POST /api/build - Build a website from a requirement
//! - GET  /api/websites - List generated websites
//! - GET  /api/websites/:id - Get a stored website artifact
//!
//! Builds triggered by concurrent requests are fully independent; the
//! handlers share only the builder and store handles.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use crate::agent::WebsiteBuilder;
use crate::storage::SiteStore;
use sdk::types::{BuildRequest, WebsiteArtifact};

/// API server state shared across handlers
#[derive(Clone)]
pub struct ServerState {
    pub builder: Arc<WebsiteBuilder>,
    pub store: Arc<SiteStore>,
}

/// Build the API router
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/build", post(build_handler))
        .route("/api/websites", get(list_websites_handler))
        .route("/api/websites/:id", get(get_website_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve the API until a shutdown signal arrives
pub async fn serve(addr: &str, state: ServerState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("API server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    info!("Shutdown signal received, API server stopping");
}

/// Liveness check
async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "service": "sitewright" }))
}

/// Build a website and persist the result
async fn build_handler(
    State(state): State<ServerState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>, Response> {
    let request: BuildRequest = serde_json::from_value(payload).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Requirements are required"})),
        )
            .into_response()
    })?;

    if request.requirements.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Requirements are required"})),
        )
            .into_response());
    }

    info!("Build request received: {}", request.requirements);

    let website = state
        .builder
        .build_website(&request.requirements)
        .await
        .map_err(|e| {
            error!("Build failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to build website",
                    "details": e.to_string(),
                })),
            )
                .into_response()
        })?;

    let output_path = state.store.save(&website).map_err(|e| {
        error!("Failed to persist website: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Failed to build website",
                "details": e.to_string(),
            })),
        )
            .into_response()
    })?;

    Ok(Json(json!({
        "success": true,
        "website": website,
        "outputPath": output_path.display().to_string(),
    })))
}

/// List generated websites
async fn list_websites_handler(State(state): State<ServerState>) -> Json<serde_json::Value> {
    Json(json!({ "sites": state.store.list() }))
}

/// Get a stored website artifact by id
async fn get_website_handler(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<WebsiteArtifact>, Response> {
    state.store.load(&id).map(Json).map_err(|_| {
        (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Website not found"})),
        )
            .into_response()
    })
}
