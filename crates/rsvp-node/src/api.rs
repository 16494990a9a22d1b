//! HTTP API for the RSVP node.
//!
//! Builds the router and the state shared by every handler.

use axum::{response::IntoResponse, routing::get, Json, Router};
use rsvp_registry::GuestRegistry;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::guest_api::guest_routes;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Guest registry.
    pub registry: Arc<GuestRegistry>,
}

impl AppState {
    /// Creates state around an existing registry.
    pub fn new(registry: Arc<GuestRegistry>) -> Self {
        Self { registry }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(GuestRegistry::new()))
    }
}

/// Creates the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(guest_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
