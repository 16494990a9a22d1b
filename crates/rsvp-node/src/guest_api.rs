//! # Guest API
//!
//! HTTP endpoints over the guest registry.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/api/guestList` | List guests with the head-count summary |
//! | GET | `/api/loadGuest?name=<name>` | Get one guest |
//! | POST | `/api/addGuest` | Invite a guest |
//! | POST | `/api/updateGuest` | Record a guest's answers |
//!
//! ## Errors
//!
//! Every rejected request answers `400 Bad Request` with the diagnostic as a
//! plain-text body, for example `required argument "host" was missing or invalid`.
//!
//! ## Example: Inviting a Guest
//!
//! ```bash
//! curl -X POST http://localhost:8088/api/addGuest \
//!   -H "Content-Type: application/json" \
//!   -d '{"name": "zhiyuan", "host": "James", "isFamily": true}'
//! ```
//!
//! ## Example: Recording Answers
//!
//! ```bash
//! curl -X POST http://localhost:8088/api/updateGuest \
//!   -H "Content-Type: application/json" \
//!   -d '{"name": "zhiyuan", "dietary": "none", "additional": true,
//!        "additionalName": "fx", "additionalDietary": "happy"}'
//! ```

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use rsvp_registry::{request, GuestRecord, RegistryError};
use serde::Serialize;
use serde_json::Value;

use crate::api::AppState;

/// Response for a fetched guest.
#[derive(Debug, Serialize)]
pub struct LoadGuestResponse {
    pub guest: GuestRecord,
}

/// Response for a successful invitation.
#[derive(Debug, Serialize)]
pub struct SavedResponse {
    pub saved: bool,
}

/// Response for a successful update.
#[derive(Debug, Serialize)]
pub struct UpdatedResponse {
    pub updated: bool,
}

/// Error wrapper turning registry rejections into HTTP responses.
#[derive(Debug)]
pub struct GuestApiError(RegistryError);

impl From<RegistryError> for GuestApiError {
    fn from(err: RegistryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for GuestApiError {
    fn into_response(self) -> axum::response::Response {
        tracing::warn!(kind = ?self.0.kind(), error = %self.0, "Request rejected");
        (StatusCode::BAD_REQUEST, self.0.to_string()).into_response()
    }
}

/// Creates the guest API routes.
pub fn guest_routes() -> Router<AppState> {
    Router::new()
        .route("/api/guestList", get(list_guests))
        .route("/api/loadGuest", get(load_guest))
        .route("/api/addGuest", post(add_guest))
        .route("/api/updateGuest", post(update_guest))
}

/// Lists all guests in invitation order.
async fn list_guests(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.registry.list())
}

/// Gets one guest by name.
async fn load_guest(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, GuestApiError> {
    let name = request::guest_name(&params)?;
    let guest = state.registry.get(name)?;
    Ok(Json(LoadGuestResponse { guest }))
}

/// Invites a guest.
async fn add_guest(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, GuestApiError> {
    let guest = state.registry.register_request(&request_body(&body))?;
    tracing::info!(name = %guest.name(), host = %guest.host(), "Guest invited");
    Ok(Json(SavedResponse { saved: true }))
}

/// Records a guest's answers.
async fn update_guest(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, GuestApiError> {
    let guest = state.registry.update_request(&request_body(&body))?;
    tracing::info!(name = %guest.name(), "Guest answers recorded");
    Ok(Json(UpdatedResponse { updated: true }))
}

/// Decodes a request body. Anything that is not JSON reads as a body with no
/// fields, so the first required field is reported missing.
fn request_body(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap_or(Value::Null)
}
