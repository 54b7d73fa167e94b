use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use serde_json::json;

use crate::adapters::http::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

async fn health(State(app_state): State<AppState>) -> impl IntoResponse {
    match app_state.waitlist_use_cases.check_health().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ok" }))),
        // The store error is already logged where it is converted.
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "unavailable" })),
        ),
    }
}
