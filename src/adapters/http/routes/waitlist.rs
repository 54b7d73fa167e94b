use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    use_cases::waitlist::WaitlistSubmission,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/waitlist", post(join_waitlist))
}

#[derive(Serialize)]
struct JoinResponse {
    message: &'static str,
    id: Uuid,
}

async fn join_waitlist(
    State(app_state): State<AppState>,
    payload: Result<Json<WaitlistSubmission>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(submission) =
        payload.map_err(|rejection| AppError::InvalidBody(rejection.body_text()))?;

    let entry = app_state.waitlist_use_cases.join(submission).await?;

    Ok((
        StatusCode::CREATED,
        Json(JoinResponse {
            message: "Successfully added to waitlist",
            id: entry.id,
        }),
    ))
}
