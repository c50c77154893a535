//! Router for mailbox commands (force-empty, manual delivery)

use std::sync::Arc;

use axum::{Json, Router, extract::State};

use super::public;
use crate::api::state::AppState;

type SharedState = Arc<AppState>;

/// Mark the mailbox as emptied. Idempotent: emptying an already-empty
/// box still reports success.
async fn empty_mailbox(
    State(state): State<SharedState>,
) -> Result<Json<public::EmptyResponse>, crate::api::public::ApiError> {
    let outcome = state.facade.force_empty().await?;
    Ok(Json(public::EmptyResponse {
        success: true,
        has_mail: outcome.has_mail,
    }))
}

/// Record a delivery submitted through the API rather than the sensor
async fn submit_mail(
    State(state): State<SharedState>,
    Json(payload): Json<public::SubmitMailRequest>,
) -> Result<Json<public::SubmitMailResponse>, crate::api::public::ApiError> {
    let id = state.facade.submit_mail(payload.subject).await?;
    Ok(Json(public::SubmitMailResponse { success: true, id }))
}

/// Create the mailbox command router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/empty", axum::routing::post(empty_mailbox))
        .route("/mail", axum::routing::post(submit_mail))
}
