//! Router for the mailbox status API

use std::sync::Arc;

use axum::{Json, Router, extract::State};

use super::public;
use crate::api::state::AppState;

type SharedState = Arc<AppState>;

/// Report the current mailbox state
async fn get_status(State(state): State<SharedState>) -> Json<public::StatusResponse> {
    let report = state.facade.get_status().await;
    Json(public::StatusResponse {
        success: true,
        has_mail: report.has_mail,
        last_checked: report.last_checked,
    })
}

/// Create the status router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", axum::routing::get(get_status))
}
