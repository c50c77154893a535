//! Router for the mail history API

use std::sync::Arc;

use axum::{Json, Router, extract::State};
use axum_extra::extract::Query;

use super::public;
use crate::api::state::AppState;
use crate::mailbox::HistoryQuery;

type SharedState = Arc<AppState>;

/// List recorded mail, newest first
async fn get_history(
    State(state): State<SharedState>,
    Query(params): Query<public::HistoryParams>,
) -> Result<Json<public::HistoryResponse>, crate::api::public::ApiError> {
    let items = state
        .facade
        .get_history(HistoryQuery {
            limit: params.limit,
            ..Default::default()
        })
        .await?;

    Ok(Json(public::HistoryResponse {
        success: true,
        count: items.len(),
        data: items,
    }))
}

/// Search recorded mail by subject and arrival date
async fn search_history(
    State(state): State<SharedState>,
    Json(filters): Json<public::SearchRequest>,
) -> Result<Json<public::HistoryResponse>, crate::api::public::ApiError> {
    let items = state
        .facade
        .get_history(HistoryQuery {
            limit: None,
            subject: filters.subject,
            date_from: filters.date_from,
            date_to: filters.date_to,
        })
        .await?;

    Ok(Json(public::HistoryResponse {
        success: true,
        count: items.len(),
        data: items,
    }))
}

/// Create the history router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", axum::routing::get(get_history))
        .route("/search", axum::routing::post(search_history))
}
