//! Router for the health check

use std::sync::Arc;

use axum::{Json, Router};
use chrono::Utc;
use serde_json::Value;

use crate::api::state::AppState;

type SharedState = Arc<AppState>;

async fn health() -> Json<Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "postbox",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now(),
    }))
}

/// Create the health router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", axum::routing::get(health))
}
