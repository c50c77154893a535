//! API routes module

pub mod health;
pub mod history;
pub mod mailbox;
pub mod status;

use std::sync::Arc;

use axum::Router;

use crate::api::state::AppState;

type SharedState = Arc<AppState>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Health check
        .nest("/health", health::router())
        // Current mailbox state
        .nest("/status", status::router())
        // Commands (force-empty, manual delivery)
        .nest("/mailbox", mailbox::router())
        // Mail history and search
        .nest("/history", history::router())
}
