//! Public types for the status API

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Current mailbox state as reported to clients
#[derive(Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub has_mail: bool,
    pub last_checked: DateTime<Utc>,
}
