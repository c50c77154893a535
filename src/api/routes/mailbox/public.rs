//! Public types for mailbox commands

use serde::{Deserialize, Serialize};

/// Response after a force-empty command
#[derive(Serialize)]
pub struct EmptyResponse {
    pub success: bool,
    pub has_mail: bool,
}

/// Request to record a delivery by hand
#[derive(Deserialize)]
pub struct SubmitMailRequest {
    pub subject: Option<String>,
}

/// Response after recording a delivery
#[derive(Serialize)]
pub struct SubmitMailResponse {
    pub success: bool,
    pub id: i64,
}
