//! Public types for the mail history API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::mailbox::MailItem;

/// Query parameters for listing mail history
#[derive(Deserialize)]
pub struct HistoryParams {
    pub limit: Option<u32>,
}

/// Request body for searching mail history
#[derive(Deserialize)]
pub struct SearchRequest {
    pub subject: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

/// Response containing mail history entries, newest first
#[derive(Serialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub data: Vec<MailItem>,
    pub count: usize,
}
