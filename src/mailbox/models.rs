use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// One recorded delivery. Immutable once written; rows are never
/// deleted, so the table doubles as the permanent history log.
#[derive(Debug, Clone, Serialize)]
pub struct MailItem {
    pub id: i64,
    pub subject: Option<String>,
    pub arrived_at: DateTime<Utc>,
}

/// A fully-committed view of the mailbox state.
///
/// `last_mail_id` is `None` whenever `has_mail` is false.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MailboxSnapshot {
    pub has_mail: bool,
    pub last_mail_id: Option<i64>,
    pub last_transition_at: DateTime<Utc>,
}

/// Filters for history queries. Results come back newest first.
#[derive(Debug, Clone, Default)]
pub struct HistoryQuery {
    pub limit: Option<u32>,
    /// Substring match on the subject line.
    pub subject: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}
