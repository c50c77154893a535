//! Query/command surface consumed by the HTTP layer.
//!
//! Handlers go through the facade and never issue their own queries.
//! The facade holds no state of its own; everything delegates to the
//! state machine or the record store.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio_rusqlite::Connection;

use super::machine::{Mailbox, Transition};
use super::models::{HistoryQuery, MailItem};
use super::store::{self, StoreError};

/// Current state as reported to external callers.
#[derive(Debug, Clone, Copy)]
pub struct StatusReport {
    pub has_mail: bool,
    pub last_checked: DateTime<Utc>,
}

/// Result of a force-empty command.
#[derive(Debug, Clone, Copy)]
pub struct ClearOutcome {
    /// Whether this call actually flipped the state. Clearing an empty
    /// box succeeds without doing anything.
    pub cleared: bool,
    pub has_mail: bool,
}

pub struct StatusFacade {
    mailbox: Arc<Mailbox>,
    db: Connection,
}

impl StatusFacade {
    pub fn new(mailbox: Arc<Mailbox>, db: Connection) -> Self {
        Self { mailbox, db }
    }

    pub async fn get_status(&self) -> StatusReport {
        let snapshot = self.mailbox.snapshot().await;
        StatusReport {
            has_mail: snapshot.has_mail,
            last_checked: Utc::now(),
        }
    }

    pub async fn force_empty(&self) -> Result<ClearOutcome, StoreError> {
        let transition = self.mailbox.clear().await?;
        Ok(ClearOutcome {
            cleared: transition == Transition::Emptied,
            has_mail: false,
        })
    }

    pub async fn submit_mail(&self, subject: Option<String>) -> Result<i64, StoreError> {
        self.mailbox.deliver(subject).await
    }

    pub async fn get_history(&self, query: HistoryQuery) -> Result<Vec<MailItem>, StoreError> {
        store::list_mail(&self.db, query).await
    }
}
