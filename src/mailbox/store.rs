//! Persistence for mailbox state and the append-only mail log.
//!
//! The mailbox row and the mail log are only ever written together
//! inside one transaction, so a reader can never observe a full box
//! pointing at a mail item that was not recorded, or the other way
//! around.

use chrono::{DateTime, Utc};
use rusqlite::OptionalExtension;
use rusqlite::types::Value;
use thiserror::Error;
use tokio_rusqlite::Connection;

use super::models::{HistoryQuery, MailItem};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("mailbox {0} not found")]
    NotFound(i64),
    #[error("persistence failure: {0}")]
    Persistence(#[from] tokio_rusqlite::Error),
}

/// Read the persisted `(has_mail, last_mail_id)` pair for a mailbox.
pub async fn load_mailbox(
    db: &Connection,
    mailbox_id: i64,
) -> Result<Option<(bool, Option<i64>)>, StoreError> {
    let row = db
        .call(move |conn| {
            let row = conn
                .query_row(
                    "SELECT state, last_mail_id FROM mailbox WHERE id = ?",
                    [mailbox_id],
                    |row| {
                        let state: i64 = row.get(0)?;
                        let last_mail_id: Option<i64> = row.get(1)?;
                        Ok((state != 0, last_mail_id))
                    },
                )
                .optional()?;
            Ok(row)
        })
        .await?;
    Ok(row)
}

/// Append a mail item and point the mailbox row at it, atomically.
/// Returns the id the store assigned to the new item.
pub async fn record_delivery(
    db: &Connection,
    mailbox_id: i64,
    subject: Option<String>,
    arrived_at: DateTime<Utc>,
) -> Result<i64, StoreError> {
    let mail_id = db
        .call(move |conn| {
            let tx = conn.transaction()?;
            tx.execute(
                "INSERT INTO mail_item (subject, arrived_at) VALUES (?, ?)",
                tokio_rusqlite::params![subject, arrived_at],
            )?;
            let mail_id = tx.last_insert_rowid();
            let updated = tx.execute(
                "UPDATE mailbox SET state = 1, last_mail_id = ? WHERE id = ?",
                tokio_rusqlite::params![mail_id, mailbox_id],
            )?;
            if updated == 0 {
                // Unknown mailbox; dropping the transaction discards
                // the mail item as well
                return Ok(None);
            }
            tx.commit()?;
            Ok(Some(mail_id))
        })
        .await?;

    mail_id.ok_or(StoreError::NotFound(mailbox_id))
}

/// Persist the empty state, clearing the last-mail reference.
pub async fn record_emptied(db: &Connection, mailbox_id: i64) -> Result<(), StoreError> {
    let updated = db
        .call(move |conn| {
            let updated = conn.execute(
                "UPDATE mailbox SET state = 0, last_mail_id = NULL WHERE id = ?",
                [mailbox_id],
            )?;
            Ok(updated)
        })
        .await?;

    if updated == 0 {
        return Err(StoreError::NotFound(mailbox_id));
    }
    Ok(())
}

/// Mail history, newest first. Filters compose with AND.
pub async fn list_mail(db: &Connection, query: HistoryQuery) -> Result<Vec<MailItem>, StoreError> {
    let items = db
        .call(move |conn| {
            let mut sql =
                String::from("SELECT id, subject, arrived_at FROM mail_item WHERE 1=1");
            let mut params: Vec<Value> = Vec::new();

            if let Some(subject) = &query.subject {
                sql.push_str(" AND subject LIKE ?");
                params.push(Value::Text(format!("%{}%", subject)));
            }
            if let Some(from) = &query.date_from {
                sql.push_str(" AND date(arrived_at) >= ?");
                params.push(Value::Text(from.to_string()));
            }
            if let Some(to) = &query.date_to {
                sql.push_str(" AND date(arrived_at) <= ?");
                params.push(Value::Text(to.to_string()));
            }
            sql.push_str(" ORDER BY id DESC LIMIT ?");
            params.push(Value::Integer(i64::from(query.limit.unwrap_or(50))));

            let mut stmt = conn.prepare(&sql)?;
            let items = stmt
                .query_map(rusqlite::params_from_iter(params), |row| {
                    Ok(MailItem {
                        id: row.get(0)?,
                        subject: row.get(1)?,
                        arrived_at: row.get(2)?,
                    })
                })?
                .filter_map(Result::ok)
                .collect::<Vec<MailItem>>();
            Ok(items)
        })
        .await?;
    Ok(items)
}
