//! Database connection and schema setup

use anyhow::Result;
use tokio_rusqlite::Connection;

/// Open the SQLite database holding mailbox state and the mail log.
pub async fn async_db(db_path: &str) -> Result<Connection> {
    let conn = Connection::open(db_path).await?;
    conn.call(|conn| {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(())
    })
    .await?;
    Ok(conn)
}

/// Create the schema and seed the default mailbox row. Safe to run on
/// every startup.
pub fn initialize_db(conn: &rusqlite::Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS mail_item (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            subject TEXT,
            arrived_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS mailbox (
            id INTEGER PRIMARY KEY,
            state INTEGER NOT NULL DEFAULT 0,
            last_mail_id INTEGER REFERENCES mail_item (id)
        );
        "#,
    )?;
    conn.execute("INSERT OR IGNORE INTO mailbox (id, state) VALUES (?, 0)", [1])?;
    Ok(())
}
