use anyhow::Result;

use crate::core::AppConfig;
use crate::core::db::async_db;
use crate::mailbox::store;

pub async fn run() -> Result<()> {
    let config = AppConfig::default();
    let db = async_db(&config.db_path).await?;

    match store::load_mailbox(&db, config.mailbox_id).await? {
        Some((has_mail, last_mail_id)) => {
            println!(
                "Mailbox {}: {}",
                config.mailbox_id,
                if has_mail { "full" } else { "empty" }
            );
            if let Some(id) = last_mail_id {
                println!("Last mail item: {}", id);
            }
        }
        None => {
            println!(
                "Mailbox {} not found. Run `postbox init` first.",
                config.mailbox_id
            );
        }
    }

    Ok(())
}
