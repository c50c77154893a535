use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub db_path: String,
    pub static_dir: String,
    pub mailbox_id: i64,
    /// Readings below this distance mean the box holds mail.
    pub threshold_cm: f64,
    pub distance_interval: Duration,
    pub button_interval: Duration,
    /// How long the button must stay pressed before an edge counts.
    pub button_settle: Duration,
    pub probe_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        let storage_path = env::var("POSTBOX_STORAGE_PATH").unwrap_or(".".to_string());
        let db_path =
            env::var("POSTBOX_DB_PATH").unwrap_or(format!("{}/mailbox.db", storage_path));
        let static_dir =
            env::var("POSTBOX_STATIC_DIR").unwrap_or(format!("{}/static", storage_path));
        let threshold_cm = env::var("POSTBOX_THRESHOLD_CM")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(15.0);

        Self {
            db_path,
            static_dir,
            mailbox_id: 1,
            threshold_cm,
            distance_interval: Duration::from_secs(1),
            button_interval: Duration::from_millis(100),
            button_settle: Duration::from_millis(50),
            probe_timeout: Duration::from_millis(50),
        }
    }
}
