//! Test utilities for integration tests
use std::sync::Arc;

use axum::{Router, body::Body};
use tempfile::TempDir;
use tokio_rusqlite::Connection;

use postbox::api::{AppState, app};
use postbox::core::AppConfig;
use postbox::core::db::{async_db, initialize_db};
use postbox::hardware::Indicator;
use postbox::hardware::sim::{SimulatedButton, SimulatedDistanceProbe, SimulatedIndicator};
use postbox::mailbox::{Mailbox, StatusFacade};

/// Everything a test needs to drive the system: the router, the state
/// machine behind it, the simulated hardware, and the raw db handle.
///
/// Each call builds a fresh database in its own temp directory, so
/// tests are independent of each other.
pub struct TestContext {
    pub app: Router,
    pub mailbox: Arc<Mailbox>,
    pub facade: StatusFacade,
    pub indicator: Arc<SimulatedIndicator>,
    pub distance_probe: Arc<SimulatedDistanceProbe>,
    pub button_probe: Arc<SimulatedButton>,
    pub db: Connection,
    _dir: TempDir,
}

pub async fn test_context() -> TestContext {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("mailbox.db");

    let db = async_db(db_path.to_str().unwrap())
        .await
        .expect("Failed to connect to async db");
    db.call(|conn| {
        initialize_db(conn)?;
        Ok(())
    })
    .await
    .expect("Failed to initialize db schema");

    let config = AppConfig {
        db_path: db_path.display().to_string(),
        static_dir: dir.path().display().to_string(),
        ..AppConfig::default()
    };

    let distance_probe = Arc::new(SimulatedDistanceProbe::new(120.0));
    let button_probe = Arc::new(SimulatedButton::new());
    let indicator = Arc::new(SimulatedIndicator::new());

    let mailbox = Arc::new(
        Mailbox::load(
            db.clone(),
            Arc::clone(&indicator) as Arc<dyn Indicator>,
            config.mailbox_id,
            config.threshold_cm,
        )
        .await
        .expect("Failed to load mailbox state"),
    );

    let facade = StatusFacade::new(Arc::clone(&mailbox), db.clone());
    let state = Arc::new(AppState::new(
        StatusFacade::new(Arc::clone(&mailbox), db.clone()),
        config,
    ));

    TestContext {
        app: app(state),
        mailbox,
        facade,
        indicator,
        distance_probe,
        button_probe,
        db,
        _dir: dir,
    }
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body was not utf-8")
}
