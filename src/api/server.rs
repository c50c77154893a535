use std::sync::Arc;

use axum::middleware;
use axum::{Router, extract::Request, response::Response};
use http::{HeaderValue, header};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::routes;
use crate::api::state::AppState;
use crate::core::AppConfig;
use crate::core::db::{async_db, initialize_db};
use crate::hardware::Indicator;
use crate::hardware::sim::{SimulatedButton, SimulatedDistanceProbe, SimulatedIndicator};
use crate::jobs::{WatchButton, WatchDistance, spawn_periodic_job};
use crate::mailbox::{Mailbox, StatusFacade};

// Far enough that the simulated box reads as open
const SIM_IDLE_DISTANCE_CM: f64 = 120.0;

async fn set_static_cache_control(request: Request, next: middleware::Next) -> Response {
    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    response
}

pub fn app(shared_state: Arc<AppState>) -> Router {
    let cors = CorsLayer::permissive();
    let static_dir = shared_state.config.static_dir.clone();

    Router::new()
        // API routes
        .nest("/api", routes::router())
        // Static server of the dashboard pages
        .fallback_service(
            ServiceBuilder::new()
                .layer(middleware::from_fn(set_static_cache_control))
                .service(ServeDir::new(static_dir)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

// Run the server
pub async fn serve(host: String, port: String, config: AppConfig) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // axum logs rejections from built-in extractors with the `axum::rejection`
                // target, at `TRACE` level. `axum::rejection=trace` enables showing those events
                format! {
                    "{}=debug,tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME")
                }
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db = async_db(&config.db_path)
        .await
        .expect("Failed to connect to async db");
    db.call(|conn| {
        initialize_db(conn)?;
        Ok(())
    })
    .await
    .expect("Failed to initialize db schema");

    // Simulated hardware. A GPIO-backed probe set slots in here on the
    // actual device without touching the state machine.
    let distance_probe = Arc::new(SimulatedDistanceProbe::new(SIM_IDLE_DISTANCE_CM));
    let button_probe = Arc::new(SimulatedButton::new());
    let indicator: Arc<dyn Indicator> = Arc::new(SimulatedIndicator::new());

    let mailbox = Arc::new(
        Mailbox::load(
            db.clone(),
            Arc::clone(&indicator),
            config.mailbox_id,
            config.threshold_cm,
        )
        .await
        .expect("Failed to load mailbox state"),
    );

    let facade = StatusFacade::new(Arc::clone(&mailbox), db.clone());
    let shared_state = Arc::new(AppState::new(facade, config.clone()));
    let app = app(Arc::clone(&shared_state));

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port))
        .await
        .unwrap();

    tracing::debug!(
        "Server started. Listening on {}",
        listener.local_addr().unwrap()
    );

    // Run the polling loops. Each loop is spawned in its own tokio task.
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    let jobs = vec![
        spawn_periodic_job(
            WatchDistance::new(
                Arc::clone(&mailbox),
                distance_probe,
                config.distance_interval,
                config.probe_timeout,
            ),
            shutdown_rx.clone(),
        ),
        spawn_periodic_job(
            WatchButton::new(
                Arc::clone(&mailbox),
                button_probe,
                config.button_interval,
                config.probe_timeout,
                config.button_settle,
            ),
            shutdown_rx,
        ),
    ];

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .unwrap();

    // Stop the polling loops, letting any in-flight transition finish,
    // then release the hardware.
    let _ = shutdown_tx.send(true);
    for job in jobs {
        let _ = job.await;
    }
    indicator.shutdown();
    tracing::debug!("Server stopped");
}
