//! Background polling loops.
//!
//! Each loop is a periodic job spawned in its own tokio task, so a
//! stalled probe read in one loop cannot starve the other or the HTTP
//! handlers. A failed iteration is logged and the loop backs off for
//! one extra interval; nothing a job does can take the process down.

pub mod watch_button;
pub mod watch_distance;

pub use watch_button::WatchButton;
pub use watch_distance::WatchDistance;

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;
use tokio::task::JoinHandle;

#[async_trait]
pub trait PeriodicJob: Send + Sync + 'static {
    /// Name used in log lines.
    fn name(&self) -> &'static str;

    /// Fixed delay between iterations.
    fn interval(&self) -> Duration;

    /// One iteration. Errors are logged by the runner and the loop
    /// continues.
    async fn tick(&self) -> anyhow::Result<()>;
}

/// Spawn a job in its own tokio task in a loop.
///
/// The loop runs until `shutdown` flips to true and always finishes the
/// iteration in flight first, so shutdown never interrupts a transition
/// mid-transaction.
pub fn spawn_periodic_job(
    job: impl PeriodicJob,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::debug!("{} job started", job.name());
        loop {
            let mut delay = job.interval();
            if let Err(e) = job.tick().await {
                tracing::error!("{} job iteration failed: {}", job.name(), e);
                delay += job.interval();
            }
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
            if *shutdown.borrow() {
                break;
            }
        }
        tracing::debug!("{} job stopped", job.name());
    })
}
