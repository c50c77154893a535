use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::Result;
use async_trait::async_trait;

use super::PeriodicJob;
use crate::hardware::{ButtonEdge, ButtonProbe, Debouncer, ProbeError};
use crate::mailbox::Mailbox;

/// Samples the clear button, debounces it, and empties the box on each
/// press edge. Pressing while the box is already empty is a no-op.
pub struct WatchButton {
    mailbox: Arc<Mailbox>,
    probe: Arc<dyn ButtonProbe>,
    interval: Duration,
    timeout: Duration,
    debouncer: Mutex<Debouncer>,
}

impl WatchButton {
    pub fn new(
        mailbox: Arc<Mailbox>,
        probe: Arc<dyn ButtonProbe>,
        interval: Duration,
        timeout: Duration,
        settle: Duration,
    ) -> Self {
        Self {
            mailbox,
            probe,
            interval,
            timeout,
            debouncer: Mutex::new(Debouncer::new(settle)),
        }
    }
}

#[async_trait]
impl PeriodicJob for WatchButton {
    fn name(&self) -> &'static str {
        "watch-button"
    }

    fn interval(&self) -> Duration {
        self.interval
    }

    async fn tick(&self) -> Result<()> {
        let sample = tokio::time::timeout(self.timeout, self.probe.sample())
            .await
            .unwrap_or_else(|_| Err(ProbeError::Timeout(self.timeout)));

        let pressed = match sample {
            Ok(pressed) => pressed,
            Err(e) => {
                tracing::warn!("button probe read failed: {}", e);
                return Ok(());
            }
        };

        let edge = self
            .debouncer
            .lock()
            .unwrap()
            .poll_edge(pressed, Instant::now());

        if edge == ButtonEdge::Pressed {
            tracing::debug!("clear button pressed");
            self.mailbox.clear().await?;
        }
        Ok(())
    }
}
