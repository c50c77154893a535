use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use super::PeriodicJob;
use crate::hardware::{DistanceProbe, ProbeError};
use crate::mailbox::Mailbox;

/// Samples the distance probe and feeds every reading into the state
/// machine. A failed read carries no information and is retried on the
/// next tick.
pub struct WatchDistance {
    mailbox: Arc<Mailbox>,
    probe: Arc<dyn DistanceProbe>,
    interval: Duration,
    timeout: Duration,
}

impl WatchDistance {
    pub fn new(
        mailbox: Arc<Mailbox>,
        probe: Arc<dyn DistanceProbe>,
        interval: Duration,
        timeout: Duration,
    ) -> Self {
        Self {
            mailbox,
            probe,
            interval,
            timeout,
        }
    }
}

#[async_trait]
impl PeriodicJob for WatchDistance {
    fn name(&self) -> &'static str {
        "watch-distance"
    }

    fn interval(&self) -> Duration {
        self.interval
    }

    async fn tick(&self) -> Result<()> {
        // The timeout bound holds even if a probe implementation stalls
        let sample = tokio::time::timeout(self.timeout, self.probe.sample())
            .await
            .unwrap_or_else(|_| Err(ProbeError::Timeout(self.timeout)));

        let distance_cm = match sample {
            Ok(distance_cm) => distance_cm,
            Err(e) => {
                tracing::warn!("distance probe read failed: {}", e);
                return Ok(());
            }
        };

        tracing::debug!("distance probe read {:.1} cm", distance_cm);
        self.mailbox.detect(distance_cm).await?;
        Ok(())
    }
}
