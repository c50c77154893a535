use async_trait::async_trait;

use super::ProbeError;

/// Ranging capability for the mailbox lid sensor.
///
/// Implementations must bound their own blocking time and return
/// [`ProbeError::Timeout`] instead of hanging the caller. A failed
/// sample means "no new information", never "mail absent".
#[async_trait]
pub trait DistanceProbe: Send + Sync {
    /// Measure the distance to the nearest obstruction, in centimeters.
    async fn sample(&self) -> Result<f64, ProbeError>;
}
