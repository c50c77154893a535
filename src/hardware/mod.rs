//! Capability seams for the physical sensors and the indicator.
//!
//! The core never talks to GPIO directly. It sees a distance probe, a
//! button probe, and an indicator, and the simulated implementations in
//! [`sim`] are substitutable for hardware-backed ones without touching
//! the state machine.

pub mod button;
pub mod distance;
pub mod indicator;
pub mod sim;

pub use button::{ButtonEdge, ButtonProbe, Debouncer};
pub use distance::DistanceProbe;
pub use indicator::Indicator;

use std::time::Duration;

use thiserror::Error;

/// Failure modes for a probe sample. Probe failures are recoverable:
/// the polling loops log them and retry on the next scheduled tick.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("probe timed out after {0:?}")]
    Timeout(Duration),
    #[error("probe hardware fault: {0}")]
    Hardware(String),
}
