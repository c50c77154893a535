//! Simulated hardware, used when no sensors are attached and by tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::{ButtonProbe, DistanceProbe, Indicator, ProbeError};

const SIM_TIMEOUT: Duration = Duration::from_millis(50);

/// Distance probe returning a settable reading.
pub struct SimulatedDistanceProbe {
    current_cm: Mutex<f64>,
    failing: AtomicBool,
}

impl SimulatedDistanceProbe {
    pub fn new(distance_cm: f64) -> Self {
        Self {
            current_cm: Mutex::new(distance_cm),
            failing: AtomicBool::new(false),
        }
    }

    pub fn set_distance(&self, distance_cm: f64) {
        *self.current_cm.lock().unwrap() = distance_cm;
    }

    /// Make every subsequent sample fail with a timeout until reset.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl DistanceProbe for SimulatedDistanceProbe {
    async fn sample(&self) -> Result<f64, ProbeError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ProbeError::Timeout(SIM_TIMEOUT));
        }
        Ok(*self.current_cm.lock().unwrap())
    }
}

/// Button probe driven by `press` / `release` calls.
pub struct SimulatedButton {
    pressed: AtomicBool,
}

impl SimulatedButton {
    pub fn new() -> Self {
        Self {
            pressed: AtomicBool::new(false),
        }
    }

    pub fn press(&self) {
        self.pressed.store(true, Ordering::SeqCst);
    }

    pub fn release(&self) {
        self.pressed.store(false, Ordering::SeqCst);
    }
}

impl Default for SimulatedButton {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ButtonProbe for SimulatedButton {
    async fn sample(&self) -> Result<bool, ProbeError> {
        Ok(self.pressed.load(Ordering::SeqCst))
    }
}

/// Indicator that records what the state machine asked it to show.
pub struct SimulatedIndicator {
    has_mail: AtomicBool,
    pulses: AtomicUsize,
}

impl SimulatedIndicator {
    pub fn new() -> Self {
        Self {
            has_mail: AtomicBool::new(false),
            pulses: AtomicUsize::new(0),
        }
    }

    pub fn has_mail(&self) -> bool {
        self.has_mail.load(Ordering::SeqCst)
    }

    /// Number of alert pulses fired since construction.
    pub fn pulse_count(&self) -> usize {
        self.pulses.load(Ordering::SeqCst)
    }
}

impl Default for SimulatedIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl Indicator for SimulatedIndicator {
    fn set(&self, has_mail: bool) {
        self.has_mail.store(has_mail, Ordering::SeqCst);
    }

    fn pulse(&self) {
        self.pulses.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("alert pulse fired");
    }
}
