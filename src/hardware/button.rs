use std::time::{Duration, Instant};

use async_trait::async_trait;

use super::ProbeError;

/// Raw sampling of the clear button. Returns `true` while the button is
/// held, regardless of the electrical polarity of the underlying line.
#[async_trait]
pub trait ButtonProbe: Send + Sync {
    async fn sample(&self) -> Result<bool, ProbeError>;
}

/// A debounced edge produced from raw button samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEdge {
    NoEdge,
    Pressed,
}

enum DebounceState {
    Released,
    Settling { since: Instant },
    Held,
}

/// Turns noisy raw button samples into single logical press edges.
///
/// An edge is reported once the raw signal has stayed pressed for the
/// settle interval, and not again until the signal has been observed
/// released. Contact bounce and a held-down button both yield exactly
/// one edge per physical press.
pub struct Debouncer {
    settle: Duration,
    state: DebounceState,
}

impl Debouncer {
    pub fn new(settle: Duration) -> Self {
        Self {
            settle,
            state: DebounceState::Released,
        }
    }

    /// Feed one raw sample taken at `at`.
    pub fn poll_edge(&mut self, pressed: bool, at: Instant) -> ButtonEdge {
        match self.state {
            DebounceState::Released => {
                if pressed {
                    self.state = DebounceState::Settling { since: at };
                }
                ButtonEdge::NoEdge
            }
            DebounceState::Settling { since } => {
                if !pressed {
                    // Bounce, not a press
                    self.state = DebounceState::Released;
                    ButtonEdge::NoEdge
                } else if at.duration_since(since) >= self.settle {
                    self.state = DebounceState::Held;
                    ButtonEdge::Pressed
                } else {
                    ButtonEdge::NoEdge
                }
            }
            DebounceState::Held => {
                if !pressed {
                    self.state = DebounceState::Released;
                }
                ButtonEdge::NoEdge
            }
        }
    }
}
