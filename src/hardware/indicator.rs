/// External signalling for the mailbox state: a two-color indicator
/// plus an audible alert.
///
/// Implementations log hardware errors and carry on. Nothing on the
/// transition path is allowed to fail because an LED did.
pub trait Indicator: Send + Sync {
    /// Project the current state onto the indicator. Idempotent.
    fn set(&self, has_mail: bool);

    /// Fire the one-shot delivery alert.
    fn pulse(&self);

    /// Release the underlying hardware on process shutdown.
    fn shutdown(&self) {}
}
