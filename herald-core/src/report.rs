//! The reporting seam between a dispatcher and the logging facility.

use crate::error::DispatchError;

/// How serious a report is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Not fatal; the operation simply had no effect.
    Warning,
    /// Invalid input or a faulting subscriber.
    Error,
}

/// Receives everything a dispatcher reports instead of returning errors.
///
/// Implementations decide where reports go: a `tracing` subscriber, a test
/// recorder, or nowhere. Closures `Fn(&DispatchError)` implement this trait.
///
/// Reporters are called without any dispatcher lock held, so they may call
/// back into the dispatcher.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot receive dispatcher reports",
    label = "missing `Reporter` implementation",
    note = "Implement `report`, or pass a closure `Fn(&DispatchError)`."
)]
pub trait Reporter: Send + Sync + 'static {
    /// Called once per reportable condition.
    fn report(&self, error: &DispatchError);
}

impl<F> Reporter for F
where
    F: Fn(&DispatchError) + Send + Sync + 'static,
{
    fn report(&self, error: &DispatchError) {
        (self)(error)
    }
}
