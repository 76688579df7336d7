//! Stock reporters.
//!
//! - `TracingReporter` (feature `tracing`, on by default): structured
//!   `tracing` events
//! - [`SilentReporter`]: discards everything
//!
//! [`default_reporter`] picks the first one available.

use herald_core::{DispatchError, Reporter};
use std::sync::Arc;

/// A reporter that discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&self, _error: &DispatchError) {}
}

/// A reporter that emits `tracing` events.
///
/// Invalid arguments and subscriber faults are logged at `ERROR`, publishes
/// to unknown or empty keys at `WARN`. The key is recorded in the `key`
/// field.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

#[cfg(feature = "tracing")]
impl Reporter for TracingReporter {
    fn report(&self, error: &DispatchError) {
        match error {
            DispatchError::MissingSubscriber { operation, target } => {
                tracing::error!(key = %target, %operation, "subscriber must not be absent");
            }
            DispatchError::Unregistered { target } => {
                tracing::warn!(key = %target, "{target} must register first!");
            }
            DispatchError::NoSubscribers { target } => {
                tracing::warn!(key = %target, "no subscribers left");
            }
            DispatchError::SubscriberFault {
                target,
                index,
                source,
            } => {
                tracing::error!(
                    key = %target,
                    index = *index,
                    error = %source,
                    "subscriber faulted; remaining fan-out skipped"
                );
            }
        }
    }
}

/// The reporter a dispatcher uses unless told otherwise.
pub fn default_reporter() -> Arc<dyn Reporter> {
    #[cfg(feature = "tracing")]
    {
        Arc::new(TracingReporter)
    }
    #[cfg(not(feature = "tracing"))]
    {
        Arc::new(SilentReporter)
    }
}
