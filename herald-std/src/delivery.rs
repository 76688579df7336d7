//! Sequential, fail-fast fan-out.
//!
//! A publish walks a snapshot of the subscriber list in registration order.
//! The first subscriber that returns an error (or panics, when panics are
//! caught) stops the walk; the subscribers after it are not invoked.

use herald_core::{BoxError, Fault};
use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
};

/// How a publish ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Every subscriber ran without fault.
    Completed,
    /// The key was registered but its list is empty.
    Empty,
    /// The key was never registered (or was cleared).
    Unregistered,
    /// The subscriber at position `at` faulted; later ones were skipped.
    Aborted {
        /// Zero-based position of the faulting subscriber.
        at: usize,
    },
}

/// Summary of one publish call.
///
/// Publishing never fails; this report is the only way for the caller to
/// learn how far the fan-out got without inspecting logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    /// How the publish ended.
    pub outcome: DeliveryOutcome,
    /// Subscribers that ran to completion.
    pub delivered: usize,
    /// Subscribers in the snapshot taken at the start of the publish.
    pub subscribers: usize,
}

impl Delivery {
    pub(crate) fn unregistered() -> Self {
        Self {
            outcome: DeliveryOutcome::Unregistered,
            delivered: 0,
            subscribers: 0,
        }
    }

    pub(crate) fn empty() -> Self {
        Self {
            outcome: DeliveryOutcome::Empty,
            delivered: 0,
            subscribers: 0,
        }
    }

    pub(crate) fn completed(subscribers: usize) -> Self {
        Self {
            outcome: DeliveryOutcome::Completed,
            delivered: subscribers,
            subscribers,
        }
    }

    pub(crate) fn aborted(at: usize, subscribers: usize) -> Self {
        Self {
            outcome: DeliveryOutcome::Aborted { at },
            delivered: at,
            subscribers,
        }
    }

    /// Every subscriber in the snapshot ran without fault.
    ///
    /// Also `true` for an empty registry, where there was nothing to run.
    pub fn is_complete(&self) -> bool {
        matches!(
            self.outcome,
            DeliveryOutcome::Completed | DeliveryOutcome::Empty
        )
    }

    /// A subscriber faulted during this publish.
    pub fn is_aborted(&self) -> bool {
        matches!(self.outcome, DeliveryOutcome::Aborted { .. })
    }

    /// Subscribers that were skipped because an earlier one faulted.
    pub fn skipped(&self) -> usize {
        match self.outcome {
            DeliveryOutcome::Aborted { at } => self.subscribers.saturating_sub(at + 1),
            _ => 0,
        }
    }
}

/// A fault together with the position of the subscriber that raised it.
#[derive(Debug)]
pub(crate) struct FaultAt {
    pub index: usize,
    pub fault: Fault,
}

/// Invoke `subscribers` in order, stopping at the first fault.
///
/// Returns the number of subscribers invoked on success.
pub(crate) fn deliver<S, F>(
    subscribers: &[S],
    catch_panics: bool,
    invoke: F,
) -> Result<usize, FaultAt>
where
    F: Fn(&S) -> Result<(), BoxError>,
{
    for (index, subscriber) in subscribers.iter().enumerate() {
        let result = if catch_panics {
            match panic::catch_unwind(AssertUnwindSafe(|| invoke(subscriber))) {
                Ok(result) => result.map_err(Fault::Failed),
                Err(payload) => Err(Fault::Panicked(panic_message(&*payload))),
            }
        } else {
            invoke(subscriber).map_err(Fault::Failed)
        };

        if let Err(fault) = result {
            return Err(FaultAt { index, fault });
        }
    }
    Ok(subscribers.len())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}
