//! Error types for Herald.
//!
//! Dispatcher operations never return these to the caller. They are built
//! when something goes wrong and handed to a [`Reporter`](crate::Reporter):
//!
//! - [`DispatchError`] - everything a dispatcher can report
//! - [`Fault`] - why a single subscriber invocation failed
//! - [`Target`] - the message kind or signal tag a report is about

use crate::{report::Severity, signal::Tag};
use std::{any::type_name, fmt};
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The registry key a report refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// A typed message kind, identified by its type name.
    Kind(&'static str),
    /// An integer-tagged signal.
    Signal(Tag),
}

impl Target {
    /// The target for message kind `M`.
    pub fn kind<M: ?Sized>() -> Self {
        Target::Kind(type_name::<M>())
    }

    /// The target for a signal tag.
    pub fn signal(tag: impl Into<Tag>) -> Self {
        Target::Signal(tag.into())
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Kind(name) => f.write_str(name),
            Target::Signal(tag) => fmt::Display::fmt(tag, f),
        }
    }
}

/// The registry mutation that was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Adding a subscriber.
    Register,
    /// Removing a subscriber.
    Unregister,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Register => f.write_str("register"),
            Operation::Unregister => f.write_str("unregister"),
        }
    }
}

/// Everything a dispatcher can report.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A register or unregister call was given no subscriber.
    #[error("{operation}: subscriber for {target} must not be absent")]
    MissingSubscriber {
        /// The attempted operation.
        operation: Operation,
        /// The kind or tag it was attempted on.
        target: Target,
    },

    /// A publish hit a kind or tag that was never registered.
    #[error("{target} must register first")]
    Unregistered {
        /// The kind or tag that was published.
        target: Target,
    },

    /// A publish hit a registry whose subscribers were all removed.
    ///
    /// Only reported when the dispatcher is configured to warn on empty
    /// registries.
    #[error("{target} has no subscribers left")]
    NoSubscribers {
        /// The kind or tag that was published.
        target: Target,
    },

    /// A subscriber faulted; the rest of that publish's fan-out was skipped.
    #[error("subscriber at position {index} of {target} faulted: {source}")]
    SubscriberFault {
        /// The kind or tag that was published.
        target: Target,
        /// Zero-based position of the faulting subscriber in the fan-out.
        index: usize,
        /// What went wrong.
        #[source]
        source: Fault,
    },
}

impl DispatchError {
    /// How serious the report is.
    pub fn severity(&self) -> Severity {
        match self {
            DispatchError::MissingSubscriber { .. } | DispatchError::SubscriberFault { .. } => {
                Severity::Error
            }
            DispatchError::Unregistered { .. } | DispatchError::NoSubscribers { .. } => {
                Severity::Warning
            }
        }
    }

    /// The kind or tag the report is about.
    pub fn target(&self) -> Target {
        match self {
            DispatchError::MissingSubscriber { target, .. }
            | DispatchError::Unregistered { target }
            | DispatchError::NoSubscribers { target }
            | DispatchError::SubscriberFault { target, .. } => *target,
        }
    }
}

/// Why a single subscriber invocation failed.
#[derive(Error, Debug)]
pub enum Fault {
    /// The subscriber returned an error.
    #[error(transparent)]
    Failed(BoxError),

    /// The subscriber panicked.
    #[error("panicked: {0}")]
    Panicked(String),
}

impl From<BoxError> for Fault {
    fn from(err: BoxError) -> Self {
        Fault::Failed(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ping;

    #[test]
    fn test_unregistered_is_warning() {
        let err = DispatchError::Unregistered {
            target: Target::signal(8),
        };
        assert_eq!(err.severity(), Severity::Warning);
        assert_eq!(err.to_string(), "tag=8 must register first");
    }

    #[test]
    fn test_fault_is_error_with_source() {
        let err = DispatchError::SubscriberFault {
            target: Target::kind::<Ping>(),
            index: 1,
            source: Fault::Failed("boom".into()),
        };
        assert_eq!(err.severity(), Severity::Error);
        assert!(err.to_string().ends_with("Ping faulted: boom"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_missing_subscriber_message() {
        let err = DispatchError::MissingSubscriber {
            operation: Operation::Unregister,
            target: Target::signal(3),
        };
        assert_eq!(err.severity(), Severity::Error);
        assert_eq!(err.target(), Target::Signal(Tag(3)));
        assert_eq!(
            err.to_string(),
            "unregister: subscriber for tag=3 must not be absent"
        );
    }

    #[test]
    fn test_panic_fault_display() {
        assert_eq!(
            Fault::Panicked("index out of bounds".into()).to_string(),
            "panicked: index out of bounds"
        );
    }
}
