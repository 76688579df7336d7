//! # herald-core
//!
//! Core traits and types for the Herald event dispatcher.
//!
//! This crate has minimal dependencies and is meant to be imported by code
//! that publishes or subscribes to messages without needing the dispatcher
//! implementation itself (that lives in `herald-std`).
//!
//! # Two Registration Schemes
//!
//! ## Typed messages ([`Message`], [`Subscriber`])
//!
//! Payload-bearing messages are plain Rust types. A subscriber for `M`
//! receives `&M`, and the contract between publisher and subscriber is
//! checked at compile time. Routing is by exact type: a subscriber for
//! `M` never sees any other type.
//!
//! ## Tagged signals ([`Tag`], [`Signal`], [`SignalSubscriber`])
//!
//! Payload-less notifications keyed by an integer tag. Useful for
//! state-machine transitions and other pure signals where defining a
//! payload type would be noise. Fieldless enums implement [`Signal`] to
//! name their tags.
//!
//! # Reporting
//!
//! No dispatcher operation ever returns an error to its caller. Invalid
//! arguments, publishes to unknown keys and subscriber faults are handed to
//! a [`Reporter`] as a [`DispatchError`] carrying a [`Severity`].

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod message;
mod outcome;
mod report;
mod signal;
mod subscriber;

// Re-exports
pub use error::{BoxError, DispatchError, Fault, Operation, Target};
pub use message::Message;
pub use outcome::IntoOutcome;
pub use report::{Reporter, Severity};
pub use signal::{Signal, Tag};
pub use subscriber::{SignalSubscriber, Subscriber};
