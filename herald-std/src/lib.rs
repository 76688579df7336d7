//! # herald-std
//!
//! Standard implementations for the Herald event dispatcher.
//!
//! This crate provides:
//! - **Dispatcher**: [`Dispatcher`] with typed and tagged registries
//! - **Configuration**: [`DispatcherConfig`], [`DispatcherBuilder`], [`EmptyPolicy`]
//! - **Delivery reports**: [`Delivery`], [`DeliveryOutcome`]
//! - **Registries**: ordered subscriber lists keyed by type or tag
//! - **Reporters**: `TracingReporter` (feature `tracing`), [`SilentReporter`]
//! - **Testing utilities**: recording reporter and subscriber helpers

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use herald_core;

// Modules
pub mod config;
pub mod delivery;
pub mod dispatcher;
pub mod registry;
pub mod reporters;
pub mod testing;

pub use config::{DispatcherConfig, EmptyPolicy};
pub use delivery::{Delivery, DeliveryOutcome};
pub use dispatcher::{Dispatcher, DispatcherBuilder};
pub use reporters::SilentReporter;

#[cfg(feature = "tracing")]
pub use reporters::TracingReporter;
