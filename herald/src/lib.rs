//! # herald - Typed In-Process Event Dispatcher
//!
//! `herald` is a publish/subscribe message center for a single process. It
//! routes two kinds of traffic through one [`Dispatcher`]:
//!
//! - **typed messages**: any type implementing [`Message`], delivered by
//!   reference to the [`Subscriber`]s registered for exactly that type;
//! - **tagged signals**: payload-less notifications keyed by an integer
//!   [`Tag`], delivered to [`SignalSubscriber`]s.
//!
//! Faults never escape the dispatcher. A subscriber that returns an error or
//! panics ends that publish's fan-out, the fault is handed to the
//! [`Reporter`], and the publish returns a [`Delivery`] describing how far
//! it got.
//!
//! ## Quick Start
//!
//! ```rust
//! use herald::prelude::*;
//!
//! #[derive(Debug, Clone)]
//! struct ScoreChanged { points: u32 }
//! impl Message for ScoreChanged {}
//!
//! const MENU_OPENED: i32 = 1;
//!
//! let dispatcher = Dispatcher::new();
//!
//! let on_score = Subscriber::new(|event: &ScoreChanged| {
//!     println!("score: {}", event.points);
//! });
//! dispatcher.register(on_score.clone());
//! dispatcher.register_signal(MENU_OPENED, SignalSubscriber::new(|| println!("menu")));
//!
//! let delivery = dispatcher.publish(ScoreChanged { points: 10 });
//! assert_eq!(delivery.outcome, DeliveryOutcome::Completed);
//!
//! dispatcher.publish_signal(MENU_OPENED);
//!
//! // Subscribers are removed explicitly, by handle.
//! dispatcher.unregister(on_score);
//! dispatcher.clear();
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): report through `tracing` events by default
//! - `macros`: `#[derive(Message)]` and `#[derive(Signal)]`

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use herald_core::{
    // Error types
    BoxError,
    DispatchError,
    Fault,
    // Subscribers
    IntoOutcome,
    // Message
    Message,
    Operation,
    // Reporting
    Reporter,
    Severity,
    // Signals
    Signal,
    SignalSubscriber,
    Subscriber,
    Tag,
    Target,
};

pub use herald_std::{
    Delivery, DeliveryOutcome, Dispatcher, DispatcherBuilder, DispatcherConfig, EmptyPolicy,
};

/// Stock reporters.
pub mod reporters {
    pub use herald_std::reporters::{SilentReporter, default_reporter};

    #[cfg(feature = "tracing")]
    pub use herald_std::reporters::TracingReporter;
}

/// Subscriber registries.
pub mod registry {
    pub use herald_std::registry::{SubscriberList, TaggedRegistry, TypedRegistry};
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use herald_std::testing::*;
}

/// Prelude module - common imports for Herald.
///
/// # Usage
///
/// ```rust,ignore
/// use herald::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Delivery, DeliveryOutcome, Dispatcher, EmptyPolicy, Message, Signal, SignalSubscriber,
        Subscriber, Tag,
    };
}

#[cfg(feature = "macros")]
pub use herald_macros::{Message, Signal};
