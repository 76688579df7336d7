//! The message dispatcher.
//!
//! [`Dispatcher`] owns two independent registries: one keyed by message
//! type for payload-bearing [`Message`]s, one keyed by [`Tag`] for
//! zero-argument signals. Both schemes share the same contract:
//!
//! - registration appends, and registration order is invocation order;
//! - unregistering removes one matching registration, or does nothing;
//! - publishing to a key that was never registered is a warning;
//! - the first faulting subscriber ends that publish's fan-out;
//! - nothing ever propagates to the caller. Reports go to the
//!   [`Reporter`], and each publish returns a [`Delivery`] summary.
//!
//! # Reentrancy
//!
//! Publishing snapshots the subscriber list and releases the registry lock
//! before invoking anyone. Subscribers may therefore register, unregister,
//! publish or clear on the same dispatcher. Such changes apply to the next
//! publish, never to the fan-out already in flight.
//!
//! # Example
//!
//! ```rust
//! use herald_core::{Message, SignalSubscriber, Subscriber};
//! use herald_std::{DeliveryOutcome, Dispatcher};
//!
//! #[derive(Debug)]
//! struct Ping;
//! impl Message for Ping {}
//!
//! let dispatcher = Dispatcher::new();
//! let on_ping = Subscriber::new(|_: &Ping| println!("ping"));
//! dispatcher.register(on_ping.clone());
//! dispatcher.register_signal(7, SignalSubscriber::new(|| println!("seven")));
//!
//! assert_eq!(dispatcher.publish(Ping).outcome, DeliveryOutcome::Completed);
//! assert_eq!(dispatcher.publish_signal(7).delivered, 1);
//!
//! dispatcher.unregister(on_ping);
//! assert_eq!(dispatcher.publish(Ping).outcome, DeliveryOutcome::Empty);
//! ```

use crate::{
    config::{DispatcherConfig, EmptyPolicy},
    delivery::{self, Delivery, FaultAt},
    registry::{SubscriberList, TaggedRegistry, TypedRegistry},
    reporters::default_reporter,
};
use herald_core::{
    BoxError, DispatchError, Message, Operation, Reporter, SignalSubscriber, Subscriber, Tag,
    Target,
};
use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

#[derive(Debug, Default)]
struct Registries {
    typed: TypedRegistry,
    tagged: TaggedRegistry,
}

/// A typed, in-process publish/subscribe message center.
///
/// The dispatcher does not manage its own lifetime and is not a global:
/// construct one, hand it (usually behind an `Arc`) to the components that
/// need it, and [`clear`](Dispatcher::clear) it on teardown.
pub struct Dispatcher {
    registries: Mutex<Registries>,
    config: DispatcherConfig,
    reporter: Arc<dyn Reporter>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Create a dispatcher with the default configuration and reporter.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start configuring a dispatcher.
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::new()
    }

    /// The active configuration.
    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    // Subscriber code never runs under this lock, so a poisoned mutex still
    // guards consistent registries.
    fn registries(&self) -> MutexGuard<'_, Registries> {
        self.registries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn missing(&self, operation: Operation, target: Target) {
        self.reporter.report(&DispatchError::MissingSubscriber { operation, target });
    }

    // ------------------------------------------------------------------
    // Typed messages
    // ------------------------------------------------------------------

    /// Subscribe to message kind `M`.
    ///
    /// Passing `None` is reported as an error and changes nothing; in
    /// particular no registry is created for `M`.
    pub fn register<M: Message>(&self, subscriber: impl Into<Option<Subscriber<M>>>) {
        let Some(subscriber) = subscriber.into() else {
            self.missing(Operation::Register, Target::kind::<M>());
            return;
        };

        let mut registries = self.registries();
        #[cfg(feature = "tracing")]
        if !registries.typed.contains::<M>() {
            tracing::debug!(kind = std::any::type_name::<M>(), "creating message registry");
        }
        registries.typed.get_or_create::<M>().push(subscriber);
    }

    /// Remove one registration of `subscriber` from message kind `M`.
    ///
    /// Unknown subscribers and unknown kinds are silently ignored. Passing
    /// `None` is reported as an error.
    pub fn unregister<M: Message>(&self, subscriber: impl Into<Option<Subscriber<M>>>) {
        let Some(subscriber) = subscriber.into() else {
            self.missing(Operation::Unregister, Target::kind::<M>());
            return;
        };

        if let Some(list) = self.registries().typed.get_mut::<M>() {
            list.remove(&subscriber);
        }
    }

    /// Deliver `message` to every subscriber of `M`, in registration order.
    pub fn publish<M: Message>(&self, message: M) -> Delivery {
        let snapshot = self
            .registries()
            .typed
            .get::<M>()
            .map(SubscriberList::snapshot);

        self.fan_out(Target::kind::<M>(), snapshot, |subscriber: &Subscriber<M>| {
            subscriber.call(&message)
        })
    }

    /// Check if a registry exists for `M` (it may be empty).
    pub fn is_registered<M: Message>(&self) -> bool {
        self.registries().typed.contains::<M>()
    }

    /// Number of registrations for `M`, duplicates included.
    pub fn subscriber_count<M: Message>(&self) -> usize {
        self.registries()
            .typed
            .get::<M>()
            .map_or(0, SubscriberList::len)
    }

    /// Number of message kinds with a registry.
    pub fn kind_count(&self) -> usize {
        self.registries().typed.len()
    }

    // ------------------------------------------------------------------
    // Tagged signals
    // ------------------------------------------------------------------

    /// Subscribe to signal `tag`.
    ///
    /// Passing `None` is reported as an error and changes nothing.
    pub fn register_signal(
        &self,
        tag: impl Into<Tag>,
        subscriber: impl Into<Option<SignalSubscriber>>,
    ) {
        let tag = tag.into();
        let Some(subscriber) = subscriber.into() else {
            self.missing(Operation::Register, Target::Signal(tag));
            return;
        };

        let mut registries = self.registries();
        #[cfg(feature = "tracing")]
        if !registries.tagged.contains(tag) {
            tracing::debug!(tag = tag.get(), "creating signal registry");
        }
        registries.tagged.get_or_create(tag).push(subscriber);
    }

    /// Remove one registration of `subscriber` from signal `tag`.
    ///
    /// Unknown subscribers and unknown tags are silently ignored. Passing
    /// `None` is reported as an error.
    pub fn unregister_signal(
        &self,
        tag: impl Into<Tag>,
        subscriber: impl Into<Option<SignalSubscriber>>,
    ) {
        let tag = tag.into();
        let Some(subscriber) = subscriber.into() else {
            self.missing(Operation::Unregister, Target::Signal(tag));
            return;
        };

        if let Some(list) = self.registries().tagged.get_mut(tag) {
            list.remove(&subscriber);
        }
    }

    /// Invoke every subscriber of `tag`, in registration order.
    pub fn publish_signal(&self, tag: impl Into<Tag>) -> Delivery {
        let tag = tag.into();
        let snapshot = self
            .registries()
            .tagged
            .get(tag)
            .map(SubscriberList::snapshot);

        self.fan_out(Target::Signal(tag), snapshot, SignalSubscriber::call)
    }

    /// Check if a registry exists for `tag` (it may be empty).
    pub fn is_signal_registered(&self, tag: impl Into<Tag>) -> bool {
        self.registries().tagged.contains(tag.into())
    }

    /// Number of registrations for `tag`, duplicates included.
    pub fn signal_subscriber_count(&self, tag: impl Into<Tag>) -> usize {
        self.registries()
            .tagged
            .get(tag.into())
            .map_or(0, SubscriberList::len)
    }

    /// Number of signal tags with a registry.
    pub fn signal_count(&self) -> usize {
        self.registries().tagged.len()
    }

    // ------------------------------------------------------------------
    // Shared
    // ------------------------------------------------------------------

    /// Empty and forget every registry of both schemes.
    ///
    /// The next registration for any key starts from an empty list, and a
    /// publish before that is treated as never registered.
    pub fn clear(&self) {
        let mut registries = self.registries();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            kinds = registries.typed.len(),
            signals = registries.tagged.len(),
            "clearing dispatcher"
        );
        registries.typed.clear();
        registries.tagged.clear();
    }

    fn fan_out<S, F>(&self, target: Target, snapshot: Option<Vec<S>>, invoke: F) -> Delivery
    where
        F: Fn(&S) -> Result<(), BoxError>,
    {
        let Some(subscribers) = snapshot else {
            self.reporter.report(&DispatchError::Unregistered { target });
            return Delivery::unregistered();
        };

        if subscribers.is_empty() {
            if self.config.empty_policy == EmptyPolicy::Warn {
                self.reporter.report(&DispatchError::NoSubscribers { target });
            }
            return Delivery::empty();
        }

        match delivery::deliver(&subscribers, self.config.catch_panics, invoke) {
            Ok(delivered) => Delivery::completed(delivered),
            Err(FaultAt { index, fault }) => {
                self.reporter.report(&DispatchError::SubscriberFault {
                    target,
                    index,
                    source: fault,
                });
                Delivery::aborted(index, subscribers.len())
            }
        }
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registries = self.registries();
        f.debug_struct("Dispatcher")
            .field("typed", &registries.typed)
            .field("tagged", &registries.tagged.tags())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// DispatcherBuilder
// ============================================================================

/// Builder for a [`Dispatcher`].
///
/// # Example
/// ```rust
/// use herald_core::DispatchError;
/// use herald_std::{Dispatcher, EmptyPolicy};
///
/// let dispatcher = Dispatcher::builder()
///     .empty_policy(EmptyPolicy::Warn)
///     .reporter(|error: &DispatchError| eprintln!("{error}"))
///     .build();
/// # let _ = dispatcher;
/// ```
pub struct DispatcherBuilder {
    config: DispatcherConfig,
    reporter: Option<Arc<dyn Reporter>>,
}

impl Default for DispatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatcherBuilder {
    /// Start from the default configuration.
    pub fn new() -> Self {
        Self {
            config: DispatcherConfig::default(),
            reporter: None,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: DispatcherConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the behaviour for publishes to registered-but-empty keys.
    pub fn empty_policy(mut self, policy: EmptyPolicy) -> Self {
        self.config.empty_policy = policy;
        self
    }

    /// Set whether subscriber panics are caught as faults.
    pub fn catch_panics(mut self, catch: bool) -> Self {
        self.config.catch_panics = catch;
        self
    }

    /// Route reports to `reporter`.
    pub fn reporter<R: Reporter>(self, reporter: R) -> Self {
        self.shared_reporter(Arc::new(reporter))
    }

    /// Route reports to an already shared reporter.
    pub fn shared_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Build the dispatcher.
    pub fn build(self) -> Dispatcher {
        Dispatcher {
            registries: Mutex::new(Registries::default()),
            config: self.config,
            reporter: self.reporter.unwrap_or_else(default_reporter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{delivery::DeliveryOutcome, testing::RecordingReporter};
    use herald_core::Severity;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct Ping;
    impl Message for Ping {}

    fn recorded() -> (Dispatcher, RecordingReporter) {
        let reporter = RecordingReporter::new();
        let dispatcher = Dispatcher::builder().reporter(reporter.clone()).build();
        (dispatcher, reporter)
    }

    #[test]
    fn test_missing_subscriber_creates_no_registry() {
        let (dispatcher, reporter) = recorded();
        dispatcher.register::<Ping>(None);
        dispatcher.register_signal(3, None);

        assert!(!dispatcher.is_registered::<Ping>());
        assert!(!dispatcher.is_signal_registered(3));
        assert_eq!(reporter.count_of(Severity::Error), 2);
    }

    #[test]
    fn test_publish_counts_deliveries() {
        let (dispatcher, reporter) = recorded();
        let hits = Arc::new(AtomicUsize::new(0));
        for _ in 0..3 {
            let hits = hits.clone();
            dispatcher.register(Subscriber::new(move |_: &Ping| {
                hits.fetch_add(1, Ordering::SeqCst);
            }));
        }

        let delivery = dispatcher.publish(Ping);
        assert_eq!(delivery, Delivery::completed(3));
        assert_eq!(hits.load(Ordering::SeqCst), 3);
        assert!(reporter.is_empty());
    }

    #[test]
    fn test_empty_policy_warn() {
        let reporter = RecordingReporter::new();
        let dispatcher = Dispatcher::builder()
            .empty_policy(EmptyPolicy::Warn)
            .reporter(reporter.clone())
            .build();
        let subscriber = SignalSubscriber::new(|| {});
        dispatcher.register_signal(1, subscriber.clone());
        dispatcher.unregister_signal(1, subscriber);

        assert_eq!(dispatcher.publish_signal(1).outcome, DeliveryOutcome::Empty);
        assert_eq!(reporter.count_of(Severity::Warning), 1);
        assert!(reporter.messages()[0].contains("no subscribers"));
    }

    #[test]
    fn test_clear_resets_counts() {
        let (dispatcher, _) = recorded();
        dispatcher.register(Subscriber::new(|_: &Ping| {}));
        dispatcher.register_signal(1, SignalSubscriber::new(|| {}));
        assert_eq!(dispatcher.kind_count(), 1);
        assert_eq!(dispatcher.signal_count(), 1);

        dispatcher.clear();
        assert_eq!(dispatcher.kind_count(), 0);
        assert_eq!(dispatcher.signal_count(), 0);
        assert_eq!(dispatcher.subscriber_count::<Ping>(), 0);
    }

    #[test]
    fn test_debug_lists_registries() {
        let (dispatcher, _) = recorded();
        dispatcher.register_signal(4, SignalSubscriber::new(|| {}));
        let debug = format!("{dispatcher:?}");
        assert!(debug.contains("Dispatcher"));
        assert!(debug.contains("Tag(4)"));
    }
}
