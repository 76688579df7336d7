//! Dispatcher configuration.

/// What to do when a publish reaches a registry that exists but whose
/// subscribers were all removed.
///
/// A key that was never registered (or was cleared) always produces a
/// warning; this policy only concerns the registered-but-empty case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyPolicy {
    /// Do nothing.
    #[default]
    Silent,
    /// Report a `NoSubscribers` warning.
    Warn,
}

/// Tunables for a [`Dispatcher`](crate::Dispatcher).
///
/// # Example
///
/// ```rust
/// use herald_std::{Dispatcher, DispatcherConfig, EmptyPolicy};
///
/// let config = DispatcherConfig {
///     empty_policy: EmptyPolicy::Warn,
///     ..DispatcherConfig::default()
/// };
/// let dispatcher = Dispatcher::builder().config(config).build();
/// assert_eq!(dispatcher.config().empty_policy, EmptyPolicy::Warn);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatcherConfig {
    /// Behaviour for publishes to registered-but-empty keys.
    pub empty_policy: EmptyPolicy,
    /// Treat a panicking subscriber as a fault instead of unwinding through
    /// `publish`. Default `true`.
    ///
    /// With `false`, publishing no longer absorbs every fault: a subscriber
    /// panic unwinds into the caller of `publish` and is not reported.
    /// Returned errors are still contained.
    pub catch_panics: bool,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            empty_policy: EmptyPolicy::Silent,
            catch_panics: true,
        }
    }
}
