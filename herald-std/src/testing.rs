//! Testing utilities for Herald.
//!
//! This module provides utilities to make testing dispatcher wiring easier.
//!
//! # Features
//!
//! - [`RecordingReporter`]: A reporter that keeps every report for inspection
//! - [`CallLog`]: A shared, ordered log of subscriber invocations, with
//!   helpers that build recording, failing and panicking subscribers
//! - [`RecordingSubscriber`]: A subscriber that keeps a copy of every payload

use herald_core::{
    DispatchError, Message, Reporter, Severity, SignalSubscriber, Subscriber, Target,
};
use std::sync::{Arc, Mutex};

// ============================================================================
// Recording Reporter
// ============================================================================

/// One captured report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Severity of the report.
    pub severity: Severity,
    /// The kind or tag the report is about.
    pub target: Target,
    /// The rendered error message.
    pub message: String,
}

/// A reporter that records every report it receives.
///
/// # Example
///
/// ```rust
/// use herald_core::Severity;
/// use herald_std::{Dispatcher, testing::RecordingReporter};
///
/// let reporter = RecordingReporter::new();
/// let dispatcher = Dispatcher::builder().reporter(reporter.clone()).build();
///
/// dispatcher.publish_signal(8);
/// assert_eq!(reporter.count_of(Severity::Warning), 1);
/// ```
#[derive(Clone, Default)]
pub struct RecordingReporter {
    reports: Arc<Mutex<Vec<Report>>>,
}

impl RecordingReporter {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a clone of the recorded reports.
    pub fn reports(&self) -> Vec<Report> {
        self.reports.lock().unwrap().clone()
    }

    /// Get the rendered messages, in order.
    pub fn messages(&self) -> Vec<String> {
        self.reports
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.message.clone())
            .collect()
    }

    /// Get the number of recorded reports.
    pub fn count(&self) -> usize {
        self.reports.lock().unwrap().len()
    }

    /// Get the number of reports with the given severity.
    pub fn count_of(&self, severity: Severity) -> usize {
        self.reports
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.severity == severity)
            .count()
    }

    /// Get the number of reports about `target`.
    pub fn count_for(&self, target: Target) -> usize {
        self.reports
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.target == target)
            .count()
    }

    /// Check if nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Clear all recorded reports.
    pub fn clear(&self) {
        self.reports.lock().unwrap().clear();
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, error: &DispatchError) {
        self.reports.lock().unwrap().push(Report {
            severity: error.severity(),
            target: error.target(),
            message: error.to_string(),
        });
    }
}

// ============================================================================
// Call Log
// ============================================================================

/// A shared, ordered log of which subscriber ran.
///
/// Each helper returns a fresh subscriber handle that appends its label to
/// the log when invoked. Use distinct labels to assert invocation order.
///
/// # Example
///
/// ```rust
/// use herald_std::{Dispatcher, testing::CallLog};
///
/// let log = CallLog::new();
/// let dispatcher = Dispatcher::new();
/// dispatcher.register_signal(1, log.signal("first"));
/// dispatcher.register_signal(1, log.signal("second"));
///
/// dispatcher.publish_signal(1);
/// assert_eq!(log.calls(), vec!["first", "second"]);
/// ```
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `label` to the log directly.
    pub fn record(&self, label: &'static str) {
        self.calls.lock().unwrap().push(label);
    }

    /// A message subscriber that records `label`.
    pub fn message<M: Message>(&self, label: &'static str) -> Subscriber<M> {
        let log = self.clone();
        Subscriber::new(move |_: &M| log.record(label))
    }

    /// A message subscriber that records `label`, then fails with `error`.
    pub fn failing<M: Message>(&self, label: &'static str, error: &'static str) -> Subscriber<M> {
        let log = self.clone();
        Subscriber::new(move |_: &M| {
            log.record(label);
            Err::<(), _>(error)
        })
    }

    /// A message subscriber that records `label`, then panics with `message`.
    #[allow(clippy::unused_unit)]
    pub fn panicking<M: Message>(
        &self,
        label: &'static str,
        message: &'static str,
    ) -> Subscriber<M> {
        let log = self.clone();
        Subscriber::new(move |_: &M| -> () {
            log.record(label);
            panic!("{message}");
        })
    }

    /// A signal subscriber that records `label`.
    pub fn signal(&self, label: &'static str) -> SignalSubscriber {
        let log = self.clone();
        SignalSubscriber::new(move || log.record(label))
    }

    /// A signal subscriber that records `label`, then fails with `error`.
    pub fn failing_signal(&self, label: &'static str, error: &'static str) -> SignalSubscriber {
        let log = self.clone();
        SignalSubscriber::new(move || {
            log.record(label);
            Err::<(), _>(error)
        })
    }

    /// A signal subscriber that records `label`, then panics with `message`.
    #[allow(clippy::unused_unit)]
    pub fn panicking_signal(&self, label: &'static str, message: &'static str) -> SignalSubscriber {
        let log = self.clone();
        SignalSubscriber::new(move || -> () {
            log.record(label);
            panic!("{message}");
        })
    }

    /// Get the labels recorded so far, in invocation order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    /// Get how often `label` was recorded.
    pub fn count(&self, label: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|l| **l == label)
            .count()
    }

    /// Clear the log.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

// ============================================================================
// Recording Subscriber
// ============================================================================

/// A subscriber that records every payload it receives.
///
/// # Example
///
/// ```rust
/// use herald_core::Message;
/// use herald_std::{Dispatcher, testing::RecordingSubscriber};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Score(u32);
/// impl Message for Score {}
///
/// let recorder = RecordingSubscriber::<Score>::new();
/// let dispatcher = Dispatcher::new();
/// dispatcher.register(recorder.subscriber());
///
/// dispatcher.publish(Score(3));
/// assert_eq!(recorder.messages(), vec![Score(3)]);
/// ```
pub struct RecordingSubscriber<M: Clone> {
    messages: Arc<Mutex<Vec<M>>>,
    subscriber: Subscriber<M>,
}

impl<M: Message + Clone> RecordingSubscriber<M> {
    /// Create a recorder with its own subscriber handle.
    pub fn new() -> Self {
        let messages = Arc::new(Mutex::new(Vec::new()));
        let sink = messages.clone();
        let subscriber = Subscriber::new(move |message: &M| {
            sink.lock().unwrap().push(message.clone());
        });
        Self {
            messages,
            subscriber,
        }
    }

    /// The handle to register (and later unregister).
    pub fn subscriber(&self) -> Subscriber<M> {
        self.subscriber.clone()
    }

    /// Get a clone of the recorded payloads.
    pub fn messages(&self) -> Vec<M> {
        self.messages.lock().unwrap().clone()
    }

    /// Get the number of recorded payloads.
    pub fn count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

impl<M: Message + Clone> Default for RecordingSubscriber<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Clone> Clone for RecordingSubscriber<M> {
    fn clone(&self) -> Self {
        Self {
            messages: self.messages.clone(),
            subscriber: self.subscriber.clone(),
        }
    }
}
