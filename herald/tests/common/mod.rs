#![allow(dead_code)]

use herald::{Dispatcher, EmptyPolicy, Message, Signal, Tag, testing::RecordingReporter};

// ============================================================================
// Test Message Types
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Ping;

impl Message for Ping {}

#[derive(Clone, Debug, PartialEq)]
pub struct ScoreChanged {
    pub points: u32,
}

impl Message for ScoreChanged {}

/// Same shape as `ScoreChanged`, but a distinct kind.
#[derive(Clone, Debug, PartialEq)]
pub struct LivesChanged {
    pub points: u32,
}

impl Message for LivesChanged {}

// ============================================================================
// Test Signals
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Opening = 100,
    Opened = 101,
    Closing = 102,
    Closed = 103,
}

impl Signal for Screen {
    fn tag(&self) -> Tag {
        Tag(*self as i32)
    }
}

impl From<Screen> for Tag {
    fn from(screen: Screen) -> Self {
        screen.tag()
    }
}

// ============================================================================
// Dispatcher Fixtures
// ============================================================================

pub fn recorded() -> (Dispatcher, RecordingReporter) {
    let reporter = RecordingReporter::new();
    let dispatcher = Dispatcher::builder().reporter(reporter.clone()).build();
    (dispatcher, reporter)
}

pub fn recorded_with(policy: EmptyPolicy, catch_panics: bool) -> (Dispatcher, RecordingReporter) {
    let reporter = RecordingReporter::new();
    let dispatcher = Dispatcher::builder()
        .empty_policy(policy)
        .catch_panics(catch_panics)
        .reporter(reporter.clone())
        .build();
    (dispatcher, reporter)
}
