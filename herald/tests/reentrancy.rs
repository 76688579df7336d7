//! Subscribers mutating the dispatcher while a publish is in flight.
//!
//! Publishing works on a snapshot, so changes made during a fan-out apply
//! from the next publish on.

use herald::{
    DeliveryOutcome, DispatchError, Dispatcher, Subscriber, testing::CallLog,
};
use std::sync::{Arc, Mutex, OnceLock, Weak};

mod common;
use common::{Ping, ScoreChanged, recorded};

#[test]
fn test_subscriber_can_unregister_itself() {
    let (dispatcher, reporter) = recorded();
    let dispatcher = Arc::new(dispatcher);
    let log = CallLog::new();
    let own_handle: Arc<OnceLock<Subscriber<Ping>>> = Arc::new(OnceLock::new());

    let once = {
        let weak = Arc::downgrade(&dispatcher);
        let handle = own_handle.clone();
        let log = log.clone();
        Subscriber::new(move |_: &Ping| {
            log.record("once");
            if let (Some(dispatcher), Some(me)) = (weak.upgrade(), handle.get()) {
                dispatcher.unregister(me.clone());
            }
        })
    };
    own_handle.set(once.clone()).unwrap();
    dispatcher.register(once);
    dispatcher.register(log.message::<Ping>("after"));

    dispatcher.publish(Ping);
    dispatcher.publish(Ping);

    assert_eq!(log.calls(), vec!["once", "after", "after"]);
    assert_eq!(dispatcher.subscriber_count::<Ping>(), 1);
    assert!(reporter.is_empty());
}

#[test]
fn test_unregistering_a_later_subscriber_applies_next_publish() {
    let (dispatcher, _) = recorded();
    let dispatcher = Arc::new(dispatcher);
    let log = CallLog::new();
    let victim = log.message::<Ping>("victim");

    let remover = {
        let weak = Arc::downgrade(&dispatcher);
        let victim = victim.clone();
        let log = log.clone();
        Subscriber::new(move |_: &Ping| {
            log.record("remover");
            if let Some(dispatcher) = weak.upgrade() {
                dispatcher.unregister(victim.clone());
            }
        })
    };
    dispatcher.register(remover);
    dispatcher.register(victim);

    let first = dispatcher.publish(Ping);
    let second = dispatcher.publish(Ping);

    assert_eq!(log.calls(), vec!["remover", "victim", "remover"]);
    assert_eq!(first.delivered, 2);
    assert_eq!(second.delivered, 1);
}

#[test]
fn test_registering_during_publish_applies_next_publish() {
    let (dispatcher, _) = recorded();
    let dispatcher = Arc::new(dispatcher);
    let log = CallLog::new();

    let spawner = {
        let weak = Arc::downgrade(&dispatcher);
        let log = log.clone();
        Subscriber::new(move |_: &Ping| {
            log.record("spawner");
            if let Some(dispatcher) = weak.upgrade() {
                dispatcher.register(log.message::<Ping>("spawned"));
            }
        })
    };
    dispatcher.register(spawner);

    dispatcher.publish(Ping);
    assert_eq!(log.calls(), vec!["spawner"]);

    dispatcher.publish(Ping);
    assert_eq!(log.calls(), vec!["spawner", "spawner", "spawned"]);
}

#[test]
fn test_clear_during_publish_finishes_current_fanout() {
    let (dispatcher, reporter) = recorded();
    let dispatcher = Arc::new(dispatcher);
    let log = CallLog::new();

    let clearer = {
        let weak = Arc::downgrade(&dispatcher);
        let log = log.clone();
        Subscriber::new(move |_: &Ping| {
            log.record("clearer");
            if let Some(dispatcher) = weak.upgrade() {
                dispatcher.clear();
            }
        })
    };
    dispatcher.register(clearer);
    dispatcher.register(log.message::<Ping>("tail"));

    let first = dispatcher.publish(Ping);
    let second = dispatcher.publish(Ping);

    assert_eq!(log.calls(), vec!["clearer", "tail"]);
    assert_eq!(first.outcome, DeliveryOutcome::Completed);
    assert_eq!(second.outcome, DeliveryOutcome::Unregistered);
    assert_eq!(reporter.count(), 1);
}

#[test]
fn test_nested_publish_does_not_deadlock() {
    let (dispatcher, _) = recorded();
    let dispatcher = Arc::new(dispatcher);
    let log = CallLog::new();

    let relay = {
        let weak = Arc::downgrade(&dispatcher);
        let log = log.clone();
        Subscriber::new(move |event: &ScoreChanged| {
            log.record("relay");
            if let Some(dispatcher) = weak.upgrade() {
                if event.points > 0 {
                    dispatcher.publish(Ping);
                }
            }
        })
    };
    dispatcher.register(relay);
    dispatcher.register(log.message::<Ping>("ping"));

    let delivery = dispatcher.publish(ScoreChanged { points: 3 });

    assert!(delivery.is_complete());
    assert_eq!(log.calls(), vec!["relay", "ping"]);
}

#[test]
fn test_reporter_may_call_back_into_dispatcher() {
    let slot: Arc<OnceLock<Weak<Dispatcher>>> = Arc::new(OnceLock::new());
    let seen_kinds = Arc::new(Mutex::new(Vec::new()));

    let reporter = {
        let slot = slot.clone();
        let seen_kinds = seen_kinds.clone();
        move |_: &DispatchError| {
            if let Some(dispatcher) = slot.get().and_then(Weak::upgrade) {
                seen_kinds.lock().unwrap().push(dispatcher.kind_count());
            }
        }
    };
    let dispatcher = Arc::new(Dispatcher::builder().reporter(reporter).build());
    slot.set(Arc::downgrade(&dispatcher)).unwrap();

    let log = CallLog::new();
    dispatcher.register(log.failing::<Ping>("bad", "broken"));
    dispatcher.register::<ScoreChanged>(None);
    dispatcher.publish(Ping);
    dispatcher.publish_signal(1);

    assert_eq!(*seen_kinds.lock().unwrap(), vec![1, 1, 1]);
}
