use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use accordion::{Derived, State, Watch};

// ============================================================================
// State
// ============================================================================

#[test]
fn test_state_get_set_update() {
    let state = State::new(1);
    state.set(5);
    assert_eq!(state.get(), 5);
    state.update(|v| *v *= 2);
    assert_eq!(state.get(), 10);
    assert_eq!(state.with(|v| *v + 1), 11);
}

#[test]
fn test_state_clones_share_value() {
    let a = State::new(String::from("x"));
    let b = a.clone();
    b.set("y".into());
    assert_eq!(a.get(), "y");
}

fn describe<T: fmt::Debug>(state: &State<T>) -> String {
    format!("{state:?}")
}

#[test]
fn test_state_debug_needs_only_debug() {
    let state = State::new(3);
    assert_eq!(describe(&state), "State { value: 3, dirty: false, subscribers: 0 }");

    let _sub = state.subscribe(|_| {});
    assert!(describe(&state).ends_with("subscribers: 1 }"));
}

#[test]
fn test_state_dirty_flag() {
    let state = State::new(0);
    assert!(!state.is_dirty());
    state.set(1);
    assert!(state.is_dirty());
    state.clear_dirty();
    assert!(!state.is_dirty());
}

#[test]
fn test_subscribe_runs_immediately_then_on_every_write() {
    let state = State::new(1);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let s = Arc::clone(&seen);
    let _sub = state.subscribe(move |v| s.lock().unwrap().push(*v));

    state.set(2);
    state.update(|v| *v += 1);
    assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_dropping_subscription_stops_notifications() {
    let state = State::new(0);
    let count = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&count);
    let sub = state.subscribe(move |_| {
        c.fetch_add(1, Ordering::SeqCst);
    });
    assert_eq!(state.subscriber_count(), 1);

    sub.unsubscribe();
    state.set(1);
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(state.subscriber_count(), 0);
}

#[test]
fn test_subscriber_may_read_state() {
    let state = State::new(0);
    let reader = state.clone();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let s = Arc::clone(&seen);
    let _sub = state.subscribe(move |v| s.lock().unwrap().push((*v, reader.get())));

    state.set(7);
    assert_eq!(*seen.lock().unwrap(), vec![(0, 0), (7, 7)]);
}

// ============================================================================
// Derived
// ============================================================================

#[test]
fn test_derived_recomputes_lazily() {
    let source = State::new(2);
    let computed = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&computed);
    let doubled = Derived::map(&source, move |v| {
        c.fetch_add(1, Ordering::SeqCst);
        v * 2
    });
    assert_eq!(computed.load(Ordering::SeqCst), 0);

    assert_eq!(doubled.get(), 4);
    assert_eq!(doubled.get(), 4);
    assert_eq!(computed.load(Ordering::SeqCst), 1);

    source.set(5);
    assert_eq!(computed.load(Ordering::SeqCst), 1);
    assert_eq!(doubled.get(), 10);
    assert_eq!(computed.load(Ordering::SeqCst), 2);
}

#[test]
fn test_derived_notifies_within_the_write() {
    let source = State::new(1);
    let doubled = Derived::map(&source, |v| v * 2);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let s = Arc::clone(&seen);
    let _sub = doubled.subscribe(move |v| s.lock().unwrap().push(*v));

    source.set(3);
    assert_eq!(*seen.lock().unwrap(), vec![2, 6]);
}

#[test]
fn test_derived_from_two_sources() {
    let a = State::new(1);
    let b = State::new(10);
    let sum = Derived::map2(&a, &b, |a, b| a + b);
    assert_eq!(sum.get(), 11);

    a.set(2);
    assert_eq!(sum.get(), 12);
    b.set(20);
    assert_eq!(sum.get(), 22);
}

#[test]
fn test_derived_chain() {
    let source = State::new(1);
    let doubled = Derived::map(&source, |v| v * 2);
    let inner = doubled.clone();
    let sources: [&dyn Watch; 1] = [&doubled];
    let plus_one = Derived::new(&sources, move || inner.get() + 1);

    let seen = Arc::new(Mutex::new(Vec::new()));
    let s = Arc::clone(&seen);
    let _sub = plus_one.subscribe(move |v| s.lock().unwrap().push(*v));

    source.set(4);
    assert_eq!(*seen.lock().unwrap(), vec![3, 9]);
}

#[test]
fn test_dropping_derived_releases_source() {
    let source = State::new(0);
    let derived = Derived::map(&source, |v| v + 1);
    assert_eq!(source.subscriber_count(), 1);

    drop(derived);
    assert_eq!(source.subscriber_count(), 0);
}
