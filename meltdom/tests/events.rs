use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use meltdom::{Document, DomError, Element, Event, EventKind, Key, Unbind};

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_dispatch_runs_matching_listeners_in_order() {
    let doc = Document::new();
    let el = doc.mount(Element::button());
    let log = Arc::new(Mutex::new(Vec::new()));

    let l1 = Arc::clone(&log);
    let _a = el.on(EventKind::Click, move |_| l1.lock().unwrap().push("first"));
    let l2 = Arc::clone(&log);
    let _b = el.on(EventKind::Click, move |_| l2.lock().unwrap().push("second"));
    let l3 = Arc::clone(&log);
    let _c = el.on(EventKind::KeyDown, move |_| l3.lock().unwrap().push("key"));

    let result = el.click();
    assert_eq!(result.handled, 2);
    assert!(!result.default_prevented);
    assert_eq!(*log.lock().unwrap(), vec!["first", "second"]);
}

#[test]
fn test_dispatch_exposes_key_and_prevent_default() {
    let doc = Document::new();
    let el = doc.mount(Element::button());
    let seen = Arc::new(Mutex::new(None));

    let s = Arc::clone(&seen);
    let _u = el.on(EventKind::KeyDown, move |cx| {
        *s.lock().unwrap() = cx.key();
        if cx.key() == Some(Key::Down) {
            cx.prevent_default();
        }
    });

    assert!(el.key_down(Key::Down).default_prevented);
    assert_eq!(*seen.lock().unwrap(), Some(Key::Down));
    assert!(!el.key_down(Key::Char('a')).default_prevented);
}

#[test]
fn test_listener_can_mutate_document() {
    let doc = Document::new();
    let el = doc.mount(Element::button());
    let _u = el.on(EventKind::Click, |cx| {
        cx.target().set_attr("data-clicked", "true");
        cx.target().focus();
    });

    el.click();
    assert_eq!(el.attr("data-clicked").as_deref(), Some("true"));
    assert!(el.is_focused());
}

#[test]
fn test_dispatch_from_other_document_is_ignored() {
    let doc = Document::new();
    let other = Document::new();
    let el = other.mount(Element::button());
    let _u = el.on(EventKind::Click, |_| panic!("should not run"));

    assert_eq!(doc.dispatch(&el, Event::click()).handled, 0);
}

// ============================================================================
// Unbind
// ============================================================================

#[test]
fn test_unbind_is_idempotent() {
    let doc = Document::new();
    let el = doc.mount(Element::button());
    let count = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&count);
    let unbind = el.on(EventKind::Click, move |_| {
        c.fetch_add(1, Ordering::SeqCst);
    });

    el.click();
    unbind.call();
    unbind.call();
    el.click();

    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(doc.listener_count(), 0);
}

#[test]
fn test_combined_unbind_releases_each_once() {
    let releases = Arc::new(AtomicUsize::new(0));
    let parts = (0..3).map(|_| {
        let r = Arc::clone(&releases);
        Unbind::new(move || {
            r.fetch_add(1, Ordering::SeqCst);
        })
    });
    let combined = Unbind::combine(parts);
    assert_eq!(combined.pending(), 3);

    combined.call();
    combined.call();
    assert_eq!(releases.load(Ordering::SeqCst), 3);
    assert_eq!(combined.pending(), 0);
}

#[test]
fn test_unbind_without_firing() {
    let doc = Document::new();
    let el = doc.mount(Element::button());
    let unbind = Unbind::combine([
        el.on(EventKind::Click, |_| {}),
        el.on(EventKind::KeyDown, |_| {}),
    ]);
    assert_eq!(doc.listener_count(), 2);

    unbind.call();
    assert_eq!(doc.listener_count(), 0);
}

#[test]
fn test_listener_unbound_mid_dispatch_is_skipped() {
    let doc = Document::new();
    let el = doc.mount(Element::button());
    let later: Arc<Mutex<Option<Unbind>>> = Arc::new(Mutex::new(None));

    let l = Arc::clone(&later);
    let _first = el.on(EventKind::Click, move |_| {
        if let Some(unbind) = l.lock().unwrap().take() {
            unbind.call();
        }
    });
    let second = el.on(EventKind::Click, |_| panic!("unbound listener ran"));
    *later.lock().unwrap() = Some(second);

    assert_eq!(el.click().handled, 1);
}

#[test]
fn test_unbind_after_document_dropped() {
    let unbind = {
        let doc = Document::new();
        let el = doc.mount(Element::button());
        let unbind = el.on(EventKind::Click, |_| {});
        drop(el);
        unbind
    };
    unbind.call();
    assert_eq!(unbind.pending(), 0);
}

// ============================================================================
// Keys
// ============================================================================

#[test]
fn test_key_names() {
    assert_eq!(Key::Down.name(), "ArrowDown");
    assert_eq!(Key::Up.name(), "ArrowUp");
    assert_eq!(Key::Home.name(), "Home");
    assert_eq!(Key::Char(' ').name(), " ");
    assert_eq!(Key::F(5).name(), "F5");
}

#[test]
fn test_key_from_str() {
    assert_eq!("ArrowDown".parse::<Key>(), Ok(Key::Down));
    assert_eq!("End".parse::<Key>(), Ok(Key::End));
    assert_eq!("a".parse::<Key>(), Ok(Key::Char('a')));
    assert_eq!("F12".parse::<Key>(), Ok(Key::F(12)));
    assert_eq!(
        "Hyper".parse::<Key>(),
        Err(DomError::UnknownKey("Hyper".to_string()))
    );
}

#[test]
fn test_key_from_crossterm() {
    use crossterm::event::KeyCode;

    assert_eq!(Key::from(KeyCode::Down), Key::Down);
    assert_eq!(Key::from(KeyCode::Home), Key::Home);
    assert_eq!(Key::from(KeyCode::Char('x')), Key::Char('x'));
    assert_eq!(Key::from(KeyCode::Null), Key::Unidentified);
}
