use meltdom::{Document, Element, EventKind, Selector, MELT_ID};

fn list() -> Element {
    Element::div()
        .attr(MELT_ID, "list")
        .child(
            Element::div()
                .id("group")
                .child(Element::button().id("a").attr("data-part", "trigger"))
                .child(Element::button().id("b").attr("data-part", "trigger")),
        )
        .child(Element::button().id("c").attr("data-part", "trigger"))
}

// ============================================================================
// Mounting & Attributes
// ============================================================================

#[test]
fn test_mount_preserves_attributes() {
    let doc = Document::new();
    let root = doc.mount(Element::div().attr("data-x", "1").attr("data-y", "2"));

    assert_eq!(root.tag().as_deref(), Some("div"));
    assert_eq!(root.attr("data-x").as_deref(), Some("1"));
    assert_eq!(
        root.attrs(),
        vec![
            ("data-x".to_string(), "1".to_string()),
            ("data-y".to_string(), "2".to_string())
        ]
    );
}

#[test]
fn test_set_and_remove_attr() {
    let doc = Document::new();
    let el = doc.mount(Element::button());

    el.set_attr("aria-expanded", "false");
    el.set_attr("aria-expanded", "true");
    assert_eq!(el.attr("aria-expanded").as_deref(), Some("true"));
    assert_eq!(el.attrs().len(), 1);

    el.remove_attr("aria-expanded");
    assert!(!el.has_attr("aria-expanded"));
}

#[test]
fn test_set_attrs_batch_removes_none() {
    let doc = Document::new();
    let el = doc.mount(Element::div().attr("hidden", ""));

    el.set_attrs([
        ("hidden", None),
        ("data-state", Some("open".to_string())),
    ]);

    assert!(!el.has_attr("hidden"));
    assert_eq!(el.attr("data-state").as_deref(), Some("open"));
}

#[test]
fn test_dom_id_roundtrip() {
    let doc = Document::new();
    let el = doc.mount(Element::div());
    assert_eq!(el.dom_id(), None);
    el.set_dom_id("content-1");
    assert_eq!(el.dom_id().as_deref(), Some("content-1"));
}

// ============================================================================
// Instance Registry
// ============================================================================

#[test]
fn test_element_by_melt_id() {
    let doc = Document::new();
    let root = doc.mount(list());

    assert_eq!(doc.element_by_melt_id("list"), Some(root));
    assert_eq!(doc.element_by_melt_id("missing"), None);
}

#[test]
fn test_melt_id_set_after_mount() {
    let doc = Document::new();
    let root = doc.mount(Element::div());
    assert_eq!(doc.element_by_melt_id("late"), None);

    root.set_attr(MELT_ID, "late");
    assert_eq!(doc.element_by_melt_id("late"), Some(root.clone()));

    root.set_attr(MELT_ID, "renamed");
    assert_eq!(doc.element_by_melt_id("late"), None);
    assert_eq!(doc.element_by_melt_id("renamed"), Some(root.clone()));

    root.remove_attr(MELT_ID);
    assert_eq!(doc.element_by_melt_id("renamed"), None);
}

#[test]
fn test_removed_root_unregisters() {
    let doc = Document::new();
    let root = doc.mount(list());
    root.remove();

    assert_eq!(doc.element_by_melt_id("list"), None);
    assert!(!root.is_connected());
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_query_all_document_order() {
    let doc = Document::new();
    let root = doc.mount(list());

    let ids: Vec<_> = root
        .query_all(&Selector::equals("data-part", "trigger"))
        .iter()
        .filter_map(|el| el.dom_id())
        .collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn test_query_all_is_scoped() {
    let doc = Document::new();
    let first = doc.mount(list());
    let _second = doc.mount(list().attr(MELT_ID, "other"));

    let sel = Selector::has("data-part");
    assert_eq!(first.query_all(&sel).len(), 3);
    assert_eq!(doc.query_all(&sel).len(), 6);
}

#[test]
fn test_query_excludes_self() {
    let doc = Document::new();
    let root = doc.mount(Element::div().attr("data-part", "trigger"));
    assert!(root.query(&Selector::has("data-part")).is_none());
}

#[test]
fn test_selector_display_and_conjunction() {
    let sel = Selector::has("data-melt-accordion-trigger").with("data-value", "x");
    assert_eq!(
        sel.to_string(),
        "[data-melt-accordion-trigger][data-value=\"x\"]"
    );

    let attrs = vec![
        ("data-melt-accordion-trigger".to_string(), String::new()),
        ("data-value".to_string(), "x".to_string()),
    ];
    assert!(sel.matches(&attrs));
    assert!(!sel.matches(&attrs[..1]));
}

#[test]
fn test_append_and_children() {
    let doc = Document::new();
    let root = doc.mount(Element::div());
    let a = root.append(Element::button().id("a"));
    let b = root.append(Element::button().id("b"));

    assert_eq!(root.children(), vec![a.clone(), b]);
    assert_eq!(a.parent(), Some(root));
}

#[test]
fn test_stale_handle_is_inert() {
    let doc = Document::new();
    let root = doc.mount(Element::div());
    let child = root.append(Element::button().attr("data-value", "x"));
    child.remove();

    assert_eq!(child.attr("data-value"), None);
    child.set_attr("data-value", "y");
    assert_eq!(child.attr("data-value"), None);
    assert!(root.children().is_empty());

    let orphan = child.append(Element::div());
    assert!(!orphan.is_connected());
}

// ============================================================================
// Focus
// ============================================================================

#[test]
fn test_focus_and_blur() {
    let doc = Document::new();
    let root = doc.mount(list());
    let triggers = root.query_all(&Selector::has("data-part"));

    assert_eq!(doc.focused(), None);
    triggers[1].focus();
    assert!(triggers[1].is_focused());
    assert_eq!(doc.focused(), Some(triggers[1].clone()));

    assert!(doc.blur());
    assert!(!doc.blur());
}

#[test]
fn test_removing_focused_element_clears_focus() {
    let doc = Document::new();
    let root = doc.mount(list());
    let first = root.query(&Selector::has("data-part")).expect("trigger");
    first.focus();

    root.remove();
    assert_eq!(doc.focused(), None);

    first.focus();
    assert_eq!(doc.focused(), None);
}

// ============================================================================
// Listeners on removed elements
// ============================================================================

#[test]
fn test_removing_elements_drops_their_listeners() {
    let doc = Document::new();
    let buttons: Vec<_> = (0..100).map(|_| doc.mount(Element::button())).collect();
    let bindings: Vec<_> = buttons
        .iter()
        .map(|button| button.on(EventKind::Click, |_| {}))
        .collect();
    assert_eq!(doc.listener_count(), 100);

    for button in &buttons {
        button.remove();
    }
    assert_eq!(doc.listener_count(), 0);

    // Unbinding afterwards is harmless.
    for binding in &bindings {
        binding.call();
    }
    assert_eq!(doc.listener_count(), 0);
}

#[test]
fn test_removing_subtree_keeps_other_listeners() {
    let doc = Document::new();
    let root = doc.mount(list());
    let kept = doc.mount(Element::button());
    for trigger in root.query_all(&Selector::has("data-part")) {
        let _ = trigger.on(EventKind::Click, |_| {});
    }
    let _ = kept.on(EventKind::Click, |_| {});
    assert_eq!(doc.listener_count(), 4);

    root.remove();
    assert_eq!(doc.listener_count(), 1);
    assert_eq!(kept.click().handled, 1);
}
