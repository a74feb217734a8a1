#![allow(dead_code)]

use std::sync::Arc;

use accordion::prelude::*;
use accordion::Subscription;
use meltdom::{Document, Element, ElementRef, SequentialIds, Unbind};

pub struct Mounted {
    pub props: ItemProps,
    pub item: ElementRef,
    pub trigger: ElementRef,
    pub content: ElementRef,
}

/// An accordion mounted into a document, re-rendered on every change.
pub struct Fixture {
    pub doc: Document,
    pub root: ElementRef,
    pub items: Arc<Vec<Mounted>>,
    pub bindings: Unbind,
    _subscriptions: Vec<Subscription>,
}

impl Fixture {
    fn find(&self, value: &str) -> &Mounted {
        self.items
            .iter()
            .find(|m| m.props.parse().value == value)
            .unwrap_or_else(|| panic!("no item '{value}'"))
    }

    pub fn trigger(&self, value: &str) -> &ElementRef {
        &self.find(value).trigger
    }

    pub fn content(&self, value: &str) -> &ElementRef {
        &self.find(value).content
    }

    pub fn item(&self, value: &str) -> &ElementRef {
        &self.find(value).item
    }

    /// Let the render pass settle: run deferred linking.
    pub fn settle(&self) -> usize {
        self.doc.flush()
    }

    pub fn focused_value(&self) -> Option<String> {
        self.doc.focused().and_then(|el| el.attr("data-value"))
    }
}

pub fn sequential_config(prefix: &str) -> AccordionConfig {
    AccordionConfig::new().id_generator(Arc::new(SequentialIds::new(prefix)))
}

pub fn mount(accordion: &Accordion, props: &[ItemProps]) -> Fixture {
    mount_in(&Document::new(), accordion, props)
}

pub fn mount_in(doc: &Document, accordion: &Accordion, props: &[ItemProps]) -> Fixture {
    let root = doc.mount(Element::div());
    apply_attributes(&root, &accordion.root().attrs());

    let items: Vec<Mounted> = props
        .iter()
        .map(|props| {
            let item = root.append(Element::div());
            let trigger = item.append(Element::button());
            let content = item.append(Element::section());
            Mounted {
                props: props.clone(),
                item,
                trigger,
                content,
            }
        })
        .collect();
    let items = Arc::new(items);

    let mut subscriptions = Vec::new();
    let rendered = Arc::clone(&items);
    subscriptions.push(accordion.item().subscribe(move |view| {
        for m in rendered.iter() {
            apply_attributes(&m.item, &view.attrs(&m.props));
        }
    }));
    let rendered = Arc::clone(&items);
    subscriptions.push(accordion.trigger().subscribe(move |view| {
        for m in rendered.iter() {
            apply_attributes(&m.trigger, &view.attrs(&m.props));
        }
    }));
    let rendered = Arc::clone(&items);
    subscriptions.push(accordion.content().subscribe(move |view| {
        for m in rendered.iter() {
            apply_attributes(&m.content, &view.attrs(&m.props));
        }
    }));

    let bindings = Unbind::combine(items.iter().map(|m| accordion.trigger().action(&m.trigger)));
    for m in items.iter() {
        let _ = accordion.content().action(&m.content);
    }

    Fixture {
        doc: doc.clone(),
        root,
        items,
        bindings,
        _subscriptions: subscriptions,
    }
}

pub fn props(values: &[&str]) -> Vec<ItemProps> {
    values.iter().map(|v| ItemProps::from(*v)).collect()
}
