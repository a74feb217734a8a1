//! Live document: an arena of mounted elements addressed through
//! [`ElementRef`] handles.
//!
//! The document also owns the instance registry (`data-melt-id` → element),
//! listener table, focus and the render-tick queue, so widget code never
//! reaches for ambient global state.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, trace};

use crate::element::Element;
use crate::event::{Dispatch, Event, EventCx, EventKind, Key};
use crate::listener::{Handler, Listener, ListenerId, Unbind};
use crate::selector::Selector;
use crate::tick::{PendingTick, Tick};

/// Attribute under which widget roots register their instance identifier.
pub const MELT_ID: &str = "data-melt-id";

/// Node identifier (index into the arena).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Node {
    tag: String,
    attrs: Vec<(String, String)>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    connected: bool,
}

#[derive(Default)]
struct DocumentInner {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
    melt_ids: HashMap<String, NodeId>,
    focused: Option<NodeId>,
    listeners: Vec<Listener>,
    next_listener: u64,
}

impl DocumentInner {
    fn live(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).filter(|node| node.connected)
    }

    fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.live(id)?
            .attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn insert(&mut self, parent: Option<NodeId>, element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            tag: element.tag,
            attrs: Vec::new(),
            parent,
            children: Vec::new(),
            connected: true,
        });
        match parent {
            Some(parent) => self.nodes[parent.0].children.push(id),
            None => self.roots.push(id),
        }
        for (name, value) in element.attrs {
            self.set_attr(id, name, value);
        }
        for child in element.children {
            self.insert(Some(id), child);
        }
        id
    }

    fn set_attr(&mut self, id: NodeId, name: String, value: String) {
        if self.live(id).is_none() {
            return;
        }
        if name == MELT_ID {
            self.unregister(id);
            self.melt_ids.insert(value.clone(), id);
        }
        let node = &mut self.nodes[id.0];
        match node.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => node.attrs.push((name, value)),
        }
    }

    fn remove_attr(&mut self, id: NodeId, name: &str) {
        if self.live(id).is_none() {
            return;
        }
        if name == MELT_ID {
            self.unregister(id);
        }
        self.nodes[id.0].attrs.retain(|(n, _)| n != name);
    }

    fn unregister(&mut self, id: NodeId) {
        if let Some(old) = self.attr(id, MELT_ID).map(str::to_owned) {
            if self.melt_ids.get(&old) == Some(&id) {
                self.melt_ids.remove(&old);
            }
        }
    }

    /// Descendants of `id` in document order, excluding `id` itself.
    fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = match self.live(id) {
            Some(node) => node.children.iter().rev().copied().collect(),
            None => return out,
        };
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.nodes[next.0].children.iter().rev().copied());
        }
        out
    }

    fn detach(&mut self, id: NodeId) {
        if self.live(id).is_none() {
            return;
        }
        match self.nodes[id.0].parent {
            Some(parent) => self.nodes[parent.0].children.retain(|c| *c != id),
            None => self.roots.retain(|r| *r != id),
        }
        let mut subtree = self.descendants(id);
        subtree.push(id);
        for &node in &subtree {
            self.unregister(node);
            if self.focused == Some(node) {
                self.focused = None;
            }
            self.nodes[node.0].connected = false;
        }
        self.listeners.retain(|listener| !subtree.contains(&listener.node));
    }
}

/// Shared handle to a live document. Cheap to clone.
#[derive(Clone, Default)]
pub struct Document {
    inner: Arc<RwLock<DocumentInner>>,
    ticks: Arc<Mutex<VecDeque<PendingTick>>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, DocumentInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, DocumentInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn handle(&self, id: NodeId) -> ElementRef {
        ElementRef {
            doc: self.clone(),
            id,
        }
    }

    /// Mount a tree at the top level of the document.
    pub fn mount(&self, element: Element) -> ElementRef {
        let id = self.write().insert(None, element);
        self.handle(id)
    }

    /// Top-level elements in mount order.
    pub fn roots(&self) -> Vec<ElementRef> {
        let roots = self.read().roots.clone();
        roots.into_iter().map(|id| self.handle(id)).collect()
    }

    /// Resolve a widget root by its instance identifier.
    pub fn element_by_melt_id(&self, melt_id: &str) -> Option<ElementRef> {
        let id = self.read().melt_ids.get(melt_id).copied()?;
        Some(self.handle(id))
    }

    /// Every connected element matching `selector`, in document order.
    pub fn query_all(&self, selector: &Selector) -> Vec<ElementRef> {
        let ids: Vec<NodeId> = {
            let inner = self.read();
            inner
                .roots
                .iter()
                .flat_map(|root| std::iter::once(*root).chain(inner.descendants(*root)))
                .filter(|id| selector.matches(&inner.nodes[id.0].attrs))
                .collect()
        };
        ids.into_iter().map(|id| self.handle(id)).collect()
    }

    /// The currently focused element.
    pub fn focused(&self) -> Option<ElementRef> {
        let id = self.read().focused?;
        Some(self.handle(id))
    }

    /// Clear focus. Returns true if something was focused.
    pub fn blur(&self) -> bool {
        self.write().focused.take().is_some()
    }

    /// Dispatch an event at `target`. Targets from another document are
    /// ignored.
    pub fn dispatch(&self, target: &ElementRef, event: Event) -> Dispatch {
        if !Arc::ptr_eq(&self.inner, &target.doc.inner) {
            debug!("dispatch: target {:?} belongs to another document", target.id);
            return Dispatch::default();
        }
        target.dispatch(event)
    }

    /// Number of registered listeners across all elements.
    pub fn listener_count(&self) -> usize {
        self.read().listeners.len()
    }

    // -------------------------------------------------------------------------
    // Render ticks
    // -------------------------------------------------------------------------

    /// Queue `task` to run at the next [`flush`](Self::flush).
    pub fn tick(&self, task: impl FnOnce() + Send + 'static) -> Tick {
        let (pending, tick) = PendingTick::new(Box::new(task));
        self.ticks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(pending);
        tick
    }

    /// Run queued tasks in FIFO order, including tasks queued while
    /// flushing. Called by the rendering layer once its pass has settled.
    /// Returns how many tasks ran.
    pub fn flush(&self) -> usize {
        let mut ran = 0;
        loop {
            // The queue lock is released before the task runs so tasks can
            // queue further work.
            let next = self
                .ticks
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .pop_front();
            let Some(pending) = next else { break };
            pending.run();
            ran += 1;
        }
        if ran > 0 {
            trace!("flush: ran {} deferred task(s)", ran);
        }
        ran
    }

    /// Number of tasks waiting for the next flush.
    pub fn pending_ticks(&self) -> usize {
        self.ticks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.read();
        f.debug_struct("Document")
            .field("nodes", &inner.nodes.len())
            .field("roots", &inner.roots.len())
            .field("listeners", &inner.listeners.len())
            .field("focused", &inner.focused)
            .finish()
    }
}

/// Handle to one element of a [`Document`].
///
/// Handles stay valid after the element is removed; they then report no
/// attributes, no relatives and ignore writes.
#[derive(Clone)]
pub struct ElementRef {
    doc: Document,
    id: NodeId,
}

impl ElementRef {
    pub fn node_id(&self) -> NodeId {
        self.id
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Whether the element is still attached to its document.
    pub fn is_connected(&self) -> bool {
        self.doc.read().live(self.id).is_some()
    }

    pub fn tag(&self) -> Option<String> {
        self.doc.read().live(self.id).map(|node| node.tag.clone())
    }

    // -------------------------------------------------------------------------
    // Attributes
    // -------------------------------------------------------------------------

    pub fn attr(&self, name: &str) -> Option<String> {
        self.doc.read().attr(self.id, name).map(str::to_owned)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.doc.read().attr(self.id, name).is_some()
    }

    /// All attributes in insertion order.
    pub fn attrs(&self) -> Vec<(String, String)> {
        self.doc
            .read()
            .live(self.id)
            .map(|node| node.attrs.clone())
            .unwrap_or_default()
    }

    pub fn set_attr(&self, name: impl Into<String>, value: impl Into<String>) {
        self.doc.write().set_attr(self.id, name.into(), value.into());
    }

    pub fn remove_attr(&self, name: &str) {
        self.doc.write().remove_attr(self.id, name);
    }

    /// Apply a batch of attribute writes under one lock. `None` removes.
    pub fn set_attrs<I, N>(&self, attrs: I)
    where
        I: IntoIterator<Item = (N, Option<String>)>,
        N: Into<String>,
    {
        let mut inner = self.doc.write();
        for (name, value) in attrs {
            let name = name.into();
            match value {
                Some(value) => inner.set_attr(self.id, name, value),
                None => inner.remove_attr(self.id, &name),
            }
        }
    }

    /// The DOM `id` attribute.
    pub fn dom_id(&self) -> Option<String> {
        self.attr("id")
    }

    pub fn set_dom_id(&self, id: impl Into<String>) {
        self.set_attr("id", id);
    }

    // -------------------------------------------------------------------------
    // Tree
    // -------------------------------------------------------------------------

    pub fn parent(&self) -> Option<ElementRef> {
        let parent = self.doc.read().live(self.id)?.parent?;
        Some(self.doc.handle(parent))
    }

    pub fn children(&self) -> Vec<ElementRef> {
        let children = self
            .doc
            .read()
            .live(self.id)
            .map(|node| node.children.clone())
            .unwrap_or_default();
        children.into_iter().map(|id| self.doc.handle(id)).collect()
    }

    /// Mount `element` as the last child of this element. Appending to a
    /// removed element mounts nothing and returns a disconnected handle.
    pub fn append(&self, element: Element) -> ElementRef {
        let mut inner = self.doc.write();
        if inner.live(self.id).is_none() {
            debug!("append: parent {:?} is not connected", self.id);
            let id = inner.insert(None, element);
            inner.detach(id);
            return self.doc.handle(id);
        }
        let id = inner.insert(Some(self.id), element);
        drop(inner);
        self.doc.handle(id)
    }

    /// Detach this element and its subtree from the document.
    pub fn remove(&self) {
        self.doc.write().detach(self.id);
    }

    /// Descendants matching `selector`, in document order.
    pub fn query_all(&self, selector: &Selector) -> Vec<ElementRef> {
        let ids: Vec<NodeId> = {
            let inner = self.doc.read();
            inner
                .descendants(self.id)
                .into_iter()
                .filter(|id| selector.matches(&inner.nodes[id.0].attrs))
                .collect()
        };
        ids.into_iter().map(|id| self.doc.handle(id)).collect()
    }

    /// First descendant matching `selector`.
    pub fn query(&self, selector: &Selector) -> Option<ElementRef> {
        let id = {
            let inner = self.doc.read();
            inner
                .descendants(self.id)
                .into_iter()
                .find(|id| selector.matches(&inner.nodes[id.0].attrs))
        }?;
        Some(self.doc.handle(id))
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    /// Focus this element. No-op when disconnected.
    pub fn focus(&self) {
        let mut inner = self.doc.write();
        if inner.live(self.id).is_some() {
            inner.focused = Some(self.id);
        }
    }

    pub fn is_focused(&self) -> bool {
        self.doc.read().focused == Some(self.id)
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Register a listener. The returned [`Unbind`] removes it.
    pub fn on(
        &self,
        kind: EventKind,
        handler: impl Fn(&mut EventCx) + Send + Sync + 'static,
    ) -> Unbind {
        let handler: Handler = Arc::new(handler);
        let id = {
            let mut inner = self.doc.write();
            let id = ListenerId(inner.next_listener);
            inner.next_listener += 1;
            inner.listeners.push(Listener {
                id,
                node: self.id,
                kind,
                handler,
            });
            id
        };
        trace!("on: {} listener {:?} on {:?}", kind.name(), id, self.id);

        let doc = Arc::downgrade(&self.doc.inner);
        Unbind::new(move || {
            if let Some(inner) = doc.upgrade() {
                inner
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .listeners
                    .retain(|listener| listener.id != id);
            }
        })
    }

    /// Run this element's listeners for `event`, in registration order.
    /// Listeners run without the document locked; a listener unbound by an
    /// earlier one in the same dispatch is skipped.
    pub fn dispatch(&self, event: Event) -> Dispatch {
        let handlers: Vec<(ListenerId, Handler)> = self
            .doc
            .read()
            .listeners
            .iter()
            .filter(|l| l.node == self.id && l.kind == event.kind)
            .map(|l| (l.id, Arc::clone(&l.handler)))
            .collect();

        let mut cx = EventCx::new(self.clone(), event);
        let mut handled = 0;
        for (id, handler) in handlers {
            let still_bound = self.doc.read().listeners.iter().any(|l| l.id == id);
            if !still_bound {
                continue;
            }
            handler(&mut cx);
            handled += 1;
        }

        Dispatch {
            handled,
            default_prevented: cx.default_prevented(),
        }
    }

    /// Dispatch a click at this element.
    pub fn click(&self) -> Dispatch {
        self.dispatch(Event::click())
    }

    /// Dispatch a key press at this element.
    pub fn key_down(&self, key: Key) -> Dispatch {
        self.dispatch(Event::key_down(key))
    }
}

impl PartialEq for ElementRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && Arc::ptr_eq(&self.doc.inner, &other.doc.inner)
    }
}

impl Eq for ElementRef {}

impl fmt::Debug for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementRef").field("id", &self.id).finish()
    }
}
