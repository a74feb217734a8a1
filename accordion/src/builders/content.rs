//! Content part: the collapsible panel, plus the deferred step that links it
//! to its trigger for assistive technology.

use std::fmt;
use std::sync::Arc;

use log::{debug, trace};
use meltdom::{ElementRef, IdGenerator, Tick};

use crate::attrs::{AttrValue, Attributes};
use crate::builders::data_state;
use crate::derived::Derived;
use crate::options::Options;
use crate::parts::Part;
use crate::props::{parse_item_props, ItemProps};
use crate::selection::{Selection, SelectionValue};
use crate::state::Subscription;

/// Content attributes for one selection/options snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentView {
    selection: SelectionValue,
    options: Options,
}

impl ContentView {
    pub fn attrs(&self, props: impl Into<ItemProps>) -> Attributes {
        let item = parse_item_props(props);
        let open = self.selection.is_selected(&item.value);
        Attributes::new()
            .set(Part::Content.marker(), "")
            .set("data-state", data_state(open))
            .set_opt("data-disabled", self.options.disabled.then_some(AttrValue::Bool(true)))
            .set("data-value", item.value)
            .set_opt("hidden", (!open).then_some(AttrValue::Bool(true)))
    }
}

#[derive(Clone)]
pub struct ContentBuilder {
    view: Derived<ContentView>,
    root_id: String,
    ids: Arc<dyn IdGenerator>,
}

impl ContentBuilder {
    pub(crate) fn new(selection: &Selection, root_id: &str, ids: Arc<dyn IdGenerator>) -> Self {
        let view = Derived::map2(selection.value(), selection.options(), |selection, options| {
            ContentView {
                selection: selection.clone(),
                options: *options,
            }
        });
        Self {
            view,
            root_id: root_id.to_string(),
            ids,
        }
    }

    /// Attributes for `props` under the current selection and options.
    pub fn attrs(&self, props: impl Into<ItemProps>) -> Attributes {
        self.view.get().attrs(props)
    }

    pub fn view(&self) -> &Derived<ContentView> {
        &self.view
    }

    /// Called with a fresh view whenever the selection or options change.
    pub fn subscribe(&self, f: impl Fn(&ContentView) + Send + Sync + 'static) -> Subscription {
        self.view.subscribe(f)
    }

    /// Schedule linking of a mounted content element to its trigger.
    ///
    /// Linking runs at the document's next flush, once the surrounding
    /// render pass has settled and the trigger is guaranteed to be in place.
    /// Each run generates fresh ids, so call this once per mount.
    pub fn action(&self, node: &ElementRef) -> Tick {
        let content = node.clone();
        let root_id = self.root_id.clone();
        let ids = Arc::clone(&self.ids);
        node.document().tick(move || {
            link(&content, &root_id, ids.as_ref());
        })
    }
}

impl fmt::Debug for ContentBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentBuilder")
            .field("view", &self.view)
            .field("root_id", &self.root_id)
            .finish_non_exhaustive()
    }
}

/// Result of a successful [`link`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub content_id: String,
    pub trigger_id: String,
    pub trigger: ElementRef,
}

/// Cross-reference `content` with the trigger of the same item.
///
/// The trigger is the first one under the instance root whose `data-value`
/// matches the content's. Sets the content's `id` and `aria-labelledby`,
/// and the trigger's `id` and `aria-controls`. Returns `None`, leaving both
/// elements untouched, when the root or a matching trigger can't be found.
pub fn link(content: &ElementRef, root_id: &str, ids: &dyn IdGenerator) -> Option<Link> {
    let content_id = ids.generate();
    let trigger_id = ids.generate();

    let Some(value) = content.attr("data-value") else {
        debug!("link: content {:?} has no data-value", content.node_id());
        return None;
    };
    let Some(root) = content.document().element_by_melt_id(root_id) else {
        debug!("link: root '{}' is not mounted", root_id);
        return None;
    };
    let Some(trigger) = root.query(&Part::Trigger.selector().with("data-value", value.as_str()))
    else {
        debug!("link: no trigger for '{}' under '{}'", value, root_id);
        return None;
    };

    if let Some(previous) = content.dom_id() {
        debug!("link: content '{}' relinked, replacing id '{}'", value, previous);
    }

    content.set_dom_id(content_id.as_str());
    content.set_attr("aria-labelledby", trigger_id.as_str());
    trigger.set_attr("aria-controls", content_id.as_str());
    trigger.set_dom_id(trigger_id.as_str());
    trace!("link: '{}' content={} trigger={}", value, content_id, trigger_id);

    Some(Link {
        content_id,
        trigger_id,
        trigger,
    })
}
