//! Click activation and keyboard navigation for triggers.

use log::{debug, trace};
use meltdom::{ElementRef, EventCx, EventKind, Unbind};

use super::{Navigation, TriggerBuilder};
use crate::parts::Part;
use crate::selection::Selection;

impl TriggerBuilder {
    /// Bind activation and keyboard navigation to a mounted trigger.
    ///
    /// Call once per element. The returned [`Unbind`] releases both
    /// listeners and may be called any number of times.
    pub fn action(&self, node: &ElementRef) -> Unbind {
        let selection = self.selection.clone();
        let click = node.on(EventKind::Click, move |cx| activate(cx.target(), &selection));

        let root_id = self.root_id.clone();
        let keydown = node.on(EventKind::KeyDown, move |cx| navigate(cx, &root_id));

        Unbind::combine([click, keydown])
    }
}

/// Whether the element currently renders as disabled. Read live so changes
/// made after binding are honored.
fn is_disabled(el: &ElementRef) -> bool {
    el.attr("data-disabled").as_deref() == Some("true") || el.has_attr("disabled")
}

fn activate(node: &ElementRef, selection: &Selection) {
    let disabled = is_disabled(node);
    let value = node.attr("data-value");
    if !selection.toggle(value.as_deref(), disabled) {
        debug!(
            "trigger {:?}: activation ignored (disabled={}, value={:?})",
            node.node_id(),
            disabled,
            value
        );
    }
}

fn navigate(cx: &mut EventCx, root_id: &str) {
    let Some(navigation) = cx.key().and_then(Navigation::from_key) else {
        return;
    };
    cx.prevent_default();

    let target = cx.target().clone();
    let Some(root) = target.document().element_by_melt_id(root_id) else {
        debug!("navigate: root '{}' is not mounted", root_id);
        return;
    };

    let candidates: Vec<ElementRef> = root
        .query_all(&Part::Trigger.selector())
        .into_iter()
        .filter(|trigger| trigger.attr("data-disabled").as_deref() != Some("true"))
        .collect();

    let current = candidates.iter().position(|candidate| *candidate == target);
    let Some(next) = navigation.target(current, candidates.len()) else {
        debug!("navigate: no enabled triggers under '{}'", root_id);
        return;
    };

    trace!(
        "navigate: {:?} from {:?} to candidate {} of {}",
        navigation,
        current,
        next,
        candidates.len()
    );
    candidates[next].focus();
}
