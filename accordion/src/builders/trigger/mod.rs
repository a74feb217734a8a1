//! Trigger part: the button that opens and closes an item.

mod events;
mod navigation;

pub use navigation::Navigation;

use crate::attrs::{AttrValue, Attributes};
use crate::derived::Derived;
use crate::options::Options;
use crate::parts::Part;
use crate::props::{parse_item_props, ItemProps};
use crate::selection::{Selection, SelectionValue};
use crate::state::Subscription;

/// Trigger attributes for one selection/options snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerView {
    selection: SelectionValue,
    options: Options,
}

impl TriggerView {
    pub fn attrs(&self, props: impl Into<ItemProps>) -> Attributes {
        let item = parse_item_props(props);
        Attributes::new()
            .set(Part::Trigger.marker(), "")
            .set("disabled", self.options.disabled || item.disabled)
            .set("aria-expanded", self.selection.is_selected(&item.value))
            .set("aria-disabled", item.disabled)
            .set_opt("data-disabled", item.disabled.then_some(AttrValue::Bool(true)))
            .set("data-value", item.value)
    }
}

/// Trigger builder.
///
/// `attrs` derives the per-item attributes; `action` wires click activation
/// and arrow/Home/End navigation onto a mounted trigger element.
#[derive(Debug, Clone)]
pub struct TriggerBuilder {
    view: Derived<TriggerView>,
    selection: Selection,
    root_id: String,
}

impl TriggerBuilder {
    pub(crate) fn new(selection: &Selection, root_id: &str) -> Self {
        let view = Derived::map2(selection.value(), selection.options(), |selection, options| {
            TriggerView {
                selection: selection.clone(),
                options: *options,
            }
        });
        Self {
            view,
            selection: selection.clone(),
            root_id: root_id.to_string(),
        }
    }

    /// Attributes for `props` under the current selection and options.
    pub fn attrs(&self, props: impl Into<ItemProps>) -> Attributes {
        self.view.get().attrs(props)
    }

    pub fn view(&self) -> &Derived<TriggerView> {
        &self.view
    }

    /// Called with a fresh view whenever the selection or options change.
    pub fn subscribe(&self, f: impl Fn(&TriggerView) + Send + Sync + 'static) -> Subscription {
        self.view.subscribe(f)
    }
}
