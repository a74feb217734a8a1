use crate::attrs::{AttrValue, Attributes};
use crate::builders::data_state;
use crate::derived::Derived;
use crate::parts::Part;
use crate::props::{parse_item_props, ItemProps};
use crate::selection::SelectionValue;
use crate::state::{State, Subscription};

/// Item attributes for one selection snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    selection: SelectionValue,
}

impl ItemView {
    pub fn attrs(&self, props: impl Into<ItemProps>) -> Attributes {
        let item = parse_item_props(props);
        Attributes::new()
            .set(Part::Item.marker(), "")
            .set("data-state", data_state(self.selection.is_selected(&item.value)))
            .set_opt("data-disabled", item.disabled.then_some(AttrValue::Bool(true)))
    }
}

/// Wrapper element of one item.
#[derive(Debug, Clone)]
pub struct ItemBuilder {
    view: Derived<ItemView>,
}

impl ItemBuilder {
    pub(crate) fn new(value: &State<SelectionValue>) -> Self {
        Self {
            view: Derived::map(value, |selection| ItemView {
                selection: selection.clone(),
            }),
        }
    }

    /// Attributes for `props` under the current selection.
    pub fn attrs(&self, props: impl Into<ItemProps>) -> Attributes {
        self.view.get().attrs(props)
    }

    pub fn view(&self) -> &Derived<ItemView> {
        &self.view
    }

    /// Called with a fresh view whenever the selection changes.
    pub fn subscribe(&self, f: impl Fn(&ItemView) + Send + Sync + 'static) -> Subscription {
        self.view.subscribe(f)
    }
}
