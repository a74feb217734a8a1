//! The selected-predicate view.

use crate::derived::Derived;
use crate::selection::SelectionValue;
use crate::state::State;

/// Snapshot of the selection answering "is this key open?".
///
/// Obtained from [`Accordion::is_selected`](crate::Accordion::is_selected);
/// a new snapshot is derived after every selection change. Use it to render,
/// not to drive logic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IsSelected {
    value: SelectionValue,
}

impl IsSelected {
    pub fn new(value: SelectionValue) -> Self {
        Self { value }
    }

    pub fn check(&self, key: &str) -> bool {
        self.value.is_selected(key)
    }
}

pub(crate) fn selected_predicate(value: &State<SelectionValue>) -> Derived<IsSelected> {
    Derived::map(value, |value| IsSelected::new(value.clone()))
}
