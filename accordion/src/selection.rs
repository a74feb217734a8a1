//! Selection value and the toggle logic that mutates it.

use log::trace;

use crate::options::{AccordionType, Options};
use crate::state::State;

/// The open panel(s).
///
/// The variant always matches the accordion type: single mode never holds a
/// list and multiple mode never holds a bare value. `None` means nothing
/// has been opened yet; a multiple-mode list can also be empty after its
/// last entry was closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionValue {
    Single(Option<String>),
    Multiple(Option<Vec<String>>),
}

impl Default for SelectionValue {
    fn default() -> Self {
        SelectionValue::Single(None)
    }
}

impl SelectionValue {
    /// Nothing open, shaped for `kind`.
    pub fn empty(kind: AccordionType) -> Self {
        match kind {
            AccordionType::Single => SelectionValue::Single(None),
            AccordionType::Multiple => SelectionValue::Multiple(None),
        }
    }

    pub fn kind(&self) -> AccordionType {
        match self {
            SelectionValue::Single(_) => AccordionType::Single,
            SelectionValue::Multiple(_) => AccordionType::Multiple,
        }
    }

    /// Whether `key` is open: equality in single mode, membership in
    /// multiple mode.
    pub fn is_selected(&self, key: &str) -> bool {
        match self {
            SelectionValue::Single(value) => value.as_deref() == Some(key),
            SelectionValue::Multiple(values) => values
                .as_ref()
                .is_some_and(|values| values.iter().any(|v| v == key)),
        }
    }

    /// Open values in selection order.
    pub fn selected(&self) -> Vec<&str> {
        match self {
            SelectionValue::Single(value) => value.as_deref().into_iter().collect(),
            SelectionValue::Multiple(values) => values
                .iter()
                .flatten()
                .map(String::as_str)
                .collect(),
        }
    }

    /// Reshape for `kind`. A single value becomes a one-element list; a
    /// list collapses to its first entry.
    pub fn conform(&mut self, kind: AccordionType) {
        let current = std::mem::take(self);
        *self = match (current, kind) {
            (SelectionValue::Single(value), AccordionType::Multiple) => {
                SelectionValue::Multiple(value.map(|v| vec![v]))
            }
            (SelectionValue::Multiple(values), AccordionType::Single) => {
                SelectionValue::Single(values.and_then(|values| values.into_iter().next()))
            }
            (same, _) => same,
        };
    }

    /// Open `item` if closed, close it if open. In single mode opening one
    /// item closes any other.
    pub fn toggle(&mut self, kind: AccordionType, item: &str) {
        self.conform(kind);
        match self {
            SelectionValue::Single(value) => {
                *value = if value.as_deref() == Some(item) {
                    None
                } else {
                    Some(item.to_string())
                };
            }
            SelectionValue::Multiple(values) => match values {
                None => *values = Some(vec![item.to_string()]),
                Some(list) if list.iter().any(|v| v == item) => list.retain(|v| v != item),
                Some(list) => list.push(item.to_string()),
            },
        }
    }
}

/// Whether `key` is open in `value`.
pub fn is_selected(key: &str, value: &SelectionValue) -> bool {
    value.is_selected(key)
}

/// The selection state together with the options that govern toggling.
#[derive(Debug, Clone)]
pub struct Selection {
    value: State<SelectionValue>,
    options: State<Options>,
}

impl Selection {
    pub fn new(value: State<SelectionValue>, options: State<Options>) -> Self {
        Self { value, options }
    }

    /// Current selection.
    pub fn read(&self) -> SelectionValue {
        self.value.get()
    }

    /// Toggle `item`. Does nothing when `disabled` is set, when the
    /// accordion is disabled, or when `item` is absent or empty. Returns
    /// whether the selection changed.
    pub fn toggle(&self, item: Option<&str>, disabled: bool) -> bool {
        let Some(item) = item.filter(|item| !item.is_empty()) else {
            trace!("toggle: no item value, ignoring");
            return false;
        };
        let options = self.options.get();
        if disabled || options.disabled {
            trace!("toggle: '{}' is disabled, ignoring", item);
            return false;
        }

        self.value.update(|value| value.toggle(options.kind, item));
        trace!("toggle: '{}' -> {:?}", item, self.value.get());
        true
    }

    pub fn value(&self) -> &State<SelectionValue> {
        &self.value
    }

    pub fn options(&self) -> &State<Options> {
        &self.options
    }
}
