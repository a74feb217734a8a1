//! Per-item input.
//!
//! Callers identify an item either by its bare value or by a record that can
//! also disable it. Every builder funnels its input through
//! [`ItemProps::parse`] and only ever looks at the resulting [`Item`].

use serde::{Deserialize, Serialize};

/// Item identity as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemProps {
    /// Shorthand: just the value, never disabled.
    Value(String),
    Record {
        value: String,
        #[serde(default)]
        disabled: bool,
    },
}

/// Normalized item identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    pub value: String,
    pub disabled: bool,
}

impl ItemProps {
    pub fn record(value: impl Into<String>, disabled: bool) -> Self {
        ItemProps::Record {
            value: value.into(),
            disabled,
        }
    }

    /// Normalize into an [`Item`].
    pub fn parse(&self) -> Item {
        match self {
            ItemProps::Value(value) => Item {
                value: value.clone(),
                disabled: false,
            },
            ItemProps::Record { value, disabled } => Item {
                value: value.clone(),
                disabled: *disabled,
            },
        }
    }
}

impl From<&str> for ItemProps {
    fn from(value: &str) -> Self {
        ItemProps::Value(value.to_string())
    }
}

impl From<String> for ItemProps {
    fn from(value: String) -> Self {
        ItemProps::Value(value)
    }
}

impl From<&ItemProps> for ItemProps {
    fn from(props: &ItemProps) -> Self {
        props.clone()
    }
}

impl From<Item> for ItemProps {
    fn from(item: Item) -> Self {
        ItemProps::Record {
            value: item.value,
            disabled: item.disabled,
        }
    }
}

/// Normalize any accepted item input.
pub fn parse_item_props(props: impl Into<ItemProps>) -> Item {
    props.into().parse()
}
