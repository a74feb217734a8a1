//! Part builders.
//!
//! Each builder derives an attribute object per item from the shared state,
//! and the interactive parts also expose an `action` to run once their
//! element is mounted.

pub mod content;
pub mod item;
pub mod root;
pub mod trigger;

pub use content::{link, ContentBuilder, ContentView, Link};
pub use item::{ItemBuilder, ItemView};
pub use root::Root;
pub use trigger::{Navigation, TriggerBuilder, TriggerView};

/// `data-state` value for an item.
pub(crate) fn data_state(open: bool) -> &'static str {
    if open { "open" } else { "closed" }
}
