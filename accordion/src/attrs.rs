//! Attribute objects returned by the builders and the rules for reflecting
//! them onto elements.
//!
//! Every builder reports each attribute it manages, including ones that are
//! currently absent. An absent attribute is stored as `None` so the
//! rendering layer knows to remove it rather than leave a stale value.

use meltdom::ElementRef;

/// HTML boolean attributes: present as `""` when true, removed when false.
pub const BOOLEAN_ATTRIBUTES: &[&str] = &["disabled", "hidden"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Bool(bool),
    Text(String),
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

/// Ordered attribute map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attributes {
    entries: Vec<(&'static str, Option<AttrValue>)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a present attribute.
    pub fn set(self, name: &'static str, value: impl Into<AttrValue>) -> Self {
        self.set_opt(name, Some(value.into()))
    }

    /// Set an attribute that may be absent.
    pub fn set_opt(mut self, name: &'static str, value: Option<AttrValue>) -> Self {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// Present value of `name`. `None` when absent or unmanaged.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, v)| v.as_ref())
    }

    pub fn is_present(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Whether this object manages `name` at all (present or absent).
    pub fn manages(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| *n == name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            AttrValue::Text(text) => Some(text),
            AttrValue::Bool(_) => None,
        }
    }

    pub fn flag(&self, name: &str) -> Option<bool> {
        match self.get(name)? {
            AttrValue::Bool(flag) => Some(*flag),
            AttrValue::Text(_) => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&AttrValue>)> + '_ {
        self.entries.iter().map(|(n, v)| (*n, v.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The DOM string each attribute renders to; `None` means remove.
    pub fn reflect(&self) -> Vec<(&'static str, Option<String>)> {
        self.entries
            .iter()
            .map(|(name, value)| (*name, value.as_ref().and_then(|v| reflect_value(name, v))))
            .collect()
    }
}

/// Render one attribute value for the DOM.
pub fn reflect_value(name: &str, value: &AttrValue) -> Option<String> {
    match value {
        AttrValue::Bool(flag) if BOOLEAN_ATTRIBUTES.contains(&name) => {
            flag.then(String::new)
        }
        AttrValue::Bool(flag) => Some(flag.to_string()),
        AttrValue::Text(text) => Some(text.clone()),
    }
}

/// Reflect `attrs` onto `el` in a single write.
pub fn apply_attributes(el: &ElementRef, attrs: &Attributes) {
    el.set_attrs(attrs.reflect());
}
