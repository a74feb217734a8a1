//! Construction options.

use std::fmt;
use std::sync::Arc;

use meltdom::IdGenerator;
use serde::{Deserialize, Serialize};

use crate::error::AccordionError;
use crate::options::AccordionType;
use crate::selection::SelectionValue;

/// Initial selection as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InitialValue {
    One(String),
    Many(Vec<String>),
}

impl InitialValue {
    fn describe(&self) -> String {
        match self {
            InitialValue::One(value) => format!("{value:?}"),
            InitialValue::Many(values) => format!("{values:?}"),
        }
    }
}

impl From<&str> for InitialValue {
    fn from(value: &str) -> Self {
        InitialValue::One(value.to_string())
    }
}

impl From<String> for InitialValue {
    fn from(value: String) -> Self {
        InitialValue::One(value)
    }
}

impl From<Vec<String>> for InitialValue {
    fn from(values: Vec<String>) -> Self {
        InitialValue::Many(values)
    }
}

impl From<Vec<&str>> for InitialValue {
    fn from(values: Vec<&str>) -> Self {
        InitialValue::Many(values.into_iter().map(str::to_string).collect())
    }
}

/// Accordion configuration.
///
/// Deserializes from `{"type": "single" | "multiple", "value": ..., "disabled": bool}`;
/// every field is optional.
///
/// # Example
///
/// ```
/// use accordion::{Accordion, AccordionConfig};
///
/// let accordion = Accordion::with_config(
///     AccordionConfig::new().multiple().value(vec!["billing", "shipping"]),
/// )
/// .unwrap();
/// assert!(accordion.is_selected().get().check("billing"));
/// ```
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccordionConfig {
    #[serde(rename = "type")]
    pub kind: AccordionType,

    /// Initial selection; must be a string for `single` and a list for
    /// `multiple`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<InitialValue>,

    pub disabled: bool,

    /// Identifier source for the instance id and content linking.
    /// Defaults to [`RandomIds`](meltdom::RandomIds).
    #[serde(skip)]
    pub id_generator: Option<Arc<dyn IdGenerator>>,
}

impl AccordionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(self) -> Self {
        self.kind(AccordionType::Single)
    }

    pub fn multiple(self) -> Self {
        self.kind(AccordionType::Multiple)
    }

    pub fn kind(mut self, kind: AccordionType) -> Self {
        self.kind = kind;
        self
    }

    pub fn value(mut self, value: impl Into<InitialValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.id_generator = Some(ids);
        self
    }

    /// Resolve the initial selection. Repeated entries in a multiple-mode
    /// list are dropped, keeping the first occurrence.
    pub fn initial_selection(&self) -> Result<SelectionValue, AccordionError> {
        match (self.kind, &self.value) {
            (kind, None) => Ok(SelectionValue::empty(kind)),
            (AccordionType::Single, Some(InitialValue::One(value))) => {
                Ok(SelectionValue::Single(Some(value.clone())))
            }
            (AccordionType::Multiple, Some(InitialValue::Many(values))) => {
                let mut unique: Vec<String> = Vec::with_capacity(values.len());
                for value in values {
                    if !unique.contains(value) {
                        unique.push(value.clone());
                    }
                }
                Ok(SelectionValue::Multiple(Some(unique)))
            }
            (kind, Some(value)) => Err(AccordionError::ValueShapeMismatch {
                kind,
                value: value.describe(),
            }),
        }
    }
}

impl fmt::Debug for AccordionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccordionConfig")
            .field("kind", &self.kind)
            .field("value", &self.value)
            .field("disabled", &self.disabled)
            .field("custom_ids", &self.id_generator.is_some())
            .finish()
    }
}
