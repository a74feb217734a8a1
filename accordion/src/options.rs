//! Widget-wide options.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AccordionError;

/// How many panels may be open at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum AccordionType {
    /// At most one panel open.
    #[default]
    Single,
    /// Any subset of panels open.
    Multiple,
}

impl AccordionType {
    pub fn as_str(self) -> &'static str {
        match self {
            AccordionType::Single => "single",
            AccordionType::Multiple => "multiple",
        }
    }
}

impl fmt::Display for AccordionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccordionType {
    type Err = AccordionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(AccordionType::Single),
            "multiple" => Ok(AccordionType::Multiple),
            other => Err(AccordionError::InvalidType(other.to_string())),
        }
    }
}

impl TryFrom<String> for AccordionType {
    type Error = AccordionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Options shared by every part of one accordion. Hosts may replace them at
/// any time through the options [`State`](crate::State).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Disable every trigger.
    pub disabled: bool,
    pub kind: AccordionType,
}

impl Options {
    pub fn new(kind: AccordionType, disabled: bool) -> Self {
        Self { disabled, kind }
    }
}
