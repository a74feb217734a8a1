use thiserror::Error;

use crate::options::AccordionType;

/// Errors raised while building an accordion from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccordionError {
    /// The `type` option was neither `single` nor `multiple`.
    #[error("invalid accordion type '{0}', expected 'single' or 'multiple'")]
    InvalidType(String),

    /// The initial value doesn't have the shape the type requires.
    #[error("initial value {value} does not fit a '{kind}' accordion")]
    ValueShapeMismatch {
        /// The configured accordion type.
        kind: AccordionType,
        /// Debug rendering of the offending value.
        value: String,
    },
}
