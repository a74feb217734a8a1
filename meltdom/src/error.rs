use thiserror::Error;

/// Errors surfaced by the document layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// A `KeyboardEvent.key` name that doesn't map to a [`Key`](crate::Key).
    #[error("unknown key name '{0}'")]
    UnknownKey(String),
}
