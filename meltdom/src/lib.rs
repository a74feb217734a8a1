pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod ids;
pub mod listener;
pub mod selector;
pub mod tick;

pub use document::{Document, ElementRef, NodeId, MELT_ID};
pub use element::Element;
pub use error::DomError;
pub use event::{Dispatch, Event, EventCx, EventKind, Key};
pub use ids::{generate_id, IdGenerator, RandomIds, SequentialIds};
pub use listener::Unbind;
pub use selector::Selector;
pub use tick::Tick;
