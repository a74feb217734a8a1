//! Interaction and state engine for accessible accordion widgets.
//!
//! An [`Accordion`] owns the selection and options state for one instance
//! and hands out builders for its four parts (root, item, trigger,
//! content). Builders derive attribute objects from the state; a rendering
//! layer reflects them onto elements with [`apply_attributes`] and runs the
//! trigger and content actions once the elements are mounted.

pub mod attrs;
pub mod builders;
pub mod config;
pub mod derived;
pub mod error;
pub mod options;
pub mod parts;
pub mod predicate;
pub mod props;
pub mod selection;
pub mod state;
pub mod widget;

pub use attrs::{apply_attributes, AttrValue, Attributes};
pub use config::{AccordionConfig, InitialValue};
pub use derived::Derived;
pub use error::AccordionError;
pub use options::{AccordionType, Options};
pub use predicate::IsSelected;
pub use props::{parse_item_props, Item, ItemProps};
pub use selection::{is_selected, Selection, SelectionValue};
pub use state::{State, Subscription, Watch};
pub use widget::{create_accordion, Accordion};

pub use meltdom;

pub mod prelude {
    pub use crate::attrs::{apply_attributes, AttrValue, Attributes};
    pub use crate::builders::{
        ContentBuilder, ItemBuilder, Navigation, Root, TriggerBuilder,
    };
    pub use crate::config::{AccordionConfig, InitialValue};
    pub use crate::error::AccordionError;
    pub use crate::options::{AccordionType, Options};
    pub use crate::parts::Part;
    pub use crate::props::{Item, ItemProps};
    pub use crate::selection::SelectionValue;
    pub use crate::state::State;
    pub use crate::widget::{create_accordion, Accordion};
}
