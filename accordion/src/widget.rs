//! The accordion handle.

use std::sync::Arc;

use log::debug;
use meltdom::{IdGenerator, RandomIds};

use crate::builders::{ContentBuilder, ItemBuilder, Root, TriggerBuilder};
use crate::config::AccordionConfig;
use crate::derived::Derived;
use crate::error::AccordionError;
use crate::options::{AccordionType, Options};
use crate::predicate::{selected_predicate, IsSelected};
use crate::selection::{Selection, SelectionValue};
use crate::state::State;

/// One accordion instance.
///
/// Holds the shared options and selection state and the builders for each
/// part. Builders are cheap to clone and keep deriving from this instance's
/// state.
///
/// # Example
///
/// ```
/// use accordion::Accordion;
///
/// let accordion = Accordion::new();
/// let trigger = accordion.trigger().attrs("faq-1");
/// assert_eq!(trigger.text("data-value"), Some("faq-1"));
///
/// accordion.toggle("faq-1");
/// assert!(accordion.is_selected().get().check("faq-1"));
/// ```
#[derive(Debug, Clone)]
pub struct Accordion {
    root: Root,
    options: State<Options>,
    selection: Selection,
    is_selected: Derived<IsSelected>,
    item: ItemBuilder,
    trigger: TriggerBuilder,
    content: ContentBuilder,
}

impl Accordion {
    /// A single-mode accordion with nothing open.
    pub fn new() -> Self {
        Self::assemble(
            Options::default(),
            SelectionValue::empty(AccordionType::Single),
            Arc::new(RandomIds),
        )
    }

    pub fn with_config(config: AccordionConfig) -> Result<Self, AccordionError> {
        let initial = config.initial_selection()?;
        let ids = config
            .id_generator
            .clone()
            .unwrap_or_else(|| Arc::new(RandomIds));
        Ok(Self::assemble(
            Options::new(config.kind, config.disabled),
            initial,
            ids,
        ))
    }

    fn assemble(options: Options, initial: SelectionValue, ids: Arc<dyn IdGenerator>) -> Self {
        let root = Root::new(ids.generate());
        let options = State::new(options);
        let value = State::new(initial);
        let selection = Selection::new(value.clone(), options.clone());

        debug!(
            "accordion '{}' created: {:?}, initial {:?}",
            root.id(),
            options.get(),
            value.get()
        );

        Self {
            is_selected: selected_predicate(&value),
            item: ItemBuilder::new(&value),
            trigger: TriggerBuilder::new(&selection, root.id()),
            content: ContentBuilder::new(&selection, root.id(), ids),
            root,
            options,
            selection,
        }
    }

    pub fn root(&self) -> &Root {
        &self.root
    }

    /// The selection state. Writable by the host; triggers write it through
    /// [`Selection::toggle`].
    pub fn value(&self) -> &State<SelectionValue> {
        self.selection.value()
    }

    /// The options state. Hosts may replace it at any time.
    pub fn options(&self) -> &State<Options> {
        &self.options
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Derived "is this key open?" view.
    pub fn is_selected(&self) -> &Derived<IsSelected> {
        &self.is_selected
    }

    pub fn item(&self) -> &ItemBuilder {
        &self.item
    }

    pub fn trigger(&self) -> &TriggerBuilder {
        &self.trigger
    }

    pub fn content(&self) -> &ContentBuilder {
        &self.content
    }

    /// Toggle an enabled item programmatically, as a click on its trigger
    /// would. Returns whether the selection changed.
    pub fn toggle(&self, value: &str) -> bool {
        self.selection.toggle(Some(value), false)
    }
}

impl Default for Accordion {
    fn default() -> Self {
        Self::new()
    }
}

/// Build an accordion from optional configuration.
pub fn create_accordion(config: Option<AccordionConfig>) -> Result<Accordion, AccordionError> {
    Accordion::with_config(config.unwrap_or_default())
}
