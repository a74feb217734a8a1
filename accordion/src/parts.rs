//! Part names and the marker attributes that make parts queryable.

use meltdom::Selector;

/// The four parts of an accordion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Root,
    Item,
    Trigger,
    Content,
}

impl Part {
    /// `accordion`, `accordion-item`, `accordion-trigger`, `accordion-content`.
    pub fn name(self) -> &'static str {
        match self {
            Part::Root => "accordion",
            Part::Item => "accordion-item",
            Part::Trigger => "accordion-trigger",
            Part::Content => "accordion-content",
        }
    }

    /// The empty-valued marker attribute every element of this part carries.
    pub fn marker(self) -> &'static str {
        match self {
            Part::Root => "data-melt-accordion",
            Part::Item => "data-melt-accordion-item",
            Part::Trigger => "data-melt-accordion-trigger",
            Part::Content => "data-melt-accordion-content",
        }
    }

    pub fn selector(self) -> Selector {
        Selector::has(self.marker())
    }
}
