use meltdom::MELT_ID;

use crate::attrs::Attributes;
use crate::parts::Part;

/// The root container. Carries the instance identifier that scopes every
/// DOM lookup to this accordion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Root {
    id: String,
}

impl Root {
    pub(crate) fn new(id: String) -> Self {
        Self { id }
    }

    /// The instance identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn attrs(&self) -> Attributes {
        Attributes::new()
            .set(Part::Root.marker(), "")
            .set(MELT_ID, self.id.as_str())
    }
}
