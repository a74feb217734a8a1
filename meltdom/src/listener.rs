//! Listener handles.
//!
//! Binding a listener yields an [`Unbind`]. Several bindings compose into a
//! single `Unbind` so a widget action can hand back one teardown call.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use crate::event::{EventCx, EventKind};
use crate::document::NodeId;

/// Listener callback.
pub type Handler = Arc<dyn Fn(&mut EventCx) + Send + Sync>;

/// Identifier of a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

pub(crate) struct Listener {
    pub id: ListenerId,
    pub node: NodeId,
    pub kind: EventKind,
    pub handler: Handler,
}

type Release = Box<dyn FnOnce() + Send>;

/// Releases one or more bindings.
///
/// Calling [`Unbind::call`] runs every release exactly once; subsequent
/// calls do nothing. Clones share the same releases. Dropping an `Unbind`
/// does not release anything.
#[derive(Clone, Default)]
pub struct Unbind {
    releases: Arc<Mutex<Vec<Release>>>,
}

impl Unbind {
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            releases: Arc::new(Mutex::new(vec![Box::new(release)])),
        }
    }

    /// An `Unbind` with nothing to release.
    pub fn noop() -> Self {
        Self::default()
    }

    /// Compose several bindings into one. The pending releases move into
    /// the result, leaving the parts empty.
    pub fn combine(parts: impl IntoIterator<Item = Unbind>) -> Self {
        let mut releases: Vec<Release> = Vec::new();
        for part in parts {
            releases.extend(part.take());
        }
        Self {
            releases: Arc::new(Mutex::new(releases)),
        }
    }

    /// Release everything still pending.
    pub fn call(&self) {
        for release in self.take() {
            release();
        }
    }

    /// Number of releases that have not run yet.
    pub fn pending(&self) -> usize {
        self.releases
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn take(&self) -> Vec<Release> {
        std::mem::take(
            &mut *self
                .releases
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }
}

impl fmt::Debug for Unbind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unbind")
            .field("pending", &self.pending())
            .finish()
    }
}
