//! Identifier generation.
//!
//! Widgets need process-unique strings for instance scoping and for ARIA
//! cross-references. [`RandomIds`] is the default; [`SequentialIds`] gives
//! predictable output for hosts that snapshot markup.

use std::sync::atomic::{AtomicUsize, Ordering};

use uuid::Uuid;

/// Source of unique string identifiers.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random identifiers backed by UUID v4.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn generate(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// `prefix-0`, `prefix-1`, ... from an atomic counter.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicUsize,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicUsize::new(0),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        format!("{}-{}", self.prefix, n)
    }
}

/// Generate an identifier with the default generator.
pub fn generate_id() -> String {
    RandomIds.generate()
}
