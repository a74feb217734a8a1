//! Computed cells.
//!
//! A [`Derived`] recomputes lazily from its sources' current values when
//! read, and eagerly when a source changes while it has subscribers, so
//! subscribers observe the new value within the same call that wrote the
//! source.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::state::{Callback, State, Subscribers, Subscription, Watch};

type Compute<T> = Box<dyn Fn() -> T + Send + Sync>;

struct DerivedInner<T> {
    compute: Compute<T>,
    cache: RwLock<Option<T>>,
    subscribers: Arc<Subscribers<T>>,
    sources: Mutex<Vec<Subscription>>,
}

impl<T> DerivedInner<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn get(&self) -> T {
        if let Some(value) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return value.clone();
        }
        let value = (self.compute)();
        *self.cache.write().unwrap_or_else(PoisonError::into_inner) = Some(value.clone());
        value
    }

    fn invalidate(&self) {
        *self.cache.write().unwrap_or_else(PoisonError::into_inner) = None;
        if self.subscribers.is_empty() {
            return;
        }
        let value = self.get();
        self.subscribers.notify(&value);
    }
}

/// A read-only value computed from other cells.
///
/// Clones share the cache and subscriber list. Source subscriptions are
/// released when the last clone is dropped.
pub struct Derived<T> {
    inner: Arc<DerivedInner<T>>,
}

impl<T> Derived<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Derive from arbitrary sources. `compute` must read the sources it
    /// depends on; every source listed in `sources` triggers a recompute.
    pub fn new(sources: &[&dyn Watch], compute: impl Fn() -> T + Send + Sync + 'static) -> Self {
        let inner = Arc::new(DerivedInner {
            compute: Box::new(compute),
            cache: RwLock::new(None),
            subscribers: Arc::new(Subscribers::default()),
            sources: Mutex::new(Vec::new()),
        });

        let watches: Vec<Subscription> = sources
            .iter()
            .map(|source| {
                let weak = Arc::downgrade(&inner);
                source.watch(Arc::new(move || {
                    if let Some(inner) = weak.upgrade() {
                        inner.invalidate();
                    }
                }))
            })
            .collect();
        *inner.sources.lock().unwrap_or_else(PoisonError::into_inner) = watches;

        Self { inner }
    }

    /// Derive from one state.
    pub fn map<S>(source: &State<S>, f: impl Fn(&S) -> T + Send + Sync + 'static) -> Self
    where
        S: Clone + Send + Sync + 'static,
    {
        let state = source.clone();
        let sources: [&dyn Watch; 1] = [source];
        Self::new(&sources, move || state.with(|value| f(value)))
    }

    /// Derive from two states.
    pub fn map2<A, B>(
        a: &State<A>,
        b: &State<B>,
        f: impl Fn(&A, &B) -> T + Send + Sync + 'static,
    ) -> Self
    where
        A: Clone + Send + Sync + 'static,
        B: Clone + Send + Sync + 'static,
    {
        let (sa, sb) = (a.clone(), b.clone());
        let sources: [&dyn Watch; 2] = [a, b];
        Self::new(&sources, move || sa.with(|va| sb.with(|vb| f(va, vb))))
    }

    /// Current value, recomputed if a source changed since the last read.
    pub fn get(&self) -> T {
        self.inner.get()
    }

    /// Subscribe to changes. `f` runs immediately with the current value.
    pub fn subscribe(&self, f: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let f: Callback<T> = Arc::new(f);
        f(&self.get());
        self.inner.subscribers.add(f)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.len()
    }
}

impl<T> Watch for Derived<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn watch(&self, f: Arc<dyn Fn() + Send + Sync>) -> Subscription {
        self.inner.subscribers.add(Arc::new(move |_: &T| f()))
    }
}

impl<T> Clone for Derived<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Derived<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Derived");
        match self.inner.cache.read() {
            Ok(cache) => s.field("cached", &*cache),
            Err(_) => s.field("cached", &"<poisoned>"),
        };
        s.finish_non_exhaustive()
    }
}
