use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock, Weak};

/// Callback invoked with the new value after every write.
pub type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Type-erased change notification, used to wire [`Derived`](crate::Derived)
/// cells to their sources.
pub trait Watch: Send + Sync {
    /// Call `f` after every change. Unlike `subscribe`, `f` is not called
    /// for the current value.
    fn watch(&self, f: Arc<dyn Fn() + Send + Sync>) -> Subscription;
}

/// Reactive state wrapper with interior mutability.
///
/// `State<T>` is cheap to clone; clones share the same value. Writes notify
/// subscribers synchronously, after the write lock has been released, so a
/// subscriber may read (or write) the state it is subscribed to.
///
/// # Example
///
/// ```
/// use accordion::State;
///
/// let count = State::new(1);
/// let _sub = count.subscribe(|v| println!("count is {v}"));
/// count.update(|v| *v += 1);
/// assert_eq!(count.get(), 2);
/// ```
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    dirty: Arc<AtomicBool>,
    subscribers: Arc<Subscribers<T>>,
}

impl<T> State<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a new state with the given value.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            dirty: Arc::new(AtomicBool::new(false)),
            subscribers: Arc::new(Subscribers::default()),
        }
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Borrow the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Set a new value and notify subscribers.
    pub fn set(&self, value: T) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = value;
            self.dirty.store(true, Ordering::SeqCst);
        }
        self.notify();
    }

    /// Update the value using a closure and notify subscribers.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        if let Ok(mut guard) = self.inner.write() {
            f(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
        self.notify();
    }

    /// Subscribe to changes. `f` runs immediately with the current value,
    /// then after every write until the returned [`Subscription`] is dropped.
    pub fn subscribe(&self, f: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let f: Callback<T> = Arc::new(f);
        f(&self.get());
        self.subscribers.add(f)
    }

    /// Check if the state has been modified since last check.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&self) {
        if self.subscribers.is_empty() {
            return;
        }
        let value = self.get();
        self.subscribers.notify(&value);
    }
}

impl<T> Watch for State<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn watch(&self, f: Arc<dyn Fn() + Send + Sync>) -> Subscription {
        self.subscribers.add(Arc::new(move |_: &T| f()))
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

impl<T> Default for State<T>
where
    T: Clone + Default + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("State");
        match self.inner.read() {
            Ok(guard) => s.field("value", &*guard),
            Err(_) => s.field("value", &"<poisoned>"),
        };
        s.field("dirty", &self.dirty.load(Ordering::SeqCst))
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Subscriber list
// -----------------------------------------------------------------------------

pub(crate) struct Subscribers<T> {
    list: RwLock<SubscriberList<T>>,
}

struct SubscriberList<T> {
    next: u64,
    entries: Vec<(u64, Callback<T>)>,
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self {
            list: RwLock::new(SubscriberList {
                next: 0,
                entries: Vec::new(),
            }),
        }
    }
}

impl<T> Subscribers<T> {
    pub(crate) fn len(&self) -> usize {
        self.list
            .read()
            .map(|list| list.entries.len())
            .unwrap_or(0)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Send + Sync + 'static> Subscribers<T> {
    pub(crate) fn add(self: &Arc<Self>, f: Callback<T>) -> Subscription {
        let id = {
            let mut list = self.list.write().unwrap_or_else(PoisonError::into_inner);
            let id = list.next;
            list.next += 1;
            list.entries.push((id, f));
            id
        };
        let weak: Weak<Self> = Arc::downgrade(self);
        Subscription::new(move || {
            if let Some(subscribers) = weak.upgrade() {
                subscribers
                    .list
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .entries
                    .retain(|(entry, _)| *entry != id);
            }
        })
    }

    /// Call every subscriber with `value`. The list is snapshotted first so
    /// callbacks may subscribe or unsubscribe.
    pub(crate) fn notify(&self, value: &T) {
        let callbacks: Vec<Callback<T>> = self
            .list
            .read()
            .map(|list| list.entries.iter().map(|(_, f)| Arc::clone(f)).collect())
            .unwrap_or_default();
        for callback in callbacks {
            callback(value);
        }
    }
}

/// Keeps a subscription alive. Dropping it (or calling
/// [`unsubscribe`](Self::unsubscribe)) removes the callback.
pub struct Subscription {
    release: Mutex<Option<Box<dyn FnOnce() + Send>>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Mutex::new(Some(Box::new(release))),
        }
    }

    pub fn unsubscribe(self) {
        // Drop does the work.
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let release = self
            .release
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(release) = release {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}
