//! StoreCell<T> - a versioned value observable by polling
//!
//! Every store of the application core lives inside a `StoreCell`. Frontends
//! (or any embedding host) take a [`Watcher`] and poll it on their own
//! schedule; there is no push machinery and no executor requirement, so the
//! core stays usable from sync code, any async runtime, or FFI bindings.

// RwLock::read/write only fail on poisoning, which is unrecoverable here.
#![allow(clippy::expect_used)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

struct CellInner<T> {
    value: RwLock<T>,
    /// Bumped once per committed write.
    version: AtomicU64,
}

/// A shared, versioned value
///
/// Clones share state. Reads clone the current value; writes commit under
/// the write lock and then bump the version, so a [`Watcher`] never observes
/// a half-applied mutation.
#[derive(Clone)]
pub struct StoreCell<T> {
    inner: Arc<CellInner<T>>,
}

impl<T: Clone + Send + Sync + 'static> StoreCell<T> {
    /// Wrap an initial value
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(CellInner {
                value: RwLock::new(value),
                version: AtomicU64::new(0),
            }),
        }
    }

    /// Clone out the current value
    pub fn get(&self) -> T {
        self.inner
            .value
            .read()
            .expect("StoreCell lock poisoned")
            .clone()
    }

    /// Current version; incremented once per `set` or `modify`
    pub fn version(&self) -> u64 {
        self.inner.version.load(Ordering::Acquire)
    }

    /// Replace the value
    pub fn set(&self, value: T) {
        {
            let mut guard = self.inner.value.write().expect("StoreCell lock poisoned");
            *guard = value;
        }
        self.inner.version.fetch_add(1, Ordering::Release);
    }

    /// Mutate in place under the write lock
    ///
    /// The closure runs while the lock is held, so multi-field changes (for
    /// example an input update together with its page reset) land as one
    /// observable step. The version is bumped after the lock is released.
    pub fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = {
            let mut guard = self.inner.value.write().expect("StoreCell lock poisoned");
            f(&mut guard)
        };
        self.inner.version.fetch_add(1, Ordering::Release);
        result
    }

    /// Start watching for changes from the current version onward
    pub fn watch(&self) -> Watcher<T> {
        Watcher {
            source: self.inner.clone(),
            seen: self.inner.version.load(Ordering::Acquire),
        }
    }
}

impl<T: Clone + Send + Sync + Default + 'static> Default for StoreCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + Send + Sync + std::fmt::Debug + 'static> std::fmt::Debug for StoreCell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreCell")
            .field("value", &self.get())
            .field("version", &self.version())
            .finish()
    }
}

/// Poll-based view onto a [`StoreCell`]
///
/// Tracks the last version it observed. Intermediate writes coalesce: a
/// watcher that polls after three writes sees only the latest value.
pub struct Watcher<T> {
    source: Arc<CellInner<T>>,
    seen: u64,
}

impl<T: Clone + Send + Sync + 'static> Watcher<T> {
    /// True when the cell has been written since the last `poll`
    pub fn has_changed(&self) -> bool {
        self.source.version.load(Ordering::Acquire) > self.seen
    }

    /// Take the latest value if the cell changed since the last poll
    pub fn poll(&mut self) -> Option<T> {
        let current = self.source.version.load(Ordering::Acquire);
        if current > self.seen {
            self.seen = current;
            Some(
                self.source
                    .value
                    .read()
                    .expect("StoreCell lock poisoned")
                    .clone(),
            )
        } else {
            None
        }
    }

    /// Clone out the current value without consuming the change flag
    pub fn current(&self) -> T {
        self.source
            .value
            .read()
            .expect("StoreCell lock poisoned")
            .clone()
    }
}
