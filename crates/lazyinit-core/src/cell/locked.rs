//! Fully-locked lazy cell.

use std::convert::Infallible;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

/// A lazily-initialized value guarded by a single mutex.
///
/// Every access, including every read after the value exists, acquires the
/// same lock before checking the slot.  This is the simplest correct lazy
/// strategy and the baseline the double-checked cell is measured against.
///
/// The value is handed out as an `Arc<T>` clone so that no reference ever
/// outlives the guard.
pub struct LockedCell<T> {
    slot: Mutex<Option<Arc<T>>>,
}

impl<T> LockedCell<T> {
    /// Create an empty cell.  Usable in `static` items.
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    // A panicking initializer poisons the mutex before it ever writes the
    // slot, so the guarded `Option` is still consistent.
    fn lock(&self) -> MutexGuard<'_, Option<Arc<T>>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the value if it has been constructed.
    pub fn get(&self) -> Option<Arc<T>> {
        self.lock().clone()
    }

    /// Return `true` once the value has been constructed.
    pub fn is_initialized(&self) -> bool {
        self.lock().is_some()
    }

    /// Return the value, constructing it with `init` on first access.
    pub fn get_or_init<F>(&self, init: F) -> Arc<T>
    where
        F: FnOnce() -> T,
    {
        match self.get_or_try_init(|| Ok::<T, Infallible>(init())) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Return the value, constructing it with `init` on first access.
    ///
    /// If `init` fails the error is returned to this caller, the lock is
    /// released and the cell stays empty.
    pub fn get_or_try_init<F, E>(&self, init: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let mut slot = self.lock();
        if let Some(value) = slot.as_ref() {
            return Ok(Arc::clone(value));
        }
        debug!(
            type_name = std::any::type_name::<T>(),
            "constructing locked value"
        );
        match init() {
            Ok(value) => {
                let value = Arc::new(value);
                *slot = Some(Arc::clone(&value));
                Ok(value)
            }
            Err(err) => {
                warn!(
                    type_name = std::any::type_name::<T>(),
                    "construction failed, cell left empty"
                );
                Err(err)
            }
        }
    }
}

impl<T> Default for LockedCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LockedCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(v) => write!(f, "LockedCell({:?})", v),
            None => write!(f, "LockedCell(<empty>)"),
        }
    }
}
