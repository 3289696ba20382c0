//! Double-checked-locking cell.
//!
//! The published value lives behind an `AtomicPtr`.  The writer fully
//! constructs the value, boxes it and stores the pointer with `Release`;
//! readers load it with `Acquire`.  A reader that sees a non-null pointer is
//! therefore guaranteed to see every write the constructor made.  A plain
//! (non-atomic) shared slot would let a reader observe the pointer before the
//! constructor's writes, which is exactly the race this cell exists to avoid.

#![allow(unsafe_code)]

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;
use std::ptr;
use std::sync::atomic::{AtomicPtr, Ordering};
use std::sync::{Mutex, PoisonError};

use tracing::{debug, trace, warn};

/// A lazily-initialized value that is read without locking once published.
///
/// The lock is only taken while the value is absent.  After publication,
/// [`get`](Self::get) and [`get_or_init`](Self::get_or_init) are a single
/// acquire load.
///
/// Calling `get_or_init` on the same cell from inside its own initializer
/// deadlocks.
///
/// # Example
/// ```
/// use lazyinit_core::DoubleCheckedCell;
///
/// static GREETING: DoubleCheckedCell<String> = DoubleCheckedCell::new();
///
/// let a = GREETING.get_or_init(|| "hello".to_string());
/// let b = GREETING.get_or_init(|| unreachable!());
/// assert!(std::ptr::eq(a, b));
/// ```
pub struct DoubleCheckedCell<T> {
    value: AtomicPtr<T>,
    lock: Mutex<()>,
    _owns: PhantomData<Box<T>>,
}

// SAFETY: a shared `DoubleCheckedCell` hands out `&T` to every thread
// (needs `T: Sync`) and may construct `T` on one thread and drop it on
// another (needs `T: Send`).
unsafe impl<T: Send + Sync> Sync for DoubleCheckedCell<T> {}

impl<T> DoubleCheckedCell<T> {
    /// Create an empty cell.  Usable in `static` items.
    pub const fn new() -> Self {
        Self {
            value: AtomicPtr::new(ptr::null_mut()),
            lock: Mutex::new(()),
            _owns: PhantomData,
        }
    }

    /// Return the value if it has been published.  Never blocks.
    pub fn get(&self) -> Option<&T> {
        let ptr = self.value.load(Ordering::Acquire);
        // SAFETY: the only non-null pointer ever stored comes from
        // `Box::into_raw` in `get_or_try_init`, after the value was fully
        // built; it is never replaced or freed while `&self` is alive.  The
        // acquire load pairs with that release store.
        unsafe { ptr.as_ref() }
    }

    /// Return `true` once the value has been published.
    pub fn is_initialized(&self) -> bool {
        !self.value.load(Ordering::Acquire).is_null()
    }

    /// Return the value, constructing it with `init` on first access.
    pub fn get_or_init<F>(&self, init: F) -> &T
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
    /// If `init` fails (or panics) nothing is published, the lock is
    /// released, and the next caller runs its own initializer.
    pub fn get_or_try_init<F, E>(&self, init: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(value) = self.get() {
            return Ok(value);
        }

        // The lock guards no data, so poisoning carries no information.
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(value) = self.get() {
            trace!(
                type_name = std::any::type_name::<T>(),
                "value published while waiting for lock"
            );
            return Ok(value);
        }

        debug!(
            type_name = std::any::type_name::<T>(),
            "constructing double-checked value"
        );
        let value = match init() {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    type_name = std::any::type_name::<T>(),
                    "construction failed, cell left empty"
                );
                return Err(err);
            }
        };

        let ptr = Box::into_raw(Box::new(value));
        self.value.store(ptr, Ordering::Release);
        // SAFETY: `ptr` was just leaked from a live box and is owned by the
        // cell until drop.
        Ok(unsafe { &*ptr })
    }

    /// Consume the cell and return the value, if any.
    pub fn into_inner(mut self) -> Option<T> {
        let ptr = std::mem::replace(self.value.get_mut(), ptr::null_mut());
        if ptr.is_null() {
            None
        } else {
            // SAFETY: non-null pointers come from `Box::into_raw`; nulling
            // the slot above keeps `Drop` from freeing it again.
            Some(*unsafe { Box::from_raw(ptr) })
        }
    }
}

impl<T> Drop for DoubleCheckedCell<T> {
    fn drop(&mut self) {
        let ptr = *self.value.get_mut();
        if !ptr.is_null() {
            // SAFETY: exclusive access; the pointer came from `Box::into_raw`
            // and has not been freed.
            drop(unsafe { Box::from_raw(ptr) });
        }
    }
}

impl<T> Default for DoubleCheckedCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DoubleCheckedCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(v) => write!(f, "DoubleCheckedCell({:?})", v),
            None => write!(f, "DoubleCheckedCell(<empty>)"),
        }
    }
}
