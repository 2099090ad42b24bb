//! Synchronization primitives for ISR-safe access.
//!
//! Low-level primitives used by the shared driver wrapper.

use core::cell::RefCell;
use critical_section::Mutex;

/// Cell providing interior mutability with critical section protection.
///
/// Combines `critical_section::Mutex` with `RefCell` for safe mutable access
/// from both normal code and interrupt handlers. The cell is `Sync` whenever
/// `T: Send`, so it can live in a `static`.
pub struct CriticalSectionCell<T> {
    inner: Mutex<RefCell<T>>,
}

impl<T> CriticalSectionCell<T> {
    /// Create a new cell (const, suitable for static initialization).
    pub const fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(value)),
        }
    }

    /// Execute a closure with exclusive mutable access.
    ///
    /// Interrupts are disabled for the duration of the closure.
    ///
    /// # Panics
    ///
    /// Panics if called re-entrantly from inside another `with` on the same
    /// cell; use [`try_with`](Self::try_with) where that can happen.
    #[inline]
    pub fn with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        critical_section::with(|cs| {
            let mut value = self.inner.borrow_ref_mut(cs);
            f(&mut value)
        })
    }

    /// Try to execute a closure, returning `None` if already borrowed.
    #[inline]
    pub fn try_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        critical_section::with(|cs| {
            self.inner
                .borrow(cs)
                .try_borrow_mut()
                .ok()
                .map(|mut value| f(&mut value))
        })
    }

    /// Replace the contents, returning the previous value.
    pub fn replace(&self, value: T) -> T {
        critical_section::with(|cs| self.inner.replace(cs, value))
    }
}

impl<T: Default> CriticalSectionCell<T> {
    /// Take the contents, leaving `T::default()` in their place.
    pub fn take(&self) -> T {
        critical_section::with(|cs| self.inner.take(cs))
    }
}
