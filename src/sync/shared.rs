//! ISR-safe driver wrapper using critical sections.

use super::primitives::CriticalSectionCell;
use crate::driver::enc28j60::Enc28j60;

/// ISR-safe ENC28J60 wrapper using critical sections.
///
/// Starts empty so it can be a `static`; the driver is moved in with
/// [`install`](Self::install) once its transport and delay exist. All
/// access goes through `critical_section::with()`, disabling interrupts for
/// the duration of the closure.
///
/// # Example
///
/// ```ignore
/// static ETH: SharedEnc28j60<MySpiTransport, MyDelay> = SharedEnc28j60::new();
///
/// ETH.install(Enc28j60::new(transport, delay, Enc28j60Config::new()));
/// ETH.with(|eth| eth.init()).transpose()?;
///
/// #[interrupt]
/// fn EXTI0() {
///     ETH.try_with(|eth| {
///         let mut buf = [0u8; 1518];
///         while eth.poll(&mut buf).unwrap_or(0) > 0 {
///             // hand the frame to the stack
///         }
///     });
/// }
/// ```
pub struct SharedEnc28j60<T, D> {
    inner: CriticalSectionCell<Option<Enc28j60<T, D>>>,
}

impl<T, D> SharedEnc28j60<T, D> {
    /// Create an empty wrapper (const, suitable for static initialization).
    pub const fn new() -> Self {
        Self {
            inner: CriticalSectionCell::new(None),
        }
    }

    /// Move a driver in, returning the one previously installed.
    pub fn install(&self, driver: Enc28j60<T, D>) -> Option<Enc28j60<T, D>> {
        self.inner.replace(Some(driver))
    }

    /// Move the driver out, leaving the wrapper empty.
    pub fn take(&self) -> Option<Enc28j60<T, D>> {
        self.inner.take()
    }

    /// Whether a driver is installed.
    pub fn is_installed(&self) -> bool {
        self.inner.with(|slot| slot.is_some())
    }

    /// Execute a closure with exclusive access to the driver.
    ///
    /// Returns `None` if no driver is installed. Interrupts are disabled for
    /// the duration of the closure.
    #[inline]
    pub fn with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut Enc28j60<T, D>) -> R,
    {
        self.inner.with(|slot| slot.as_mut().map(f))
    }

    /// Like [`with`](Self::with), but also returns `None` if the driver is
    /// already borrowed (for example from an interrupt that preempted a
    /// `with` on the same wrapper).
    #[inline]
    pub fn try_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut Enc28j60<T, D>) -> R,
    {
        self.inner.try_with(|slot| slot.as_mut().map(f)).flatten()
    }
}

impl<T, D> Default for SharedEnc28j60<T, D> {
    fn default() -> Self {
        Self::new()
    }
}
