//! Shared access from several callers
//!
//! A half-written command sequence cannot be rolled back, so callers that
//! share one panel must not interleave operations. [`SharedDisplay`] holds the
//! lock for a whole logical operation (or a group of them), never per byte.
//!
//! ## Example
//!
//! ```
//! use embassy_sync::blocking_mutex::raw::NoopRawMutex;
//! use sh1106::{Builder, ByteKind, Display, DisplayInterface, SharedDisplay};
//! # use embedded_hal::delay::DelayNs;
//! # struct Sink;
//! # impl DisplayInterface for Sink {
//! #     type Error = core::convert::Infallible;
//! #     fn send(&mut self, _kind: ByteKind, _byte: u8) -> Result<(), Self::Error> { Ok(()) }
//! #     fn reset<D: DelayNs>(&mut self, _delay: &mut D, _ms: u32) -> Result<(), Self::Error> { Ok(()) }
//! #     fn release(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let config = match Builder::new().build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! let shared: SharedDisplay<NoopRawMutex, _> = SharedDisplay::new(Display::new(Sink, config));
//!
//! // Cursor move and text go out as one uninterrupted unit
//! let _ = shared.lock(|display| {
//!     display.set_cursor(3, 0)?;
//!     display.print_str("ready")
//! });
//! ```

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal::delay::DelayNs;

use crate::display::{Cursor, Display, DisplayResult};
use crate::interface::DisplayInterface;
use crate::request::Request;

/// [`Display`] behind a blocking mutex
///
/// `M` selects the locking strategy, e.g. `CriticalSectionRawMutex` when
/// interrupts or other cores share the panel, `NoopRawMutex` for a single
/// executor.
pub struct SharedDisplay<M, I>
where
    M: RawMutex,
    I: DisplayInterface,
{
    inner: Mutex<M, RefCell<Display<I>>>,
}

impl<M, I> SharedDisplay<M, I>
where
    M: RawMutex,
    I: DisplayInterface,
{
    /// Wrap a display
    pub fn new(display: Display<I>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(display)),
        }
    }

    /// Run `f` with exclusive access to the display
    ///
    /// Must not be re-entered from inside `f`.
    pub fn lock<R>(&self, f: impl FnOnce(&mut Display<I>) -> R) -> R {
        self.inner.lock(|display| f(&mut display.borrow_mut()))
    }

    /// Run one request under the lock
    pub fn apply<D: DelayNs>(&self, request: &Request, delay: &mut D) -> DisplayResult<I> {
        self.lock(|display| display.apply(request, delay))
    }

    /// Current shadow cursor
    pub fn cursor(&self) -> Cursor {
        self.lock(|display| display.cursor())
    }

    /// Unwrap the display
    pub fn into_inner(self) -> Display<I> {
        self.inner.into_inner().into_inner()
    }
}
