//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations, split into rejected
//!   input (nothing was sent) and transport failures (the link failed mid-operation)
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! ## Example
//!
//! ```
//! use sh1106::{Builder, BuilderError};
//!
//! // Multiplex ratio above 64 MUX
//! let result = Builder::new().multiplex_ratio(0x40).build();
//! assert!(matches!(result, Err(BuilderError::InvalidMultiplexRatio(0x40))));
//! ```

use crate::config::{MAX_DISPLAY_OFFSET, MAX_MULTIPLEX_RATIO, MIN_MULTIPLEX_RATIO};
use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// Input errors are reported before any byte is sent and leave the cursor
/// untouched; [`Error::Interface`] may leave a command half written.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    /// No byte is sent after the failing one.
    Interface(I::Error),
    /// Cursor position outside the panel
    ///
    /// Valid positions satisfy `line <= 7` and `column < 128`.
    InvalidCursor {
        /// Requested page
        line: u8,
        /// Requested column
        column: u8,
    },
    /// Character not covered by the font
    ///
    /// Printable ASCII (0x20-0x7E) and `'\n'` are accepted.
    UnsupportedChar(u8),
}

impl<I: DisplayInterface> Error<I> {
    /// Whether the error was caused by caller input rather than the link
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Self::Interface(_))
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::InvalidCursor { line, column } => {
                write!(f, "Invalid cursor position: line {line}, column {column}")
            }
            Self::UnsupportedChar(c) => write!(f, "Unsupported character: 0x{c:02X}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Multiplex ratio operand out of range
    ///
    /// See [`Builder::multiplex_ratio()`](crate::config::Builder::multiplex_ratio).
    InvalidMultiplexRatio(u8),
    /// Display offset out of range
    InvalidDisplayOffset(u8),
    /// Reset settling delay of zero
    InvalidResetDelay,
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidMultiplexRatio(value) => write!(
                f,
                "Invalid multiplex ratio 0x{value:02X} (expected 0x{MIN_MULTIPLEX_RATIO:02X}..=0x{MAX_MULTIPLEX_RATIO:02X})"
            ),
            Self::InvalidDisplayOffset(value) => write!(
                f,
                "Invalid display offset {value} (max {MAX_DISPLAY_OFFSET})"
            ),
            Self::InvalidResetDelay => write!(f, "Reset delay must be non-zero"),
        }
    }
}

impl core::error::Error for BuilderError {}
