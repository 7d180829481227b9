//! SH1106 OLED Display Driver
//!
//! A driver for 128x64 monochrome OLED panels built on the SH1106 controller,
//! connected over 4-wire SPI with separate data/command and reset lines.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - Built-in 5x7 ASCII font with a text cursor
//! - Horizontal and diagonal hardware scrolling
//! - Configurable power-up sequence
//! - Typed request surface for front ends ([`Request`])
//! - Lock-protected shared access ([`SharedDisplay`])
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use sh1106::{Builder, Display, Interface};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, rst);
//! let config = match Builder::new().contrast(0xCF).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.init(&mut delay);
//! let _ = display.set_cursor(0, 0);
//! let _ = display.print_str("Hello\nSH1106");
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// SH1106 command definitions
pub mod command;
/// Panel geometry and configuration builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Built-in 5x7 font
pub mod font;
/// Hardware interface abstraction
pub mod interface;
/// Boot logo bitmap
pub mod logo;
/// Typed operation requests
pub mod request;
/// Lock-protected shared display
pub mod shared;

pub use config::{Builder, CHAR_WIDTH, Config, FRAME_SIZE, MAX_COLUMN, MAX_PAGE, PAGES, SEGMENTS};
pub use display::{Cursor, DiagonalScroll, Display, INIT_SEQUENCE_LEN, ScrollDirection};
pub use error::{BuilderError, Error};
pub use interface::InterfaceError;
pub use interface::{ByteKind, DisplayInterface, Interface};
pub use request::{MAX_STRING_LEN, Request};
pub use shared::SharedDisplay;
