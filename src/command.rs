//! SH1106 command definitions
//!
//! This module defines the command bytes used to drive the SH1106 OLED
//! controller. Every byte, including command operands, is clocked out with
//! the DC pin low; only pixel data is sent with DC high.
//!
//! ## Command Structure
//!
//! A multi-byte command is a command byte followed by its operand bytes:
//! 1. Set DC low (command mode)
//! 2. Send command byte
//! 3. Send operand bytes (still in command mode)
//!
//! ## Example
//!
//! ```rust,no_run
//! use sh1106::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//! // Set contrast to 0x40
//! let _ = interface.send_command(command::SET_CONTRAST);
//! let _ = interface.send_command(0x40);
//!
//! // Write one page column of pixels
//! let _ = interface.send_data(0xFF);
//! ```

// Fundamental commands

/// Set contrast control (0x81)
///
/// Requires 1 operand byte: contrast level 0x00-0xFF.
pub const SET_CONTRAST: u8 = 0x81;

/// Resume display from RAM content (0xA4)
pub const ENTIRE_DISPLAY_RESUME: u8 = 0xA4;

/// Normal display, 1 in RAM lights a pixel (0xA6)
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Inverse display, 0 in RAM lights a pixel (0xA7)
pub const INVERT_DISPLAY: u8 = 0xA7;

/// Display off, panel enters sleep (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

// Scrolling commands

/// Continuous right horizontal scroll setup (0x26)
///
/// Requires 6 operand bytes: dummy 0x00, start page, frame interval,
/// end page, dummy 0x00, dummy 0xFF.
pub const RIGHT_HORIZONTAL_SCROLL: u8 = 0x26;

/// Continuous left horizontal scroll setup (0x27)
///
/// Same operands as [`RIGHT_HORIZONTAL_SCROLL`].
pub const LEFT_HORIZONTAL_SCROLL: u8 = 0x27;

/// Continuous vertical and right horizontal scroll setup (0x29)
///
/// Requires 5 operand bytes: dummy 0x00, start page, frame interval,
/// end page, vertical row offset.
pub const VERTICAL_RIGHT_HORIZONTAL_SCROLL: u8 = 0x29;

/// Continuous vertical and left horizontal scroll setup (0x2A)
///
/// Same operands as [`VERTICAL_RIGHT_HORIZONTAL_SCROLL`].
pub const VERTICAL_LEFT_HORIZONTAL_SCROLL: u8 = 0x2A;

/// Deactivate scroll (0x2E)
///
/// RAM content must be rewritten after scrolling stops.
pub const DEACTIVATE_SCROLL: u8 = 0x2E;

/// Activate scroll (0x2F)
///
/// Starts the scroll configured by the most recent scroll setup command.
pub const ACTIVATE_SCROLL: u8 = 0x2F;

/// Set vertical scroll area (0xA3)
///
/// Requires 2 operand bytes: number of fixed top rows, number of scrolling rows.
pub const SET_VERTICAL_SCROLL_AREA: u8 = 0xA3;

/// Frame interval operand used by every scroll setup (5 frames)
pub const SCROLL_INTERVAL_5_FRAMES: u8 = 0x00;

// Addressing commands

/// Set memory addressing mode (0x20)
///
/// Requires 1 operand byte, see [`HORIZONTAL_ADDRESSING`].
pub const SET_MEMORY_ADDRESSING_MODE: u8 = 0x20;

/// Horizontal addressing: the column pointer wraps into the next page
pub const HORIZONTAL_ADDRESSING: u8 = 0x00;

/// Set column address window (0x21)
///
/// Requires 2 operand bytes: start column, end column.
pub const SET_COLUMN_ADDRESS: u8 = 0x21;

/// Set page address window (0x22)
///
/// Requires 2 operand bytes: start page, end page.
pub const SET_PAGE_ADDRESS: u8 = 0x22;

// Hardware configuration commands

/// Set display start line to 0 (0x40, OR in the line 0-63)
pub const SET_START_LINE: u8 = 0x40;

/// Segment remap: column 0 mapped to SEG0 (0xA0)
pub const SEGMENT_REMAP_NORMAL: u8 = 0xA0;

/// Segment remap: column 127 mapped to SEG0 (0xA1)
pub const SEGMENT_REMAP_REVERSED: u8 = 0xA1;

/// Set multiplex ratio (0xA8)
///
/// Requires 1 operand byte: ratio - 1, from 0x0F to 0x3F.
pub const SET_MULTIPLEX_RATIO: u8 = 0xA8;

/// COM output scan from COM0 to COM\[N-1\] (0xC0)
pub const COM_SCAN_NORMAL: u8 = 0xC0;

/// COM output scan from COM\[N-1\] to COM0 (0xC8)
pub const COM_SCAN_REVERSED: u8 = 0xC8;

/// Set display offset (0xD3)
///
/// Requires 1 operand byte: vertical shift 0-63.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Set COM pins hardware configuration (0xDA)
///
/// Requires 1 operand byte, see [`COM_PINS_ALTERNATIVE`].
pub const SET_COM_PINS: u8 = 0xDA;

/// Alternative COM pin layout, no left/right remap
pub const COM_PINS_ALTERNATIVE: u8 = 0x12;

// Timing and driving scheme commands

/// Set display clock divide ratio and oscillator frequency (0xD5)
///
/// Requires 1 operand byte.
pub const SET_CLOCK_DIVIDE: u8 = 0xD5;

/// Set pre-charge period (0xD9)
///
/// Requires 1 operand byte: phase 2 in the high nibble, phase 1 in the low nibble.
pub const SET_PRECHARGE: u8 = 0xD9;

/// Set VCOMH deselect level (0xDB)
///
/// Requires 1 operand byte.
pub const SET_VCOMH_DESELECT: u8 = 0xDB;

// Charge pump

/// Charge pump setting (0x8D)
///
/// Requires 1 operand byte, see [`CHARGE_PUMP_ENABLE`].
pub const SET_CHARGE_PUMP: u8 = 0x8D;

/// Enable the internal charge pump while the display is on
pub const CHARGE_PUMP_ENABLE: u8 = 0x14;
