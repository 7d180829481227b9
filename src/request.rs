//! Typed command surface
//!
//! A front end (control file, RPC endpoint, shell) decodes its own input into a
//! [`Request`] and hands it to [`Display::apply`]. Each variant maps to exactly
//! one driver operation; string payloads are bounded to [`MAX_STRING_LEN`]
//! bytes so the driver never sees unbounded input.
//!
//! ## Example
//!
//! ```
//! use sh1106::{Request, MAX_STRING_LEN};
//!
//! let long = [b'x'; 300];
//! let request = Request::print_string(&long);
//! assert!(matches!(request, Request::PrintString(ref s) if s.len() == MAX_STRING_LEN));
//! ```

use embedded_hal::delay::DelayNs;
use heapless::Vec;

use crate::display::{DiagonalScroll, Display, DisplayResult, ScrollDirection};
use crate::interface::DisplayInterface;

/// Longest string accepted by [`Request::PrintString`]
pub const MAX_STRING_LEN: usize = 255;

/// One driver operation with its arguments
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    /// [`Display::init`]
    Init,
    /// [`Display::deinit`]
    Deinit,
    /// [`Display::set_cursor`]
    SetCursor {
        /// Page 0-7
        line: u8,
        /// Column 0-127
        column: u8,
    },
    /// [`Display::next_line`]
    NextLine,
    /// [`Display::print_char`]
    PrintChar(u8),
    /// [`Display::print_bytes`]
    PrintString(Vec<u8, MAX_STRING_LEN>),
    /// [`Display::invert`]
    InvertDisplay(bool),
    /// [`Display::set_brightness`]
    SetBrightness(u8),
    /// [`Display::start_scroll_horizontal`]
    StartScrollHorizontal {
        /// Scroll direction
        direction: ScrollDirection,
        /// First scrolled page
        start_page: u8,
        /// Last scrolled page
        end_page: u8,
    },
    /// [`Display::start_scroll_diagonal`]
    StartScrollVerticalHorizontal(DiagonalScroll),
    /// [`Display::deactivate_scroll`]
    DeactivateScroll,
    /// [`Display::fill`]
    Fill(u8),
    /// [`Display::clear`]
    ClearDisplay,
    /// [`Display::print_logo`]
    PrintLogo,
}

impl Request {
    /// Build a print request, truncating `text` to [`MAX_STRING_LEN`] bytes
    pub fn print_string(text: &[u8]) -> Self {
        let len = text.len().min(MAX_STRING_LEN);
        Self::PrintString(Vec::from_slice(&text[..len]).unwrap_or_default())
    }
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Run one request
    ///
    /// `delay` is only used by [`Request::Init`].
    pub fn apply<D: DelayNs>(&mut self, request: &Request, delay: &mut D) -> DisplayResult<I> {
        match request {
            Request::Init => self.init(delay),
            Request::Deinit => self.deinit(),
            Request::SetCursor { line, column } => self.set_cursor(*line, *column),
            Request::NextLine => self.next_line(),
            Request::PrintChar(c) => self.print_char(*c),
            Request::PrintString(text) => self.print_bytes(text),
            Request::InvertDisplay(inverted) => self.invert(*inverted),
            Request::SetBrightness(value) => self.set_brightness(*value),
            Request::StartScrollHorizontal {
                direction,
                start_page,
                end_page,
            } => self.start_scroll_horizontal(*direction, *start_page, *end_page),
            Request::StartScrollVerticalHorizontal(scroll) => self.start_scroll_diagonal(*scroll),
            Request::DeactivateScroll => self.deactivate_scroll(),
            Request::Fill(value) => self.fill(*value),
            Request::ClearDisplay => self.clear(),
            Request::PrintLogo => self.print_logo(),
        }
    }
}
