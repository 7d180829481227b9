//! Core display operations
//!
//! [`Display`] turns text, cursor, scroll and fill operations into the exact
//! command/data byte sequence the SH1106 expects, and keeps a shadow copy of
//! the controller's address pointer. The controller cannot be read back over
//! SPI, so every path that moves the hardware pointer updates [`Cursor`] by
//! the same amount.

use embedded_hal::delay::DelayNs;
use log::{debug, trace, warn};

use crate::command::{
    ACTIVATE_SCROLL, CHARGE_PUMP_ENABLE, COM_PINS_ALTERNATIVE, COM_SCAN_NORMAL, COM_SCAN_REVERSED,
    DEACTIVATE_SCROLL, DISPLAY_OFF, DISPLAY_ON, ENTIRE_DISPLAY_RESUME, HORIZONTAL_ADDRESSING,
    INVERT_DISPLAY, LEFT_HORIZONTAL_SCROLL, NORMAL_DISPLAY, RIGHT_HORIZONTAL_SCROLL,
    SCROLL_INTERVAL_5_FRAMES, SEGMENT_REMAP_NORMAL, SEGMENT_REMAP_REVERSED, SET_CHARGE_PUMP,
    SET_CLOCK_DIVIDE, SET_COLUMN_ADDRESS, SET_COM_PINS, SET_CONTRAST, SET_DISPLAY_OFFSET,
    SET_MEMORY_ADDRESSING_MODE, SET_MULTIPLEX_RATIO, SET_PAGE_ADDRESS, SET_PRECHARGE,
    SET_START_LINE, SET_VCOMH_DESELECT, SET_VERTICAL_SCROLL_AREA,
    VERTICAL_LEFT_HORIZONTAL_SCROLL, VERTICAL_RIGHT_HORIZONTAL_SCROLL,
};
use crate::config::{CHAR_WIDTH, Config, FRAME_SIZE, MAX_COLUMN, MAX_PAGE, SEGMENTS};
use crate::error::Error;
use crate::font;
use crate::interface::DisplayInterface;
use crate::logo::LOGO;

pub(crate) type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Number of command bytes in the power-up sequence
pub const INIT_SEQUENCE_LEN: usize = 26;

/// Shadow of the controller's page/column address pointer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Current page (0-7)
    pub page: u8,
    /// Current column (0-127)
    pub column: u8,
}

/// Horizontal scroll direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Content moves right
    #[default]
    Right,
    /// Content moves left
    Left,
}

/// Parameters for a combined vertical and horizontal scroll
///
/// Page bounds are forwarded to the controller unchecked; the datasheet
/// range is 0-7.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiagonalScroll {
    /// Horizontal component direction
    pub direction: ScrollDirection,
    /// First page that scrolls horizontally
    pub start_page: u8,
    /// Last page that scrolls horizontally
    pub end_page: u8,
    /// Number of rows in the vertical scroll area
    pub vertical_area: u8,
    /// Rows moved per scroll step
    pub row_offset: u8,
}

/// Core display driver for SH1106
///
/// Owns the byte channel and the shadow cursor. All operations take
/// `&mut self`, so one logical operation always runs to completion before
/// the next starts; see [`SharedDisplay`](crate::shared::SharedDisplay) for
/// multi-caller use.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Shadow of the controller address pointer
    cursor: Cursor,
    /// Whether the power-up sequence completed
    initialized: bool,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            cursor: Cursor::default(),
            initialized: false,
        }
    }

    /// Pulse reset, send the power-up sequence and clear the panel
    ///
    /// Blocks for two reset settling delays. The first transport failure
    /// aborts the sequence; the panel state is then undefined and `init`
    /// may be retried.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.initialized = false;
        self.interface
            .reset(delay, self.config.reset_delay_ms)
            .map_err(Error::Interface)?;
        self.cursor = Cursor::default();

        for byte in self.init_sequence() {
            self.send_command(byte)?;
        }
        self.clear()?;

        self.initialized = true;
        debug!("sh1106: initialized");
        Ok(())
    }

    /// Release the reset and DC lines
    ///
    /// Safe to call repeatedly; the interface ignores releases after the first.
    pub fn deinit(&mut self) -> DisplayResult<I> {
        self.interface.release().map_err(Error::Interface)?;
        self.initialized = false;
        debug!("sh1106: control lines released");
        Ok(())
    }

    /// Move the cursor to `line` (page 0-7) and `column` (0-127)
    ///
    /// Programs the column window `column..=127` and page window `line..=7`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCursor` without sending anything if the position
    /// is off the panel.
    pub fn set_cursor(&mut self, line: u8, column: u8) -> DisplayResult<I> {
        if line > MAX_PAGE || column > MAX_COLUMN {
            warn!("sh1106: rejected cursor line {} column {}", line, column);
            return Err(Error::InvalidCursor { line, column });
        }

        self.send_command(SET_COLUMN_ADDRESS)?;
        self.send_command(column)?;
        self.send_command(MAX_COLUMN)?;
        self.send_command(SET_PAGE_ADDRESS)?;
        self.send_command(line)?;
        self.send_command(MAX_PAGE)?;

        self.cursor = Cursor { page: line, column };
        trace!("sh1106: cursor at page {} column {}", line, column);
        Ok(())
    }

    /// Move to column 0 of the next page, wrapping from page 7 to page 0
    pub fn next_line(&mut self) -> DisplayResult<I> {
        let page = (self.cursor.page + 1) & MAX_PAGE;
        self.set_cursor(page, 0)
    }

    /// Print one character at the cursor
    ///
    /// `'\n'` moves to the next line without drawing. A character that would
    /// not fit on the current line is wrapped to the next one first.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedChar` without sending anything for bytes
    /// outside printable ASCII.
    pub fn print_char(&mut self, c: u8) -> DisplayResult<I> {
        let glyph = if c == b'\n' {
            None
        } else if let Some(glyph) = font::glyph(c) {
            Some(glyph)
        } else {
            warn!("sh1106: rejected character 0x{:02X}", c);
            return Err(Error::UnsupportedChar(c));
        };

        if glyph.is_none() || self.cursor.column + CHAR_WIDTH >= SEGMENTS {
            self.next_line()?;
        }

        let Some(glyph) = glyph else {
            return Ok(());
        };
        for &column in glyph {
            self.send_data(column)?;
            self.cursor.column += 1;
        }
        // Blank spacing column
        self.send_data(0x00)?;
        self.cursor.column += 1;
        Ok(())
    }

    /// Print bytes up to the first NUL (or the end of the slice)
    ///
    /// Stops at the first error; characters before it stay on the panel.
    pub fn print_bytes(&mut self, text: &[u8]) -> DisplayResult<I> {
        for &c in text.iter().take_while(|&&c| c != 0) {
            self.print_char(c)?;
        }
        Ok(())
    }

    /// Print a string, see [`Display::print_bytes`]
    pub fn print_str(&mut self, text: &str) -> DisplayResult<I> {
        self.print_bytes(text.as_bytes())
    }

    /// Switch between inverse and normal video
    pub fn invert(&mut self, inverted: bool) -> DisplayResult<I> {
        self.send_command(if inverted {
            INVERT_DISPLAY
        } else {
            NORMAL_DISPLAY
        })
    }

    /// Set contrast (0x00-0xFF)
    ///
    /// The level is an operand of the contrast command, so it is sent in
    /// command mode.
    pub fn set_brightness(&mut self, value: u8) -> DisplayResult<I> {
        self.send_command(SET_CONTRAST)?;
        self.send_command(value)
    }

    /// Start a continuous horizontal scroll over `start_page..=end_page`
    pub fn start_scroll_horizontal(
        &mut self,
        direction: ScrollDirection,
        start_page: u8,
        end_page: u8,
    ) -> DisplayResult<I> {
        self.send_command(match direction {
            ScrollDirection::Left => LEFT_HORIZONTAL_SCROLL,
            ScrollDirection::Right => RIGHT_HORIZONTAL_SCROLL,
        })?;
        self.send_command(0x00)?;
        self.send_command(start_page)?;
        self.send_command(SCROLL_INTERVAL_5_FRAMES)?;
        self.send_command(end_page)?;
        self.send_command(0x00)?;
        self.send_command(0xFF)?;
        self.send_command(ACTIVATE_SCROLL)?;
        debug!(
            "sh1106: horizontal scroll {:?} pages {}..={}",
            direction, start_page, end_page
        );
        Ok(())
    }

    /// Start a continuous vertical and horizontal (diagonal) scroll
    pub fn start_scroll_diagonal(&mut self, scroll: DiagonalScroll) -> DisplayResult<I> {
        self.send_command(SET_VERTICAL_SCROLL_AREA)?;
        self.send_command(0x00)?;
        self.send_command(scroll.vertical_area)?;

        self.send_command(match scroll.direction {
            ScrollDirection::Left => VERTICAL_LEFT_HORIZONTAL_SCROLL,
            ScrollDirection::Right => VERTICAL_RIGHT_HORIZONTAL_SCROLL,
        })?;
        self.send_command(0x00)?;
        self.send_command(scroll.start_page)?;
        self.send_command(SCROLL_INTERVAL_5_FRAMES)?;
        self.send_command(scroll.end_page)?;
        self.send_command(scroll.row_offset)?;
        self.send_command(ACTIVATE_SCROLL)?;
        debug!("sh1106: diagonal scroll {:?}", scroll);
        Ok(())
    }

    /// Stop any active scroll
    pub fn deactivate_scroll(&mut self) -> DisplayResult<I> {
        self.send_command(DEACTIVATE_SCROLL)
    }

    /// Write `value` to a full frame of display RAM
    ///
    /// Starts wherever the controller pointer is and relies on address
    /// auto-increment; the shadow cursor is not moved.
    pub fn fill(&mut self, value: u8) -> DisplayResult<I> {
        for _ in 0..FRAME_SIZE {
            self.send_data(value)?;
        }
        Ok(())
    }

    /// Home the cursor and blank the panel
    pub fn clear(&mut self) -> DisplayResult<I> {
        self.set_cursor(0, 0)?;
        self.fill(0x00)
    }

    /// Home the cursor and draw the boot logo
    pub fn print_logo(&mut self) -> DisplayResult<I> {
        self.set_cursor(0, 0)?;
        for &byte in &LOGO {
            self.send_data(byte)?;
        }
        Ok(())
    }

    /// Current shadow cursor
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Whether [`Display::init`] completed since the last [`Display::deinit`]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the driver and return the interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Power-up command bytes for the current configuration
    fn init_sequence(&self) -> [u8; INIT_SEQUENCE_LEN] {
        let config = &self.config;
        [
            DISPLAY_OFF,
            SET_CLOCK_DIVIDE,
            config.clock_divide,
            SET_MULTIPLEX_RATIO,
            config.multiplex_ratio,
            SET_DISPLAY_OFFSET,
            config.display_offset,
            SET_START_LINE,
            SET_CHARGE_PUMP,
            CHARGE_PUMP_ENABLE,
            SET_MEMORY_ADDRESSING_MODE,
            HORIZONTAL_ADDRESSING,
            if config.segment_remap {
                SEGMENT_REMAP_REVERSED
            } else {
                SEGMENT_REMAP_NORMAL
            },
            if config.com_scan_reversed {
                COM_SCAN_REVERSED
            } else {
                COM_SCAN_NORMAL
            },
            SET_COM_PINS,
            COM_PINS_ALTERNATIVE,
            SET_CONTRAST,
            config.contrast,
            SET_PRECHARGE,
            config.precharge,
            SET_VCOMH_DESELECT,
            config.vcomh_deselect,
            ENTIRE_DISPLAY_RESUME,
            if config.inverted {
                INVERT_DISPLAY
            } else {
                NORMAL_DISPLAY
            },
            DEACTIVATE_SCROLL,
            DISPLAY_ON,
        ]
    }

    /// Send a command byte to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send a data byte to the display controller
    fn send_data(&mut self, data: u8) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }
}

impl<I> core::fmt::Write for Display<I>
where
    I: DisplayInterface,
{
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.print_str(s).map_err(|_| core::fmt::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Builder;
    use crate::interface::ByteKind;
    use crate::interface::mock::{MockDelay, MockInterface};
    use alloc::vec::Vec;

    const DEFAULT_INIT: [u8; INIT_SEQUENCE_LEN] = [
        0xAE, 0xD5, 0x80, 0xA8, 0x3F, 0xD3, 0x00, 0x40, 0x8D, 0x14, 0x20, 0x00, 0xA1, 0xC8, 0xDA,
        0x12, 0x81, 0x80, 0xD9, 0xF1, 0xDB, 0x20, 0xA4, 0xA6, 0x2E, 0xAF,
    ];

    fn test_display() -> Display<MockInterface> {
        Display::new(MockInterface::new(), Builder::new().build().unwrap())
    }

    fn failing_display(index: usize) -> Display<MockInterface> {
        Display::new(
            MockInterface::failing_at(index),
            Builder::new().build().unwrap(),
        )
    }

    fn cursor_bytes(line: u8, column: u8) -> [u8; 6] {
        [0x21, column, 0x7F, 0x22, line, 0x07]
    }

    #[test]
    fn test_new_display_starts_at_origin() {
        let display = test_display();
        assert_eq!(display.cursor(), Cursor { page: 0, column: 0 });
        assert!(!display.is_initialized());
    }

    #[test]
    fn test_set_cursor_emits_address_windows() {
        let mut display = test_display();
        display.set_cursor(3, 42).unwrap();
        let expected: Vec<(ByteKind, u8)> = cursor_bytes(3, 42)
            .iter()
            .map(|b| (ByteKind::Command, *b))
            .collect();
        assert_eq!(display.interface.sent, expected);
        assert_eq!(
            display.cursor(),
            Cursor {
                page: 3,
                column: 42
            }
        );
    }

    #[test]
    fn test_set_cursor_corners() {
        let mut display = test_display();
        display.set_cursor(7, 127).unwrap();
        assert_eq!(
            display.cursor(),
            Cursor {
                page: 7,
                column: 127
            }
        );
        display.set_cursor(0, 0).unwrap();
        assert_eq!(display.cursor(), Cursor::default());
    }

    #[test]
    fn test_set_cursor_invalid_line_is_rejected() {
        let mut display = test_display();
        display.set_cursor(2, 10).unwrap();
        display.interface.clear();

        let result = display.set_cursor(8, 0);
        assert!(matches!(
            result,
            Err(Error::InvalidCursor { line: 8, column: 0 })
        ));
        assert!(display.interface.sent.is_empty());
        assert_eq!(
            display.cursor(),
            Cursor {
                page: 2,
                column: 10
            }
        );
    }

    #[test]
    fn test_set_cursor_invalid_column_is_rejected() {
        let mut display = test_display();
        let result = display.set_cursor(0, 128);
        assert!(matches!(
            result,
            Err(Error::InvalidCursor {
                line: 0,
                column: 128
            })
        ));
        assert!(display.interface.sent.is_empty());
        assert_eq!(display.cursor(), Cursor::default());
    }

    #[test]
    fn test_next_line_advances_and_homes_column() {
        let mut display = test_display();
        display.set_cursor(2, 50).unwrap();
        display.interface.clear();
        display.next_line().unwrap();
        assert_eq!(display.interface.commands(), cursor_bytes(3, 0));
        assert_eq!(display.cursor(), Cursor { page: 3, column: 0 });
    }

    #[test]
    fn test_next_line_wraps_after_eight_calls() {
        let mut display = test_display();
        let mut pages = Vec::new();
        for _ in 0..8 {
            display.next_line().unwrap();
            pages.push(display.cursor().page);
        }
        assert_eq!(pages, [1, 2, 3, 4, 5, 6, 7, 0]);
        assert_eq!(display.cursor(), Cursor::default());
    }

    #[test]
    fn test_print_char_a() {
        let mut display = test_display();
        display.set_cursor(0, 0).unwrap();
        display.interface.clear();

        display.print_char(b'A').unwrap();
        assert!(display.interface.commands().is_empty());
        assert_eq!(
            display.interface.data(),
            [0x7C, 0x12, 0x11, 0x12, 0x7C, 0x00]
        );
        assert_eq!(display.cursor(), Cursor { page: 0, column: 6 });
    }

    #[test]
    fn test_print_newline_moves_without_drawing() {
        let mut display = test_display();
        display.set_cursor(4, 30).unwrap();
        display.interface.clear();

        display.print_char(b'\n').unwrap();
        assert!(display.interface.data().is_empty());
        assert_eq!(display.interface.commands(), cursor_bytes(5, 0));
        assert_eq!(display.cursor(), Cursor { page: 5, column: 0 });
    }

    #[test]
    fn test_print_char_fills_line_up_to_last_column() {
        let mut display = test_display();
        display.set_cursor(1, 121).unwrap();
        display.interface.clear();

        display.print_char(b'x').unwrap();
        assert!(display.interface.commands().is_empty());
        assert_eq!(
            display.cursor(),
            Cursor {
                page: 1,
                column: 127
            }
        );
    }

    #[test]
    fn test_print_char_wraps_when_glyph_does_not_fit() {
        let mut display = test_display();
        display.set_cursor(7, 122).unwrap();
        display.interface.clear();

        display.print_char(b'B').unwrap();
        assert_eq!(display.interface.commands(), cursor_bytes(0, 0));
        assert_eq!(display.interface.data().len(), 6);
        assert_eq!(display.cursor(), Cursor { page: 0, column: 6 });
    }

    #[test]
    fn test_print_char_rejects_unsupported_bytes() {
        let mut display = test_display();
        for c in [0x00, 0x1F, b'\r', 0x7F, 0x80, 0xFF] {
            let result = display.print_char(c);
            assert!(matches!(result, Err(Error::UnsupportedChar(b)) if b == c));
        }
        assert!(display.interface.sent.is_empty());
        assert_eq!(display.cursor(), Cursor::default());
    }

    #[test]
    fn test_print_str_with_newline() {
        let mut display = test_display();
        display.print_str("Hi\nA").unwrap();
        assert_eq!(display.interface.data().len(), 18);
        assert_eq!(display.cursor(), Cursor { page: 1, column: 6 });
    }

    #[test]
    fn test_print_str_wraps_long_lines() {
        let mut display = test_display();
        // 21 characters fit on a line, the 22nd wraps
        display.print_str("abcdefghijklmnopqrstuv").unwrap();
        assert_eq!(display.cursor(), Cursor { page: 1, column: 6 });
        assert_eq!(display.interface.data().len(), 22 * 6);
    }

    #[test]
    fn test_print_bytes_stops_at_nul() {
        let mut display = test_display();
        display.print_bytes(b"AB\0CD").unwrap();
        assert_eq!(display.interface.data().len(), 12);
        assert_eq!(
            display.cursor(),
            Cursor {
                page: 0,
                column: 12
            }
        );
    }

    #[test]
    fn test_print_str_aborts_on_unsupported_char() {
        let mut display = test_display();
        let result = display.print_str("A\tB");
        assert!(matches!(result, Err(Error::UnsupportedChar(b'\t'))));
        assert_eq!(display.interface.data().len(), 6);
        assert_eq!(display.cursor(), Cursor { page: 0, column: 6 });
    }

    #[test]
    fn test_fmt_write() {
        use core::fmt::Write;

        let mut display = test_display();
        write!(display, "T={}", 42).unwrap();
        assert_eq!(display.interface.data().len(), 4 * 6);
        assert_eq!(
            display.cursor(),
            Cursor {
                page: 0,
                column: 24
            }
        );
    }

    #[test]
    fn test_invert() {
        let mut display = test_display();
        display.invert(true).unwrap();
        display.invert(false).unwrap();
        assert_eq!(display.interface.commands(), [0xA7, 0xA6]);
        assert_eq!(display.cursor(), Cursor::default());
    }

    #[test]
    fn test_set_brightness_sends_operand_in_command_mode() {
        let mut display = test_display();
        display.set_brightness(0x3C).unwrap();
        assert_eq!(
            display.interface.sent,
            [(ByteKind::Command, 0x81), (ByteKind::Command, 0x3C)]
        );
    }

    #[test]
    fn test_scroll_horizontal_left() {
        let mut display = test_display();
        display
            .start_scroll_horizontal(ScrollDirection::Left, 0, 7)
            .unwrap();
        assert_eq!(
            display.interface.commands(),
            [0x27, 0x00, 0x00, 0x00, 0x07, 0x00, 0xFF, 0x2F]
        );
        assert!(display.interface.data().is_empty());
    }

    #[test]
    fn test_scroll_horizontal_right_forwards_pages_unchecked() {
        let mut display = test_display();
        display
            .start_scroll_horizontal(ScrollDirection::Right, 2, 9)
            .unwrap();
        assert_eq!(
            display.interface.commands(),
            [0x26, 0x00, 0x02, 0x00, 0x09, 0x00, 0xFF, 0x2F]
        );
    }

    #[test]
    fn test_scroll_diagonal() {
        let mut display = test_display();
        display
            .start_scroll_diagonal(DiagonalScroll {
                direction: ScrollDirection::Left,
                start_page: 1,
                end_page: 6,
                vertical_area: 64,
                row_offset: 3,
            })
            .unwrap();
        assert_eq!(
            display.interface.commands(),
            [0xA3, 0x00, 64, 0x2A, 0x00, 1, 0x00, 6, 3, 0x2F]
        );

        display.interface.clear();
        display
            .start_scroll_diagonal(DiagonalScroll {
                direction: ScrollDirection::Right,
                ..DiagonalScroll::default()
            })
            .unwrap();
        assert_eq!(display.interface.commands()[3], 0x29);
    }

    #[test]
    fn test_deactivate_scroll() {
        let mut display = test_display();
        display.deactivate_scroll().unwrap();
        assert_eq!(display.interface.sent, [(ByteKind::Command, 0x2E)]);
    }

    #[test]
    fn test_fill_writes_full_frame_without_moving_cursor() {
        let mut display = test_display();
        display.set_cursor(5, 17).unwrap();
        display.interface.clear();

        display.fill(0xFF).unwrap();
        let data = display.interface.data();
        assert_eq!(data.len(), 1024);
        assert!(data.iter().all(|b| *b == 0xFF));
        assert!(display.interface.commands().is_empty());
        assert_eq!(
            display.cursor(),
            Cursor {
                page: 5,
                column: 17
            }
        );
    }

    #[test]
    fn test_clear_homes_then_blanks() {
        let mut display = test_display();
        display.set_cursor(6, 99).unwrap();
        display.interface.clear();

        display.clear().unwrap();
        assert_eq!(display.interface.commands(), cursor_bytes(0, 0));
        let data = display.interface.data();
        assert_eq!(data.len(), 1024);
        assert!(data.iter().all(|b| *b == 0x00));
        // Homing happens before any pixel data
        assert_eq!(display.interface.sent[6], (ByteKind::Data, 0x00));
        assert_eq!(display.cursor(), Cursor::default());
    }

    #[test]
    fn test_print_logo_is_verbatim() {
        let mut display = test_display();
        display.print_logo().unwrap();
        assert_eq!(display.interface.commands(), cursor_bytes(0, 0));
        assert_eq!(display.interface.data(), LOGO);
        assert_eq!(display.cursor(), Cursor::default());
    }

    #[test]
    fn test_init_sequence_default() {
        let mut display = test_display();
        let mut delay = MockDelay::default();
        display.init(&mut delay).unwrap();

        assert_eq!(display.interface.resets, 1);
        assert_eq!(delay.total_ns, 200_000_000);

        let commands = display.interface.commands();
        assert_eq!(commands.len(), INIT_SEQUENCE_LEN + 6);
        assert_eq!(commands[..INIT_SEQUENCE_LEN], DEFAULT_INIT);
        assert_eq!(commands[INIT_SEQUENCE_LEN..], cursor_bytes(0, 0));
        assert_eq!(display.interface.data(), [0u8; 1024]);
        assert!(display.is_initialized());
        assert_eq!(display.cursor(), Cursor::default());
    }

    #[test]
    fn test_init_sequence_follows_config() {
        let config = Builder::new()
            .contrast(0xCF)
            .inverted(true)
            .segment_remap(false)
            .com_scan_reversed(false)
            .reset_delay_ms(5)
            .build()
            .unwrap();
        let mut display = Display::new(MockInterface::new(), config);
        let mut delay = MockDelay::default();
        display.init(&mut delay).unwrap();

        let commands = display.interface.commands();
        assert_eq!(commands[12], 0xA0);
        assert_eq!(commands[13], 0xC0);
        assert_eq!(commands[17], 0xCF);
        assert_eq!(commands[23], 0xA7);
        assert_eq!(delay.total_ns, 10_000_000);
    }

    #[test]
    fn test_init_resets_cursor() {
        let mut display = test_display();
        display.set_cursor(4, 40).unwrap();
        display.init(&mut MockDelay::default()).unwrap();
        assert_eq!(display.cursor(), Cursor::default());
    }

    #[test]
    fn test_init_aborts_on_first_failure() {
        let mut display = failing_display(3);
        let result = display.init(&mut MockDelay::default());
        assert!(matches!(result, Err(Error::Interface(_))));
        assert_eq!(display.interface.commands(), DEFAULT_INIT[..3]);
        assert!(!display.is_initialized());
    }

    #[test]
    fn test_failure_mid_glyph_stops_emission() {
        let mut display = failing_display(2);
        let result = display.print_char(b'A');
        assert!(matches!(result, Err(Error::Interface(_))));
        assert_eq!(display.interface.data(), [0x7C, 0x12]);
        // Shadow cursor tracks only the bytes that went out
        assert_eq!(display.cursor(), Cursor { page: 0, column: 2 });
    }

    #[test]
    fn test_failure_mid_fill_stops_emission() {
        let mut display = failing_display(500);
        let result = display.fill(0xAA);
        assert!(matches!(result, Err(Error::Interface(_))));
        assert_eq!(display.interface.sent.len(), 500);
    }

    #[test]
    fn test_failure_mid_cursor_keeps_previous_cursor() {
        let mut display = failing_display(4);
        let result = display.set_cursor(3, 3);
        assert!(matches!(result, Err(Error::Interface(_))));
        assert_eq!(display.interface.sent.len(), 4);
        assert_eq!(display.cursor(), Cursor::default());
    }

    #[test]
    fn test_failure_mid_scroll_stops_emission() {
        let mut display = failing_display(5);
        let result = display.start_scroll_horizontal(ScrollDirection::Left, 0, 7);
        assert!(matches!(result, Err(Error::Interface(_))));
        assert_eq!(display.interface.commands(), [0x27, 0x00, 0x00, 0x00, 0x07]);
    }

    #[test]
    fn test_failure_in_string_stops_at_failing_char() {
        // Byte 8 is the third column of the second character
        let mut display = failing_display(8);
        let result = display.print_str("ABC");
        assert!(matches!(result, Err(Error::Interface(_))));
        assert_eq!(display.interface.data().len(), 8);
    }

    #[test]
    fn test_deinit_is_idempotent() {
        let mut display = test_display();
        display.init(&mut MockDelay::default()).unwrap();
        display.deinit().unwrap();
        display.deinit().unwrap();
        assert!(!display.is_initialized());
    }

    #[test]
    fn test_release_returns_interface() {
        let mut display = test_display();
        display.invert(true).unwrap();
        let interface = display.release();
        assert_eq!(interface.commands(), [0xA7]);
    }
}
