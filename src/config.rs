//! Panel geometry and display configuration builder

pub use crate::error::BuilderError;

/// Number of segments (columns) per page
pub const SEGMENTS: u8 = 128;

/// Number of pages (8-pixel-high bands)
pub const PAGES: u8 = 8;

/// Highest valid page address
pub const MAX_PAGE: u8 = PAGES - 1;

/// Highest valid column address
pub const MAX_COLUMN: u8 = SEGMENTS - 1;

/// Glyph width in columns, without spacing
pub const GLYPH_WIDTH: usize = 5;

/// Columns consumed by one printed character (glyph plus one blank column)
pub const CHAR_WIDTH: u8 = GLYPH_WIDTH as u8 + 1;

/// Bytes in a full frame of display RAM
pub const FRAME_SIZE: usize = SEGMENTS as usize * PAGES as usize;

/// Default reset settling time in milliseconds
pub const DEFAULT_RESET_DELAY_MS: u32 = 100;

/// Smallest multiplex ratio operand the controller accepts (16 MUX)
pub const MIN_MULTIPLEX_RATIO: u8 = 0x0F;

/// Largest multiplex ratio operand the controller accepts (64 MUX)
pub const MAX_MULTIPLEX_RATIO: u8 = 0x3F;

/// Largest vertical display offset
pub const MAX_DISPLAY_OFFSET: u8 = 63;

/// Display configuration
///
/// This struct holds the operands written by the power-up sequence.
/// Use `Builder` to create a Config.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Clock divide ratio and oscillator frequency (command 0xD5)
    pub clock_divide: u8,
    /// Multiplex ratio (command 0xA8)
    pub multiplex_ratio: u8,
    /// Vertical display offset (command 0xD3)
    pub display_offset: u8,
    /// Contrast applied at power-up (command 0x81)
    pub contrast: u8,
    /// Pre-charge period (command 0xD9)
    pub precharge: u8,
    /// VCOMH deselect level (command 0xDB)
    pub vcomh_deselect: u8,
    /// Map column 127 to SEG0 (mirror horizontally)
    pub segment_remap: bool,
    /// Scan COM lines from the bottom (mirror vertically)
    pub com_scan_reversed: bool,
    /// Start in inverse video
    pub inverted: bool,
    /// Reset line settling time, applied after each edge
    pub reset_delay_ms: u32,
}

/// Builder for constructing display configuration
///
/// Every field has a default matching the common 128x64 SH1106 module, so
/// `Builder::new().build()` is enough for most panels.
///
/// # Example
///
/// ```
/// use sh1106::Builder;
///
/// let config = match Builder::new().contrast(0xCF).inverted(true).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.contrast, 0xCF);
/// ```
#[must_use]
pub struct Builder {
    clock_divide: u8,
    multiplex_ratio: u8,
    display_offset: u8,
    contrast: u8,
    precharge: u8,
    vcomh_deselect: u8,
    segment_remap: bool,
    com_scan_reversed: bool,
    inverted: bool,
    reset_delay_ms: u32,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            // Recommended oscillator setting
            clock_divide: 0x80,
            // 64 COM lines
            multiplex_ratio: MAX_MULTIPLEX_RATIO,
            display_offset: 0x00,
            contrast: 0x80,
            // Phase 1 of 15 DCLK, phase 2 of 1 DCLK
            precharge: 0xF1,
            // ~0.77 x Vcc
            vcomh_deselect: 0x20,
            segment_remap: true,
            com_scan_reversed: true,
            inverted: false,
            reset_delay_ms: DEFAULT_RESET_DELAY_MS,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set clock divide ratio / oscillator frequency operand
    pub fn clock_divide(mut self, value: u8) -> Self {
        self.clock_divide = value;
        self
    }

    /// Set multiplex ratio operand (0x0F..=0x3F)
    pub fn multiplex_ratio(mut self, value: u8) -> Self {
        self.multiplex_ratio = value;
        self
    }

    /// Set vertical display offset (0..=63)
    pub fn display_offset(mut self, value: u8) -> Self {
        self.display_offset = value;
        self
    }

    /// Set power-up contrast
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = value;
        self
    }

    /// Set pre-charge period operand
    pub fn precharge(mut self, value: u8) -> Self {
        self.precharge = value;
        self
    }

    /// Set VCOMH deselect level operand
    pub fn vcomh_deselect(mut self, value: u8) -> Self {
        self.vcomh_deselect = value;
        self
    }

    /// Mirror the panel horizontally
    pub fn segment_remap(mut self, value: bool) -> Self {
        self.segment_remap = value;
        self
    }

    /// Mirror the panel vertically
    pub fn com_scan_reversed(mut self, value: bool) -> Self {
        self.com_scan_reversed = value;
        self
    }

    /// Start in inverse video
    pub fn inverted(mut self, value: bool) -> Self {
        self.inverted = value;
        self
    }

    /// Set reset settling time in milliseconds
    pub fn reset_delay_ms(mut self, value: u32) -> Self {
        self.reset_delay_ms = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// - `BuilderError::InvalidMultiplexRatio` if the ratio is outside 0x0F..=0x3F
    /// - `BuilderError::InvalidDisplayOffset` if the offset is above 63
    /// - `BuilderError::InvalidResetDelay` if the reset delay is zero
    pub fn build(self) -> Result<Config, BuilderError> {
        if !(MIN_MULTIPLEX_RATIO..=MAX_MULTIPLEX_RATIO).contains(&self.multiplex_ratio) {
            return Err(BuilderError::InvalidMultiplexRatio(self.multiplex_ratio));
        }
        if self.display_offset > MAX_DISPLAY_OFFSET {
            return Err(BuilderError::InvalidDisplayOffset(self.display_offset));
        }
        if self.reset_delay_ms == 0 {
            return Err(BuilderError::InvalidResetDelay);
        }
        Ok(Config {
            clock_divide: self.clock_divide,
            multiplex_ratio: self.multiplex_ratio,
            display_offset: self.display_offset,
            contrast: self.contrast,
            precharge: self.precharge,
            vcomh_deselect: self.vcomh_deselect,
            segment_remap: self.segment_remap,
            com_scan_reversed: self.com_scan_reversed,
            inverted: self.inverted,
            reset_delay_ms: self.reset_delay_ms,
        })
    }
}
