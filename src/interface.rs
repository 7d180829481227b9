//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the SH1106 controller over 4-wire SPI.
//!
//! ## Hardware Requirements
//!
//! The SH1106 requires:
//! - SPI bus (MOSI + SCK, chip select handled by the [`SpiDevice`])
//! - 2 GPIO pins:
//!   - **DC**: Data/Command select (output, low=command, high=data)
//!   - **RST**: Reset (output, active low)
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use sh1106::{ByteKind, DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! # let mut delay = MockDelay;
//! // Create interface with SPI and GPIO pins
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//!
//! // Pulse the reset line
//! let _ = interface.reset(&mut delay, 100);
//!
//! // Display on
//! let _ = interface.send(ByteKind::Command, 0xAF);
//!
//! // One column of pixels
//! let _ = interface.send(ByteKind::Data, 0xFF);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// How the controller interprets a byte, selected by the DC line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteKind {
    /// Command or command operand (DC low)
    Command,
    /// Display RAM content written at the current address (DC high)
    Data,
}

/// Trait for the byte channel to the SH1106 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// transport that can clock out single tagged bytes.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. Custom implementations
/// must report every failed byte through [`DisplayInterface::Error`]; the driver
/// never retries.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send one byte to the controller
    ///
    /// The implementation must select the DC level for `kind`
    /// (low for [`ByteKind::Command`], high for [`ByteKind::Data`]) before
    /// clocking out `byte`.
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send(&mut self, kind: ByteKind, byte: u8) -> InterfaceResult<(), Self::Error>;

    /// Send a command (or command operand) byte
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.send(ByteKind::Command, command)
    }

    /// Send a display RAM byte
    fn send_data(&mut self, data: u8) -> InterfaceResult<(), Self::Error> {
        self.send(ByteKind::Data, data)
    }

    /// Perform hardware reset
    ///
    /// The implementation must:
    /// 1. Set RST pin low
    /// 2. Wait `settle_ms`
    /// 3. Set RST pin high
    /// 4. Wait `settle_ms`
    ///
    /// The waits are blocking and cannot be cancelled.
    fn reset<D: DelayNs>(
        &mut self,
        delay: &mut D,
        settle_ms: u32,
    ) -> InterfaceResult<(), Self::Error>;

    /// Release the control lines
    ///
    /// Returns DC and RST to their idle level. Calling this more than once
    /// must succeed without touching the hardware again.
    fn release(&mut self) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Hardware interface implementation for SH1106
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI and GPIO traits.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
///
/// ## Example
///
/// ```rust,no_run
/// use sh1106::{Builder, Display, Interface};
/// # use core::convert::Infallible;
/// # use embedded_hal::digital::OutputPin;
/// # use embedded_hal::spi::{Operation, SpiDevice};
/// # struct MockSpi;
/// # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
/// # impl SpiDevice for MockSpi {
/// #     fn transaction(
/// #         &mut self,
/// #         _operations: &mut [Operation<'_, u8>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// # struct MockPin;
/// # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
/// # impl OutputPin for MockPin {
/// #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// let interface = Interface::new(
///     MockSpi,  // SpiDevice
///     MockPin,  // DC
///     MockPin,  // RST
/// );
///
/// # let config = match Builder::new().build() {
/// #     Ok(config) => config,
/// #     Err(_) => return,
/// # };
/// let _display = Display::new(interface, config);
/// ```
pub struct Interface<SPI, DC, RST> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
    /// Set once the control lines have been returned to idle
    released: bool,
}

impl<SPI, DC, RST> Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        Self {
            spi,
            dc,
            rst,
            released: false,
        }
    }

    /// Whether [`DisplayInterface::release`] has run since the last reset
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Consume the interface and hand back the SPI device and pins
    pub fn release_parts(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }
}

impl<SPI, DC, RST, PinErr> DisplayInterface for Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send(&mut self, kind: ByteKind, byte: u8) -> InterfaceResult<(), Self::Error> {
        match kind {
            ByteKind::Command => self.dc.set_low(),
            ByteKind::Data => self.dc.set_high(),
        }
        .map_err(InterfaceError::Pin)?;
        self.spi.write(&[byte]).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn reset<D: DelayNs>(
        &mut self,
        delay: &mut D,
        settle_ms: u32,
    ) -> InterfaceResult<(), Self::Error> {
        // Reset sequence: LOW -> wait -> HIGH -> wait
        self.rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(settle_ms);
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(settle_ms);
        self.released = false;
        Ok(())
    }

    fn release(&mut self) -> InterfaceResult<(), Self::Error> {
        if self.released {
            return Ok(());
        }
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        self.released = true;
        Ok(())
    }
}
