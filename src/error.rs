//! Unified error type for the board shim.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (behind the `defmt` feature) for efficient
//! on-target logging.

use crate::hal::PinId;

/// Top-level error type used across the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // GPIO
    /// The pin number is outside the MCU range or not owned by the backend.
    InvalidPin(PinId),

    /// The pin was used before being configured as input or output.
    PinNotConfigured(PinId),

    // Configuration
    /// One GPIO was assigned to two roles.
    DuplicatePin(PinId),

    /// SPI clock is zero or above what the peripheral can produce.
    InvalidBaudrate(u32),

    // SPI
    /// A write was attempted before the bus was configured.
    SpiNotConfigured,

    /// The backend cannot route the SPI function to these pins.
    SpiPinMismatch {
        /// Requested clock pin.
        sclk: PinId,
        /// Requested data-out pin.
        mosi: PinId,
    },

    /// The SPI peripheral reported a transfer failure.
    Spi,

    // Capture
    /// A fixed-capacity buffer cannot take the data.
    BufferFull,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidPin(pin) => write!(f, "invalid pin GP{pin}"),
            Error::PinNotConfigured(pin) => write!(f, "pin GP{pin} is not configured"),
            Error::DuplicatePin(pin) => write!(f, "pin GP{pin} is assigned twice"),
            Error::InvalidBaudrate(hz) => write!(f, "invalid SPI clock {hz} Hz"),
            Error::SpiNotConfigured => write!(f, "SPI bus is not configured"),
            Error::SpiPinMismatch { sclk, mosi } => {
                write!(f, "SPI cannot be routed to SCK=GP{sclk} MOSI=GP{mosi}")
            }
            Error::Spi => write!(f, "SPI transfer failed"),
            Error::BufferFull => write!(f, "buffer full"),
        }
    }
}

impl core::error::Error for Error {}
