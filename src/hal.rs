//! Hardware access capability.
//!
//! [`Hardware`] is the seam between the board logic and the silicon. The
//! firmware implements it on top of `embassy-rp` (see `src/rp.rs`); tests
//! implement it with [`SimHardware`](crate::sim::SimHardware).
//!
//! Pins are addressed by GPIO number rather than by typed pin objects because
//! the board logic reconfigures pins at run time (the key pins are switched to
//! pulled-up inputs on every poll).

use crate::error::Error;

/// A GPIO number (`GPn`).
pub type PinId = u8;

/// Logic level of a pin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    #[default]
    Low,
    High,
}

impl Level {
    /// Numeric value of the level: 0 or 1.
    pub const fn bit(self) -> u8 {
        match self {
            Level::Low => 0,
            Level::High => 1,
        }
    }

    pub const fn is_low(self) -> bool {
        matches!(self, Level::Low)
    }

    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level.is_high()
    }
}

/// Input bias resistor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    #[default]
    None,
    Up,
    Down,
}

/// Register-level access to GPIO and the LCD SPI bus.
///
/// Every call is a blocking, one-shot hardware transaction.
pub trait Hardware {
    /// Configure `pin` as a push-pull digital output.
    fn set_output(&mut self, pin: PinId) -> Result<(), Error>;

    /// Configure `pin` as a digital input with the given bias.
    fn set_input(&mut self, pin: PinId, pull: Pull) -> Result<(), Error>;

    /// Bring up the SPI bus at `baudrate_hz` and bind `sclk` / `mosi` to it.
    fn enable_spi(&mut self, baudrate_hz: u32, sclk: PinId, mosi: PinId) -> Result<(), Error>;

    /// Drive an output pin.
    fn write_pin(&mut self, pin: PinId, level: Level) -> Result<(), Error>;

    /// Sample a pin.
    fn read_pin(&mut self, pin: PinId) -> Result<Level, Error>;

    /// Transmit `bytes`, returning once the last bit has left the shifter.
    fn spi_write(&mut self, bytes: &[u8]) -> Result<(), Error>;
}

impl<H: Hardware + ?Sized> Hardware for &mut H {
    fn set_output(&mut self, pin: PinId) -> Result<(), Error> {
        (**self).set_output(pin)
    }

    fn set_input(&mut self, pin: PinId, pull: Pull) -> Result<(), Error> {
        (**self).set_input(pin, pull)
    }

    fn enable_spi(&mut self, baudrate_hz: u32, sclk: PinId, mosi: PinId) -> Result<(), Error> {
        (**self).enable_spi(baudrate_hz, sclk, mosi)
    }

    fn write_pin(&mut self, pin: PinId, level: Level) -> Result<(), Error> {
        (**self).write_pin(pin, level)
    }

    fn read_pin(&mut self, pin: PinId) -> Result<Level, Error> {
        (**self).read_pin(pin)
    }

    fn spi_write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        (**self).spi_write(bytes)
    }
}
