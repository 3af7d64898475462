//! RP2040 [`Hardware`] backend on top of `embassy-rp`.
//!
//! The GPIOs the board uses are handed over as [`Flex`] pins tagged with their
//! GPIO number, so they can be switched between input and output at run time.
//! SPI1 is created by the caller with SCK/MOSI already routed; `enable_spi`
//! only checks the routing and applies the clock.

use defmt::debug;
use embassy_rp::gpio::{self, Flex};
use embassy_rp::peripherals::SPI1;
use embassy_rp::spi::{Blocking, Spi};
use embedded_hal::spi::SpiBus;

use pico_lcd_shim::config::MAX_SPI_BAUDRATE_HZ;
use pico_lcd_shim::{Error, Hardware, Level, PinId, Pull};

/// Number of plain GPIOs the board drives or samples:
/// backlight, reset, DC, CS, key A, key B.
pub const BANK_SIZE: usize = 6;

/// A GPIO number plus the pin it names.
pub type BankPin = (PinId, Flex<'static>);

pub struct RpHardware {
    pins: [BankPin; BANK_SIZE],
    configured: [bool; BANK_SIZE],
    spi: Spi<'static, SPI1, Blocking>,
    spi_pins: (PinId, PinId),
    spi_enabled: bool,
}

impl RpHardware {
    /// `spi_pins` is the `(sclk, mosi)` pair the SPI peripheral was built with.
    pub fn new(
        pins: [BankPin; BANK_SIZE],
        spi: Spi<'static, SPI1, Blocking>,
        spi_pins: (PinId, PinId),
    ) -> Self {
        Self {
            pins,
            configured: [false; BANK_SIZE],
            spi,
            spi_pins,
            spi_enabled: false,
        }
    }

    fn index(&self, pin: PinId) -> Result<usize, Error> {
        self.pins
            .iter()
            .position(|(id, _)| *id == pin)
            .ok_or(Error::InvalidPin(pin))
    }

    fn configured_pin(&mut self, pin: PinId) -> Result<&mut Flex<'static>, Error> {
        let idx = self.index(pin)?;
        if !self.configured[idx] {
            return Err(Error::PinNotConfigured(pin));
        }
        Ok(&mut self.pins[idx].1)
    }
}

fn to_gpio_level(level: Level) -> gpio::Level {
    match level {
        Level::Low => gpio::Level::Low,
        Level::High => gpio::Level::High,
    }
}

fn to_gpio_pull(pull: Pull) -> gpio::Pull {
    match pull {
        Pull::None => gpio::Pull::None,
        Pull::Up => gpio::Pull::Up,
        Pull::Down => gpio::Pull::Down,
    }
}

impl Hardware for RpHardware {
    fn set_output(&mut self, pin: PinId) -> Result<(), Error> {
        let idx = self.index(pin)?;
        self.pins[idx].1.set_as_output();
        self.configured[idx] = true;
        Ok(())
    }

    fn set_input(&mut self, pin: PinId, pull: Pull) -> Result<(), Error> {
        let idx = self.index(pin)?;
        let flex = &mut self.pins[idx].1;
        flex.set_pull(to_gpio_pull(pull));
        flex.set_as_input();
        self.configured[idx] = true;
        Ok(())
    }

    fn enable_spi(&mut self, baudrate_hz: u32, sclk: PinId, mosi: PinId) -> Result<(), Error> {
        if baudrate_hz == 0 || baudrate_hz > MAX_SPI_BAUDRATE_HZ {
            return Err(Error::InvalidBaudrate(baudrate_hz));
        }
        if (sclk, mosi) != self.spi_pins {
            return Err(Error::SpiPinMismatch { sclk, mosi });
        }

        self.spi.set_frequency(baudrate_hz);
        self.spi_enabled = true;
        debug!("RP2040: SPI1 at {=u32} Hz", baudrate_hz);
        Ok(())
    }

    fn write_pin(&mut self, pin: PinId, level: Level) -> Result<(), Error> {
        self.configured_pin(pin)?.set_level(to_gpio_level(level));
        Ok(())
    }

    fn read_pin(&mut self, pin: PinId) -> Result<Level, Error> {
        Ok(Level::from(self.configured_pin(pin)?.is_high()))
    }

    fn spi_write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        if !self.spi_enabled {
            return Err(Error::SpiNotConfigured);
        }
        SpiBus::write(&mut self.spi, bytes).map_err(|_| Error::Spi)?;
        SpiBus::flush(&mut self.spi).map_err(|_| Error::Spi)
    }
}
