//! Board bring-up and I/O primitives for the Pico-LCD-1.3.
//!
//! [`Board`] owns a [`Hardware`] backend plus the immutable
//! [`BoardConfig`]. Every operation is a one-shot blocking transaction; the
//! exclusive `&mut self` receiver is the only synchronization there is.

use embedded_hal::delay::DelayNs;

use crate::config::{BoardConfig, PANEL_RESET_PULSE_MS};
use crate::error::Error;
use crate::hal::{Hardware, Level, PinId, Pull};
use crate::keys::Keys;

/// An initialized LCD board.
pub struct Board<H> {
    hw: H,
    config: BoardConfig,
}

impl<H: Hardware> Board<H> {
    /// Configure the LCD control pins and the SPI bus, then switch the
    /// backlight on.
    ///
    /// Backlight, reset, DC and CS become digital outputs; SCK and MOSI are
    /// bound to the SPI function at `config.spi_baudrate_hz`. On success the
    /// backlight pin is left high.
    pub fn init(mut hw: H, config: BoardConfig) -> Result<Self, Error> {
        config.validate()?;

        for pin in config.output_pins() {
            hw.set_output(pin)?;
        }

        hw.enable_spi(config.spi_baudrate_hz, config.sclk, config.mosi)?;
        debug!(
            "Board: SPI at {} Hz (SCK=GP{}, MOSI=GP{})",
            config.spi_baudrate_hz,
            config.sclk,
            config.mosi
        );

        hw.write_pin(config.backlight, Level::High)?;
        info!("Board: initialized, backlight on");

        Ok(Self { hw, config })
    }

    /// Switch the backlight off. Nothing else is released.
    pub fn shutdown(&mut self) -> Result<(), Error> {
        self.hw.write_pin(self.config.backlight, Level::Low)?;
        info!("Board: backlight off");
        Ok(())
    }

    /// Hand the backend back to the caller.
    pub fn release(self) -> H {
        self.hw
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn hardware(&self) -> &H {
        &self.hw
    }

    pub fn hardware_mut(&mut self) -> &mut H {
        &mut self.hw
    }

    // Digital I/O

    /// Set the output level of `pin`.
    pub fn digital_write(&mut self, pin: PinId, level: impl Into<Level>) -> Result<(), Error> {
        self.hw.write_pin(pin, level.into())
    }

    /// Current logic level of `pin`.
    pub fn digital_read(&mut self, pin: PinId) -> Result<Level, Error> {
        self.hw.read_pin(pin)
    }

    pub fn set_backlight(&mut self, on: bool) -> Result<(), Error> {
        self.hw.write_pin(self.config.backlight, Level::from(on))
    }

    // SPI

    /// Transmit one byte, blocking until it has been shifted out.
    pub fn spi_write_byte(&mut self, byte: u8) -> Result<(), Error> {
        self.hw.spi_write(&[byte])
    }

    /// Transmit `bytes`, blocking until the last one has been shifted out.
    pub fn spi_write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        if bytes.is_empty() {
            return Ok(());
        }
        self.hw.spi_write(bytes)
    }

    /// Send one command byte: CS low, DC low, write, CS high.
    pub fn write_command(&mut self, command: u8) -> Result<(), Error> {
        self.framed(Level::Low, &[command])
    }

    /// Send parameter / pixel bytes: CS low, DC high, write, CS high.
    pub fn write_data(&mut self, data: &[u8]) -> Result<(), Error> {
        self.framed(Level::High, data)
    }

    fn framed(&mut self, dc: Level, bytes: &[u8]) -> Result<(), Error> {
        self.hw.write_pin(self.config.cs, Level::Low)?;
        self.hw.write_pin(self.config.dc, dc)?;
        let written = self.spi_write(bytes);
        // Release CS even when the transfer failed.
        self.hw.write_pin(self.config.cs, Level::High)?;
        if let Err(e) = written {
            warn!("Board: SPI transfer failed ({}), CS released", e);
        }
        written
    }

    /// Pulse the panel reset line: low, wait, high, wait.
    pub fn reset_panel(&mut self, delay: &mut impl DelayNs) -> Result<(), Error> {
        self.hw.write_pin(self.config.reset, Level::Low)?;
        delay.delay_ms(PANEL_RESET_PULSE_MS);
        self.hw.write_pin(self.config.reset, Level::High)?;
        delay.delay_ms(PANEL_RESET_PULSE_MS);
        debug!("Board: panel reset");
        Ok(())
    }

    // Keys

    /// Poll the two wired keys.
    ///
    /// Both key pins are reconfigured as pulled-up inputs on every call, then
    /// sampled; a pin reading low sets its bit. Only [`Keys::A`] and
    /// [`Keys::B`] can appear in the result.
    pub fn read_keys(&mut self) -> Result<Keys, Error> {
        let mut keys = Keys::empty();

        for (pin, key) in [(self.config.key_a, Keys::A), (self.config.key_b, Keys::B)] {
            self.hw.set_input(pin, Pull::Up)?;
            if self.hw.read_pin(pin)?.is_low() {
                keys.insert(key);
            }
        }

        trace!("Board: keys {=u16:#x}", keys.bits());
        Ok(keys)
    }
}
