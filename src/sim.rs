//! Simulated [`Hardware`] backend.
//!
//! Models the 30 RP2040 GPIOs and one SPI bus well enough to test the board
//! logic on the host:
//!
//! - an output pin reads back the level it drives (loopback),
//! - an input pin reads the externally applied level, or its bias when
//!   nothing drives it (pull-up: high, otherwise low),
//! - using a pin that was never configured is an error,
//! - every configuration change, pin write and SPI transfer is appended to an
//!   event log so tests can assert ordering; transferred bytes go to a
//!   separate capture buffer,
//! - a full log or capture buffer fails the operation with
//!   [`Error::BufferFull`] before anything changes; nothing is dropped.

use embedded_hal::delay::DelayNs;
use heapless::Vec;

use crate::config::{MAX_GPIO, MAX_SPI_BAUDRATE_HZ};
use crate::error::Error;
use crate::hal::{Hardware, Level, PinId, Pull};

/// Number of simulated GPIOs.
pub const SIM_PIN_COUNT: usize = MAX_GPIO as usize + 1;

/// Capacity of the event log.
pub const SIM_EVENT_CAPACITY: usize = 256;

/// Capacity of the SPI byte capture.
pub const SIM_SPI_CAPACITY: usize = 1024;

/// Function currently selected for a simulated pin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinMode {
    #[default]
    Unconfigured,
    Output,
    Input(Pull),
    Spi,
}

/// One recorded hardware transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimEvent {
    SetOutput(PinId),
    SetInput(PinId, Pull),
    EnableSpi { baudrate_hz: u32, sclk: PinId, mosi: PinId },
    Write(PinId, Level),
    /// One `spi_write` of this many bytes.
    SpiWrite(usize),
}

/// Active SPI setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpiSetup {
    pub baudrate_hz: u32,
    pub sclk: PinId,
    pub mosi: PinId,
}

#[derive(Clone, Copy, Debug, Default)]
struct SimPin {
    mode: PinMode,
    driven: Level,
    external: Option<Level>,
    input_configs: u32,
}

/// In-memory GPIO bank and SPI bus.
#[derive(Debug)]
pub struct SimHardware {
    pins: [SimPin; SIM_PIN_COUNT],
    spi: Option<SpiSetup>,
    spi_fails: bool,
    events: Vec<SimEvent, SIM_EVENT_CAPACITY>,
    spi_bytes: Vec<u8, SIM_SPI_CAPACITY>,
}

impl Default for SimHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl SimHardware {
    /// All pins unconfigured and undriven, SPI off.
    pub fn new() -> Self {
        Self {
            pins: [SimPin::default(); SIM_PIN_COUNT],
            spi: None,
            spi_fails: false,
            events: Vec::new(),
            spi_bytes: Vec::new(),
        }
    }

    fn pin(&self, pin: PinId) -> Result<&SimPin, Error> {
        self.pins.get(pin as usize).ok_or(Error::InvalidPin(pin))
    }

    fn pin_mut(&mut self, pin: PinId) -> Result<&mut SimPin, Error> {
        self.pins.get_mut(pin as usize).ok_or(Error::InvalidPin(pin))
    }

    fn ensure_event_room(&self) -> Result<(), Error> {
        if self.events.is_full() {
            return Err(Error::BufferFull);
        }
        Ok(())
    }

    fn record(&mut self, event: SimEvent) -> Result<(), Error> {
        self.events.push(event).map_err(|_| Error::BufferFull)
    }

    // Stimulus

    /// Drive `pin` from outside the chip (a button, a jumper...).
    pub fn set_external(&mut self, pin: PinId, level: Option<Level>) {
        if let Some(p) = self.pins.get_mut(pin as usize) {
            p.external = level;
        }
    }

    /// Hold an active-low key down.
    pub fn press(&mut self, pin: PinId) {
        self.set_external(pin, Some(Level::Low));
    }

    /// Let an active-low key go; the pull-up takes the line high.
    pub fn release(&mut self, pin: PinId) {
        self.set_external(pin, None);
    }

    /// Make every following SPI write fail.
    pub fn fail_spi(&mut self, fail: bool) {
        self.spi_fails = fail;
    }

    // Inspection

    pub fn mode(&self, pin: PinId) -> PinMode {
        self.pin(pin).map(|p| p.mode).unwrap_or_default()
    }

    /// Level the chip is driving on `pin`, regardless of its mode.
    pub fn driven_level(&self, pin: PinId) -> Level {
        self.pin(pin).map(|p| p.driven).unwrap_or_default()
    }

    /// How many times `pin` was configured as an input.
    pub fn input_config_count(&self, pin: PinId) -> u32 {
        self.pin(pin).map(|p| p.input_configs).unwrap_or(0)
    }

    pub fn spi(&self) -> Option<SpiSetup> {
        self.spi
    }

    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Forget the event log and the SPI capture.
    pub fn clear_events(&mut self) {
        self.events.clear();
        self.spi_bytes.clear();
    }

    /// Bytes written to the SPI bus, in order.
    pub fn spi_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.spi_bytes.iter().copied()
    }
}

impl Hardware for SimHardware {
    fn set_output(&mut self, pin: PinId) -> Result<(), Error> {
        self.pin(pin)?;
        self.record(SimEvent::SetOutput(pin))?;
        self.pin_mut(pin)?.mode = PinMode::Output;
        Ok(())
    }

    fn set_input(&mut self, pin: PinId, pull: Pull) -> Result<(), Error> {
        self.pin(pin)?;
        self.record(SimEvent::SetInput(pin, pull))?;
        let p = self.pin_mut(pin)?;
        p.mode = PinMode::Input(pull);
        p.input_configs += 1;
        Ok(())
    }

    fn enable_spi(&mut self, baudrate_hz: u32, sclk: PinId, mosi: PinId) -> Result<(), Error> {
        if baudrate_hz == 0 || baudrate_hz > MAX_SPI_BAUDRATE_HZ {
            return Err(Error::InvalidBaudrate(baudrate_hz));
        }
        self.pin(sclk)?;
        self.pin(mosi)?;
        self.ensure_event_room()?;

        self.pin_mut(sclk)?.mode = PinMode::Spi;
        self.pin_mut(mosi)?.mode = PinMode::Spi;
        self.spi = Some(SpiSetup {
            baudrate_hz,
            sclk,
            mosi,
        });
        self.record(SimEvent::EnableSpi {
            baudrate_hz,
            sclk,
            mosi,
        })
    }

    fn write_pin(&mut self, pin: PinId, level: Level) -> Result<(), Error> {
        if self.pin(pin)?.mode == PinMode::Unconfigured {
            return Err(Error::PinNotConfigured(pin));
        }
        self.record(SimEvent::Write(pin, level))?;
        self.pin_mut(pin)?.driven = level;
        Ok(())
    }

    fn read_pin(&mut self, pin: PinId) -> Result<Level, Error> {
        let p = self.pin(pin)?;
        match p.mode {
            PinMode::Unconfigured => Err(Error::PinNotConfigured(pin)),
            PinMode::Output | PinMode::Spi => Ok(p.driven),
            PinMode::Input(pull) => Ok(p.external.unwrap_or(match pull {
                Pull::Up => Level::High,
                Pull::Down | Pull::None => Level::Low,
            })),
        }
    }

    fn spi_write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        if self.spi.is_none() {
            return Err(Error::SpiNotConfigured);
        }
        if self.spi_fails {
            return Err(Error::Spi);
        }
        self.ensure_event_room()?;
        self.spi_bytes
            .extend_from_slice(bytes)
            .map_err(|_| Error::BufferFull)?;
        self.record(SimEvent::SpiWrite(bytes.len()))
    }
}

/// Delay provider that only accumulates the requested time.
#[derive(Debug, Default)]
pub struct SimDelay {
    elapsed_ns: u64,
}

impl SimDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns / 1_000_000
    }

    pub fn elapsed_ns(&self) -> u64 {
        self.elapsed_ns
    }
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
    }
}
