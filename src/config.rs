//! Board wiring and compile-time configuration.
//!
//! All pin assignments and timing parameters live here so they can be tuned
//! in one place. The wiring is gathered into an immutable [`BoardConfig`]
//! that is handed to [`Board::init`](crate::board::Board::init).

use crate::error::Error;
use crate::hal::PinId;

// GPIO pin assignments (Waveshare Pico-LCD-1.3 seated on the Pico header)
//
//   LCD backlight  → GP13
//   LCD reset      → GP12
//   LCD DC         → GP8
//   LCD CS         → GP9
//   SPI1 SCK       → GP10
//   SPI1 TX (MOSI) → GP11
//   KEY A          → GP15
//   KEY B          → GP17

pub const LCD_BL_PIN: PinId = 13;
pub const LCD_RESET_PIN: PinId = 12;
pub const LCD_DC_PIN: PinId = 8;
pub const LCD_CS_PIN: PinId = 9;
pub const LCD_SCLK_PIN: PinId = 10;
pub const LCD_MOSI_PIN: PinId = 11;

pub const KEY_A_PIN: PinId = 15;
pub const KEY_B_PIN: PinId = 17;

// Console (the Pico SDK's default stdio UART: UART0 TX on GP0, 115200 8N1)

pub const CONSOLE_TX_PIN: PinId = 0;
pub const CONSOLE_BAUDRATE: u32 = 115_200;

/// Highest user GPIO number on the RP2040.
pub const MAX_GPIO: PinId = 29;

// SPI

/// LCD SPI clock (Hz). 2 MHz is a safe default for bring-up.
pub const SPI_BAUDRATE_HZ: u32 = 2_000_000;

/// Upper bound for the SPI clock: clk_peri (125 MHz) / 2.
pub const MAX_SPI_BAUDRATE_HZ: u32 = 62_500_000;

// Timing

/// Delay between two key polls in the main loop (ms).
pub const POLL_INTERVAL_MS: u64 = 500;

/// Backlight on/off time of the startup blink (ms).
pub const BLINK_INTERVAL_MS: u32 = 500;

/// Length of each phase of the panel hardware reset pulse (ms).
pub const PANEL_RESET_PULSE_MS: u32 = 50;

/// Immutable pin wiring and bus clock for one board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    /// Backlight enable (active high).
    pub backlight: PinId,
    /// Panel reset (active low).
    pub reset: PinId,
    /// Data/command select (low = command).
    pub dc: PinId,
    /// Chip select (active low).
    pub cs: PinId,
    /// SPI clock.
    pub sclk: PinId,
    /// SPI data out.
    pub mosi: PinId,
    /// SPI clock rate (Hz).
    pub spi_baudrate_hz: u32,
    /// Key A input (active low).
    pub key_a: PinId,
    /// Key B input (active low).
    pub key_b: PinId,
}

impl BoardConfig {
    /// Waveshare Pico-LCD-1.3 default wiring.
    pub const WAVESHARE_PICO_LCD_1_3: Self = Self {
        backlight: LCD_BL_PIN,
        reset: LCD_RESET_PIN,
        dc: LCD_DC_PIN,
        cs: LCD_CS_PIN,
        sclk: LCD_SCLK_PIN,
        mosi: LCD_MOSI_PIN,
        spi_baudrate_hz: SPI_BAUDRATE_HZ,
        key_a: KEY_A_PIN,
        key_b: KEY_B_PIN,
    };

    /// The four plain digital outputs, in initialization order.
    pub const fn output_pins(&self) -> [PinId; 4] {
        [self.backlight, self.reset, self.dc, self.cs]
    }

    /// Every pin the board claims.
    pub const fn all_pins(&self) -> [PinId; 8] {
        [
            self.backlight,
            self.reset,
            self.dc,
            self.cs,
            self.sclk,
            self.mosi,
            self.key_a,
            self.key_b,
        ]
    }

    /// Check pin ranges, pin uniqueness and the SPI clock.
    pub fn validate(&self) -> Result<(), Error> {
        let pins = self.all_pins();

        for (i, &pin) in pins.iter().enumerate() {
            if pin > MAX_GPIO {
                return Err(Error::InvalidPin(pin));
            }
            if pins[..i].contains(&pin) {
                return Err(Error::DuplicatePin(pin));
            }
        }

        if self.spi_baudrate_hz == 0 || self.spi_baudrate_hz > MAX_SPI_BAUDRATE_HZ {
            return Err(Error::InvalidBaudrate(self.spi_baudrate_hz));
        }

        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::WAVESHARE_PICO_LCD_1_3
    }
}
