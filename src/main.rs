//! Pico-LCD-1.3 bring-up firmware - RP2040 entry point.
//!
//! Initializes the LCD pins and SPI1, blinks the backlight once, then writes
//! the key mask line (`KEYS: 0xHHHH\n`) every 500 ms to the UART0 console on
//! GP0. defmt-rtt carries diagnostics only.

#![no_std]
#![no_main]

mod rp;

use defmt::{info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_rp::gpio::Flex;
use embassy_rp::spi::{self, Spi};
use embassy_rp::uart::{self, UartTx};
use embassy_time::{Delay, Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use pico_lcd_shim::app::{startup_blink, KeyMonitor};
use pico_lcd_shim::config::{BoardConfig, CONSOLE_BAUDRATE, POLL_INTERVAL_MS};
use pico_lcd_shim::keys::keys_line;
use pico_lcd_shim::Board;

use crate::rp::RpHardware;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    let config = BoardConfig::WAVESHARE_PICO_LCD_1_3;

    let mut uart_config = uart::Config::default();
    uart_config.baudrate = CONSOLE_BAUDRATE;
    let mut console = UartTx::new_blocking(p.UART0, p.PIN_0, uart_config);

    info!("pico-lcd-shim starting");

    // GP10/GP11 are SPI1 SCK/TX on the RP2040 pin mux.
    let mut spi_config = spi::Config::default();
    spi_config.frequency = config.spi_baudrate_hz;
    let spi = Spi::new_blocking_txonly(p.SPI1, p.PIN_10, p.PIN_11, spi_config);

    let hw = RpHardware::new(
        [
            (config.backlight, Flex::new(p.PIN_13)),
            (config.reset, Flex::new(p.PIN_12)),
            (config.dc, Flex::new(p.PIN_8)),
            (config.cs, Flex::new(p.PIN_9)),
            (config.key_a, Flex::new(p.PIN_15)),
            (config.key_b, Flex::new(p.PIN_17)),
        ],
        spi,
        (config.sclk, config.mosi),
    );

    let mut board = unwrap!(Board::init(hw, config));
    let mut delay = Delay;

    unwrap!(board.reset_panel(&mut delay));
    unwrap!(startup_blink(&mut board, &mut delay));

    let mut monitor = KeyMonitor::new();
    loop {
        match monitor.poll(&mut board) {
            Ok(sample) => {
                let line = keys_line(sample.held);
                if let Err(e) = console.blocking_write(line.as_bytes()) {
                    warn!("Console write failed: {}", e);
                }

                for name in sample.pressed.names() {
                    info!("{=str} pressed", name);
                }
            }
            Err(e) => warn!("Key poll failed: {}", e),
        }

        Timer::after(Duration::from_millis(POLL_INTERVAL_MS)).await;
    }
}
