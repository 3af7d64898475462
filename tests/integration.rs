//! Integration tests for the board shim against the simulated backend.

use pico_lcd_shim::app::{startup_blink, KeyMonitor};
use pico_lcd_shim::config::{KEY_A_PIN, KEY_B_PIN, LCD_BL_PIN};
use pico_lcd_shim::keys::keys_line;
use pico_lcd_shim::sim::{SimDelay, SimHardware};
use pico_lcd_shim::{Board, BoardConfig, Keys, Level};

#[test]
fn firmware_sequence_prints_key_lines() {
    // Same order as the firmware: init, blink, then poll.
    let mut board = Board::init(SimHardware::new(), BoardConfig::default())
        .expect("default wiring is valid");
    let mut delay = SimDelay::new();
    startup_blink(&mut board, &mut delay).expect("blink");
    assert_eq!(board.digital_read(LCD_BL_PIN), Ok(Level::High));

    let mut monitor = KeyMonitor::new();
    let mut lines: Vec<String> = Vec::new();

    let idle = monitor.poll(&mut board).expect("poll");
    lines.push(keys_line(idle.held).to_string());

    board.hardware_mut().press(KEY_A_PIN);
    board.hardware_mut().press(KEY_B_PIN);
    let both = monitor.poll(&mut board).expect("poll");
    assert_eq!(both.pressed, Keys::A | Keys::B);
    lines.push(keys_line(both.held).to_string());

    board.hardware_mut().release(KEY_A_PIN);
    let only_b = monitor.poll(&mut board).expect("poll");
    assert!(only_b.pressed.is_empty());
    lines.push(keys_line(only_b.held).to_string());

    assert_eq!(
        lines.concat(),
        "KEYS: 0x0000\nKEYS: 0x0003\nKEYS: 0x0002\n"
    );
}

#[test]
fn custom_wiring_is_honoured() {
    let config = BoardConfig {
        backlight: 20,
        key_a: 2,
        key_b: 3,
        ..BoardConfig::default()
    };
    let mut board = Board::init(SimHardware::new(), config).expect("valid wiring");
    assert_eq!(board.hardware().driven_level(20), Level::High);

    board.hardware_mut().press(3);
    assert_eq!(board.read_keys(), Ok(Keys::B));

    board.shutdown().expect("shutdown");
    assert_eq!(board.hardware().driven_level(20), Level::Low);
}

#[test]
fn released_backend_keeps_state() {
    let mut board = Board::init(SimHardware::new(), BoardConfig::default()).expect("init");
    board.write_command(0x29).expect("command");
    let hw = board.release();
    assert_eq!(hw.spi_bytes().collect::<Vec<_>>(), [0x29]);
    assert_eq!(hw.spi().map(|spi| spi.baudrate_hz), Some(2_000_000));
}
