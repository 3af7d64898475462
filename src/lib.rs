//! Board-support shim for the Waveshare Pico-LCD-1.3 (ST7789, SPI).
//!
//! This library holds everything that does not touch silicon directly so it
//! can be tested on the host; the RP2040 backend lives with the firmware
//! binary in `main.rs` / `rp.rs`.
//!
//! Usage: `cargo test` (host) or
//! `cargo run --release --features embedded --target thumbv6m-none-eabi`.
//!
//! ## Layout
//!
//! - [`hal`]    - the [`Hardware`](hal::Hardware) capability trait, pin levels
//! - [`board`]  - bring-up, teardown, digital I/O, SPI writes, key poll
//! - [`keys`]   - key bitmask and the `KEYS: 0xHHHH` console line
//! - [`app`]    - startup blink and press detection used by the firmware
//! - [`config`] - pin wiring and timing constants
//! - [`sim`]    - simulated backend for tests

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod app;
pub mod board;
pub mod config;
pub mod error;
pub mod hal;
pub mod keys;
pub mod sim;

pub use board::Board;
pub use config::BoardConfig;
pub use error::Error;
pub use hal::{Hardware, Level, PinId, Pull};
pub use keys::Keys;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
