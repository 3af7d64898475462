//! Demo application logic shared by the firmware and the tests.

use embedded_hal::delay::DelayNs;

use crate::board::Board;
use crate::config::BLINK_INTERVAL_MS;
use crate::error::Error;
use crate::hal::Hardware;
use crate::keys::Keys;

/// Visible sign of life after bring-up: backlight on, off, on again.
pub fn startup_blink<H: Hardware>(
    board: &mut Board<H>,
    delay: &mut impl DelayNs,
) -> Result<(), Error> {
    board.set_backlight(true)?;
    delay.delay_ms(BLINK_INTERVAL_MS);
    board.set_backlight(false)?;
    delay.delay_ms(BLINK_INTERVAL_MS);
    board.set_backlight(true)
}

/// Remembers the previous key mask to report fresh presses.
///
/// A key counts as pressed when it is down now and was up at the previous
/// poll. Bounce is not filtered.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyMonitor {
    last: Keys,
}

/// Result of one [`KeyMonitor::poll`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeySample {
    /// Keys down right now.
    pub held: Keys,
    /// Keys that went down since the previous poll.
    pub pressed: Keys,
}

impl KeyMonitor {
    pub const fn new() -> Self {
        Self { last: Keys::empty() }
    }

    /// Feed the latest mask.
    pub fn update(&mut self, now: Keys) -> KeySample {
        let pressed = now.pressed_since(self.last);
        self.last = now;
        KeySample { held: now, pressed }
    }

    /// Read the keys from `board` and feed them in.
    pub fn poll<H: Hardware>(&mut self, board: &mut Board<H>) -> Result<KeySample, Error> {
        let keys = board.read_keys()?;
        Ok(self.update(keys))
    }

    pub fn last(&self) -> Keys {
        self.last
    }
}
