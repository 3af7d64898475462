//! Key bitmask.
//!
//! Layout (`u16`, one bit per key, active = pressed):
//! ```text
//! Bit 0: A       Bit 4: UP      Bit 8: CTRL
//! Bit 1: B       Bit 5: DOWN
//! Bit 2: X       Bit 6: LEFT
//! Bit 3: Y       Bit 7: RIGHT
//! ```
//!
//! Only A and B are wired to GPIOs on this board; the other bits are
//! declared so the mask layout matches the full key set, but nothing in the
//! crate produces them.

use core::fmt::Write;

use heapless::String;

/// Set of pressed keys.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Keys(u16);

impl Keys {
    pub const A: Self = Self(0x0001);
    pub const B: Self = Self(0x0002);
    pub const X: Self = Self(0x0004);
    pub const Y: Self = Self(0x0008);
    pub const UP: Self = Self(0x0010);
    pub const DOWN: Self = Self(0x0020);
    pub const LEFT: Self = Self(0x0040);
    pub const RIGHT: Self = Self(0x0080);
    pub const CTRL: Self = Self(0x0100);

    /// Every named key with its label, in bit order.
    pub const NAMED: [(Keys, &'static str); 9] = [
        (Self::A, "KEY_A"),
        (Self::B, "KEY_B"),
        (Self::X, "KEY_X"),
        (Self::Y, "KEY_Y"),
        (Self::UP, "KEY_UP"),
        (Self::DOWN, "KEY_DOWN"),
        (Self::LEFT, "KEY_LEFT"),
        (Self::RIGHT, "KEY_RIGHT"),
        (Self::CTRL, "KEY_CTRL"),
    ];

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// `true` when every key in `other` is also in `self`.
    pub const fn contains(self, other: Keys) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Keys) {
        self.0 |= other.0;
    }

    /// Keys present in `self` but not in `earlier`.
    pub const fn pressed_since(self, earlier: Keys) -> Keys {
        Keys(self.0 & !earlier.0)
    }

    /// Iterate over the labels of the named keys in the set.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMED
            .into_iter()
            .filter(move |(key, _)| self.contains(*key))
            .map(|(_, name)| name)
    }
}

impl core::ops::BitOr for Keys {
    type Output = Keys;

    fn bitor(self, rhs: Keys) -> Keys {
        Keys(self.0 | rhs.0)
    }
}

impl core::ops::BitOrAssign for Keys {
    fn bitor_assign(&mut self, rhs: Keys) {
        self.0 |= rhs.0;
    }
}

impl From<Keys> for u16 {
    fn from(keys: Keys) -> Self {
        keys.0
    }
}

/// Length of one console line: `KEYS: 0xHHHH\n`.
pub const KEYS_LINE_LEN: usize = 13;

/// Write the console line for `keys` (`KEYS: 0x0003\n`).
pub fn write_keys_line<W: Write>(out: &mut W, keys: Keys) -> core::fmt::Result {
    writeln!(out, "KEYS: 0x{:04x}", keys.bits())
}

/// Render the console line for `keys` into a fixed-size buffer.
pub fn keys_line(keys: Keys) -> String<KEYS_LINE_LEN> {
    let mut line = String::new();
    // 13 bytes always fit: the mask is a u16, so it never exceeds four digits.
    let _ = write_keys_line(&mut line, keys);
    line
}
