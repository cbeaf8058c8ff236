//! Configuration type definitions
//!
//! Shared limits and the bus timing parameters. Board descriptions live in
//! [`super::hardware`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum length of a line or supply name
pub const MAX_NAME_LEN: usize = 24;

/// Maximum length of a model compatible string
pub const MAX_COMPATIBLE_LEN: usize = 32;

/// Maximum supplies per panel
pub const MAX_SUPPLIES: usize = 4;

/// Default I2C address of the LM3533 backlight controller
pub const DEFAULT_BACKLIGHT_ADDRESS: u8 = 0x36;

/// Delays of the 3-wire bus in microseconds
///
/// The defaults keep the bus below the bridge's slowest rated 3-wire clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BusTiming {
    /// Half clock period
    pub bit_delay_us: u32,
    /// Settle time after select changes
    pub select_delay_us: u32,
}

impl BusTiming {
    pub const DEFAULT: Self = Self {
        bit_delay_us: 1,
        select_delay_us: 2,
    };

    /// Create timing, raising the select delay to twice the bit delay if needed
    pub const fn new(bit_delay_us: u32, select_delay_us: u32) -> Self {
        Self {
            bit_delay_us,
            select_delay_us,
        }
        .normalized()
    }

    /// Same timing with `select_delay_us >= 2 * bit_delay_us`
    ///
    /// A zero bit delay is raised to 1 µs.
    pub const fn normalized(self) -> Self {
        let bit = if self.bit_delay_us == 0 {
            1
        } else {
            self.bit_delay_us
        };
        let min_select = bit.saturating_mul(2);
        let select = if self.select_delay_us < min_select {
            min_select
        } else {
            self.select_delay_us
        };
        Self {
            bit_delay_us: bit,
            select_delay_us: select,
        }
    }
}

impl Default for BusTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}
