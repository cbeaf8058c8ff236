//! Panel capability interface
//!
//! One implementation per panel/bridge arrangement. Attach code composes
//! them; nothing registers itself globally.

use crate::error::{Error, SequenceError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Video timing of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayTiming {
    pub hactive: u16,
    pub hfront_porch: u16,
    pub hback_porch: u16,
    pub hsync_len: u16,
    pub vactive: u16,
    pub vfront_porch: u16,
    pub vback_porch: u16,
    pub vsync_len: u16,
}

impl DisplayTiming {
    /// Decode from the bridge RGB interface registers 1 to 5
    ///
    /// Registers 1 to 3 hold the vertical value in the high byte and the
    /// horizontal value in the low byte (sync, back porch, front porch).
    pub const fn from_rgb_registers(regs: [u16; 5]) -> Self {
        let [sync, back, front, hactive, vactive] = regs;
        Self {
            hactive,
            hfront_porch: front & 0xFF,
            hback_porch: back & 0xFF,
            hsync_len: sync & 0xFF,
            vactive,
            vfront_porch: front >> 8,
            vback_porch: back >> 8,
            vsync_len: sync >> 8,
        }
    }

    /// Total pixels per line including blanking
    pub fn htotal(&self) -> u32 {
        self.hactive as u32
            + self.hfront_porch as u32
            + self.hback_porch as u32
            + self.hsync_len as u32
    }

    /// Total lines per frame including blanking
    pub fn vtotal(&self) -> u32 {
        self.vactive as u32
            + self.vfront_porch as u32
            + self.vback_porch as u32
            + self.vsync_len as u32
    }
}

/// A display that can be brought up and lit
pub trait Panel {
    /// Run the full bring-up and light the backlight
    ///
    /// Not reentrant. Once it has succeeded, further calls do nothing.
    fn enable_backlight(&mut self) -> Result<(), SequenceError>;

    /// Set backlight brightness in percent (0-100)
    fn set_backlight(&mut self, percent: u8) -> Result<(), Error>;

    /// Video timing the panel expects, if known
    fn display_timing(&self) -> Option<DisplayTiming>;
}

impl<T: Panel + ?Sized> Panel for &mut T {
    fn enable_backlight(&mut self) -> Result<(), SequenceError> {
        T::enable_backlight(self)
    }

    fn set_backlight(&mut self, percent: u8) -> Result<(), Error> {
        T::set_backlight(self, percent)
    }

    fn display_timing(&self) -> Option<DisplayTiming> {
        T::display_timing(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals() {
        let timing = DisplayTiming {
            hactive: 480,
            hfront_porch: 10,
            hback_porch: 10,
            hsync_len: 10,
            vactive: 800,
            vfront_porch: 4,
            vback_porch: 4,
            vsync_len: 4,
        };

        assert_eq!(timing.htotal(), 510);
        assert_eq!(timing.vtotal(), 812);
    }

    #[test]
    fn test_from_rgb_registers() {
        let regs = [0x0104, 0x0442, 0x065C, 0x02D0, 0x0500];
        let timing = DisplayTiming::from_rgb_registers(regs);
        assert_eq!(timing.hsync_len, 0x04);
        assert_eq!(timing.vsync_len, 0x01);
        assert_eq!(timing.hback_porch, 0x42);
        assert_eq!(timing.vback_porch, 0x04);
        assert_eq!(timing.hfront_porch, 0x5C);
        assert_eq!(timing.vfront_porch, 0x06);
        assert_eq!(timing.hactive, 720);
        assert_eq!(timing.vactive, 1280);
    }
}
