//! MIPI DCS and common manufacturer command bytes
//!
//! These are the first byte of a command packet; parameters follow.

/// Leave sleep mode (panel needs a settle delay afterwards)
pub const EXIT_SLEEP_MODE: u8 = 0x11;
/// Turn the display output on
pub const SET_DISPLAY_ON: u8 = 0x29;
/// Memory access order / scan direction
pub const SET_ADDRESS_MODE: u8 = 0x36;
/// Interface pixel format
pub const SET_PIXEL_FORMAT: u8 = 0x3A;

/// Pixel format parameter for 24 bits per pixel on the DPI side
pub const PIXEL_FORMAT_24BPP: u8 = 0x70;

/// Renesas "manufacturer command access protect" register
pub const MCAP: u8 = 0xB0;
/// [`MCAP`] parameter unlocking manufacturer commands
pub const MCAP_UNLOCK: u8 = 0x04;
/// [`MCAP`] parameter locking manufacturer commands again
pub const MCAP_LOCK: u8 = 0x03;
