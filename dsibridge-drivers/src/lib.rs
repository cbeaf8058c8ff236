//! Driver implementations for the display bridge stack
//!
//! This crate provides concrete implementations of the traits defined
//! in dsibridge-core:
//!
//! - Bit-banged 3-wire transport ([`bus::BridgeSpi`])
//! - SSD2825 register and packet framing ([`bridge::Ssd2825`])
//! - Bridge phase and panel script sequencing ([`bridge::sequencer`])
//! - Generic panel power sequence driver and the supported panel models
//! - SSD2825 bridge device and LM3533 backlight
//! - Attach-time composition from a board description ([`attach`])

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod fmt;

pub mod attach;
pub mod backlight;
pub mod bridge;
pub mod bus;
pub mod panel;

#[cfg(test)]
mod mock;
