//! Board-agnostic core of the display bridge bring-up stack
//!
//! This crate contains everything that does not touch a line or a bus:
//!
//! - Capability traits at the seams (transport, framing, panel, backlight)
//! - The power sequence state machine
//! - Static panel model data (bridge register tables, DCS scripts, delays)
//! - Board configuration types
//! - The error taxonomy shared by all layers

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod error;
pub mod script;
pub mod state;
pub mod traits;

pub use error::{Error, Line, ProtocolViolation, Resource, SequenceError};
pub use state::{Event, PowerState};
