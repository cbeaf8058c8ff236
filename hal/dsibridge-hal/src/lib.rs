//! dsibridge Hardware Abstraction Layer
//!
//! This crate defines the capabilities the display bring-up stack consumes
//! from the board: digital lines, power rails, delays, an I2C bus and the
//! attach-time lookup that resolves named resources to handles. Board
//! support code implements these traits; the bridge and panel drivers only
//! ever see the traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  dsibridge-drivers (transport, panels)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dsibridge-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  board GPIO / │       │ embedded-hal  │
//! │  PMIC glue    │       │   adapters    │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital line control
//! - [`regulator::Regulator`] - Power rail control
//! - [`delay::Delay`] - Blocking microsecond/millisecond waits
//! - [`i2c::I2cBus`] - I2C bus operations
//! - [`lookup::ResourceLookup`] - Named resource resolution at attach time

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod error;
pub mod gpio;
pub mod i2c;
pub mod lookup;
pub mod regulator;

#[cfg(feature = "embedded-hal")]
pub mod embedded;

// Re-export key traits at crate root for convenience
pub use delay::Delay;
pub use error::HalError;
pub use gpio::{InputPin, OutputPin};
pub use i2c::I2cBus;
pub use lookup::ResourceLookup;
pub use regulator::Regulator;
