//! Capability traits
//!
//! These traits sit at the seams between the layers of the stack so each
//! layer can be driven and observed on its own.

pub mod backlight;
pub mod bus;
pub mod panel;

pub use backlight::{Backlight, NoBacklight};
pub use bus::{BridgeBus, BridgeTransport};
pub use panel::{DisplayTiming, Panel};
