//! SSD2825 bridge
//!
//! Framing over the 3-wire transport, the phase and script sequencer, and
//! the bridge device for boards where the bridge has its own power lines.

mod device;
pub mod sequencer;
mod ssd2825;

pub use device::Ssd2825Bridge;
pub use ssd2825::{verify_device, Ssd2825};
