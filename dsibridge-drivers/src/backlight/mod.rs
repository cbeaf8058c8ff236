//! Backlight controllers driven next to the bridge

mod lm3533;

pub use lm3533::{brightness_level, reg, Lm3533, DEFAULT_BRIGHTNESS, MAX_BRIGHTNESS};
