//! Bring-up scripts
//!
//! Bridge register phases, panel init scripts, and the panel models built
//! from them.

mod bridge;
mod model;

pub use bridge::{BridgeConfig, BridgeMode, RegisterWrite};
pub use model::{PanelInitScript, PanelModel, PowerTiming, ScriptStep};
