//! Panels behind the SSD2825
//!
//! Each supported panel is a static [`PanelModel`]; [`PanelDriver`] runs any
//! of them.

mod driver;
mod koe_tx13d100vm0eaa;
mod renesas_r69328;

pub use driver::PanelDriver;
pub use koe_tx13d100vm0eaa::TX13D100VM0EAA;
pub use renesas_r69328::R69328;

use dsibridge_core::script::PanelModel;

/// Every supported panel model
pub static MODELS: [&PanelModel; 2] = [&R69328, &TX13D100VM0EAA];

/// Look up a panel model by compatible string
pub fn model_for(compatible: &str) -> Option<&'static PanelModel> {
    MODELS.iter().copied().find(|model| model.matches(compatible))
}
