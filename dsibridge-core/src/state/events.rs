//! Events that advance the power sequence

/// Completed bring-up steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Panel (or bridge) enable line driven high and settled
    EnableAsserted,
    /// All supplies switched on in order
    RailsEnabled,
    /// Reset line driven low
    ResetAsserted,
    /// Reset line driven high and settled
    ResetReleased,
    /// Bridge setup phase written
    BridgeConfigured,
    /// Panel init script sent
    ScriptComplete,
    /// Video output enabled and backlight on
    VideoEnabled,
}
