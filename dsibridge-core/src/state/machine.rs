//! Power sequence definition
//!
//! Every bring-up step maps to exactly one forward transition. Events that
//! do not match the current state leave it unchanged.

use super::events::Event;

/// How far the panel has been brought up
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// Nothing driven yet
    Unpowered,
    /// Enable line high
    EnableAsserted,
    /// Supplies on
    RegulatorsOn,
    /// Reset held low
    ResetAsserted,
    /// Reset released, controller booting
    ResetReleased,
    /// Bridge interface, lanes and PLL programmed
    BridgeConfigured,
    /// Panel init commands delivered
    PanelScripted,
    /// Video output and backlight on
    DisplayOn,
}

impl PowerState {
    /// All states in sequence order
    pub const SEQUENCE: [PowerState; 8] = [
        PowerState::Unpowered,
        PowerState::EnableAsserted,
        PowerState::RegulatorsOn,
        PowerState::ResetAsserted,
        PowerState::ResetReleased,
        PowerState::BridgeConfigured,
        PowerState::PanelScripted,
        PowerState::DisplayOn,
    ];

    /// The state that follows this one, if any
    pub fn next(self) -> Option<Self> {
        use PowerState::*;

        match self {
            Unpowered => Some(EnableAsserted),
            EnableAsserted => Some(RegulatorsOn),
            RegulatorsOn => Some(ResetAsserted),
            ResetAsserted => Some(ResetReleased),
            ResetReleased => Some(BridgeConfigured),
            BridgeConfigured => Some(PanelScripted),
            PanelScripted => Some(DisplayOn),
            DisplayOn => None,
        }
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use PowerState as S;

        match (self, event) {
            (S::Unpowered, Event::EnableAsserted) => S::EnableAsserted,
            (S::EnableAsserted, Event::RailsEnabled) => S::RegulatorsOn,
            (S::RegulatorsOn, Event::ResetAsserted) => S::ResetAsserted,
            (S::ResetAsserted, Event::ResetReleased) => S::ResetReleased,
            (S::ResetReleased, Event::BridgeConfigured) => S::BridgeConfigured,
            (S::BridgeConfigured, Event::ScriptComplete) => S::PanelScripted,
            (S::PanelScripted, Event::VideoEnabled) => S::DisplayOn,

            // Default: stay in current state
            _ => self,
        }
    }
}
