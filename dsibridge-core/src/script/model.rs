//! Static panel model data
//!
//! Everything that differs between panels is described here as data. One
//! generic driver interprets a [`PanelModel`]; models carry no code.

use dsibridge_protocol::reg;

use super::bridge::{BridgeConfig, BridgeMode, RegisterWrite};
use crate::error::ProtocolViolation;
use crate::traits::DisplayTiming;

/// One step of a panel init script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScriptStep {
    /// DSI command packet: command byte followed by parameters
    Packet(&'static [u8]),
    /// Settle delay in ms
    Delay(u32),
    /// Raw bridge register write
    Register(RegisterWrite),
    /// Switch the bridge packet routing mode
    Mode(BridgeMode),
}

/// Ordered panel init commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelInitScript {
    pub steps: &'static [ScriptStep],
}

impl PanelInitScript {
    pub const fn new(steps: &'static [ScriptStep]) -> Self {
        Self { steps }
    }

    /// Reject scripts containing an empty packet
    pub fn validate(&self) -> Result<(), ProtocolViolation> {
        let empty = self
            .steps
            .iter()
            .any(|step| matches!(step, ScriptStep::Packet(bytes) if bytes.is_empty()));
        if empty {
            return Err(ProtocolViolation::EmptyPacket);
        }
        Ok(())
    }
}

/// Delays of the power and reset steps, in ms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerTiming {
    /// After the enable line goes high
    pub enable_settle_ms: u32,
    /// After the last supply is on
    pub rails_settle_ms: u32,
    /// Reset held low
    pub reset_assert_ms: u32,
    /// After reset is released
    pub reset_release_ms: u32,
}

impl PowerTiming {
    pub const fn new(enable_settle_ms: u32, reset_ms: u32) -> Self {
        Self {
            enable_settle_ms,
            rails_settle_ms: 0,
            reset_assert_ms: reset_ms,
            reset_release_ms: reset_ms,
        }
    }
}

/// A panel behind the bridge, described as data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelModel {
    /// Human readable name
    pub name: &'static str,
    /// Compatible strings matched at attach time
    pub compatible: &'static [&'static str],
    /// Power and reset delays
    pub power: PowerTiming,
    /// Bridge phase before the panel script (interface, lanes, PLL)
    pub bridge_setup: BridgeConfig,
    /// Panel init commands
    pub script: PanelInitScript,
    /// Bridge phase that starts video output
    pub video_enable: BridgeConfig,
}

impl PanelModel {
    /// Whether `compatible` names this model
    pub fn matches(&self, compatible: &str) -> bool {
        self.compatible.iter().any(|c| *c == compatible)
    }

    /// Check every static table of the model
    pub fn validate(&self) -> Result<(), ProtocolViolation> {
        self.bridge_setup.check_order()?;
        self.script.validate()?;
        self.video_enable.check_order()
    }

    /// Timing programmed into the bridge RGB interface
    pub fn display_timing(&self) -> Option<DisplayTiming> {
        let setup = &self.bridge_setup;
        let regs = [
            setup.value_of(reg::RGB_INTERFACE_CTRL_REG_1)?,
            setup.value_of(reg::RGB_INTERFACE_CTRL_REG_2)?,
            setup.value_of(reg::RGB_INTERFACE_CTRL_REG_3)?,
            setup.value_of(reg::RGB_INTERFACE_CTRL_REG_4)?,
            setup.value_of(reg::RGB_INTERFACE_CTRL_REG_5)?,
        ];
        Some(DisplayTiming::from_rgb_registers(regs))
    }
}
