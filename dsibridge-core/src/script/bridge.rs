//! Bridge register tables
//!
//! A [`BridgeConfig`] is one phase of bridge programming. Writes are applied
//! in table order; [`BridgeConfig::check_order`] rejects tables that would
//! latch the PLL or program lanes out of order.

use dsibridge_protocol::reg::{self, ConfigFlags};

use crate::error::ProtocolViolation;

/// A single bridge register write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterWrite {
    pub register: u8,
    pub value: u16,
}

impl RegisterWrite {
    pub const fn new(register: u8, value: u16) -> Self {
        Self { register, value }
    }

    /// Whether this write latches the programmed PLL configuration
    pub const fn is_pll_latch(&self) -> bool {
        self.register == reg::PLL_CTRL_REG && self.value & reg::PLL_CTRL_ENABLE != 0
    }

    /// Whether this write sets up lanes or the test register
    pub const fn is_lane_setup(&self) -> bool {
        matches!(
            self.register,
            reg::LANE_CONFIGURATION_REG | reg::TEST_REG
        )
    }
}

/// One phase of bridge programming
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BridgeConfig {
    /// Writes in bus order
    pub writes: &'static [RegisterWrite],
    /// Settle delay after the last write, in ms
    pub settle_ms: u32,
}

impl BridgeConfig {
    pub const fn new(writes: &'static [RegisterWrite]) -> Self {
        Self {
            writes,
            settle_ms: 0,
        }
    }

    pub const fn with_settle(mut self, settle_ms: u32) -> Self {
        self.settle_ms = settle_ms;
        self
    }

    /// Check the PLL ordering rules of this phase
    ///
    /// A PLL latch must not precede a PLL configuration or clock control
    /// write of the same phase, and lane/test setup must precede the PLL
    /// configuration. Phases that latch without reprogramming are allowed.
    pub fn check_order(&self) -> Result<(), ProtocolViolation> {
        let mut latch: Option<u8> = None;
        let mut pll_configured = false;

        for (i, write) in self.writes.iter().enumerate() {
            let index = i.min(u8::MAX as usize) as u8;

            match write.register {
                reg::PLL_CONFIGURATION_REG => {
                    if let Some(index) = latch {
                        return Err(ProtocolViolation::PllLatchBeforeConfig { index });
                    }
                    pll_configured = true;
                }
                reg::CLOCK_CTRL_REG => {
                    if let Some(index) = latch {
                        return Err(ProtocolViolation::PllLatchBeforeClock { index });
                    }
                }
                _ if write.is_lane_setup() && pll_configured => {
                    return Err(ProtocolViolation::LaneConfigAfterPll { index });
                }
                _ => {}
            }

            if write.is_pll_latch() && latch.is_none() {
                latch = Some(index);
            }
        }

        Ok(())
    }

    /// Value written to a register by this phase, last write wins
    pub fn value_of(&self, register: u8) -> Option<u16> {
        self.writes
            .iter()
            .rev()
            .find(|w| w.register == register)
            .map(|w| w.value)
    }
}

/// Packet routing mode of the bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BridgeMode {
    /// Packets sent as DCS commands
    DcsPassthrough,
    /// Packets sent as generic (manufacturer) commands
    GenericPassthrough,
}

impl BridgeMode {
    pub const fn flags(self) -> ConfigFlags {
        match self {
            BridgeMode::DcsPassthrough => ConfigFlags::DCS_PASSTHROUGH,
            BridgeMode::GenericPassthrough => ConfigFlags::GENERIC_PASSTHROUGH,
        }
    }

    /// Register writes that switch the bridge into this mode
    pub const fn writes(self) -> [RegisterWrite; 2] {
        [
            RegisterWrite::new(reg::CONFIGURATION_REG, self.flags().bits()),
            RegisterWrite::new(reg::VC_CTRL_REG, 0),
        ]
    }
}
