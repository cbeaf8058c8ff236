//! Renesas R69328 panel (JDI DX12D100VM0EAA, 720x1280)
//!
//! No supply of its own; the bridge board powers it. Generic packets carry
//! the manufacturer commands, guarded by MCAP.

use dsibridge_core::script::{
    BridgeConfig, BridgeMode, PanelInitScript, PanelModel, PowerTiming, RegisterWrite, ScriptStep,
};
use dsibridge_protocol::{dcs, reg, ConfigFlags};

const EXIT_SLEEP: &[u8] = &[dcs::EXIT_SLEEP_MODE, 0x00];
const ADDRESS_MODE: &[u8] = &[dcs::SET_ADDRESS_MODE, 0x00];
const PIXEL_FORMAT: &[u8] = &[dcs::SET_PIXEL_FORMAT, dcs::PIXEL_FORMAT_24BPP];
const MCAP_OFF: &[u8] = &[dcs::MCAP, dcs::MCAP_UNLOCK];
const MCAP_ON: &[u8] = &[dcs::MCAP, dcs::MCAP_LOCK];
const DISPLAY_ON: &[u8] = &[dcs::SET_DISPLAY_ON, 0x00];

const POWER_SETTING: &[u8] = &[0xD1, 0x14, 0x1D, 0x21, 0x67, 0x11, 0x9A];

/// Same curve for all three gamma registers
macro_rules! gamma {
    ($reg:expr) => {
        &[
            $reg, 0x00, 0x1A, 0x20, 0x28, 0x25, 0x24, 0x26, 0x15, 0x13, 0x11, 0x18, 0x1E, 0x1C,
            0x00, 0x00, 0x1A, 0x20, 0x28, 0x25, 0x24, 0x26, 0x15, 0x13, 0x11, 0x18, 0x1E, 0x1C,
            0x00,
        ]
    };
}

const GAMMA_A: &[u8] = gamma!(0xC8);
const GAMMA_B: &[u8] = gamma!(0xC9);
const GAMMA_C: &[u8] = gamma!(0xCA);

const BRIDGE_SETUP: &[RegisterWrite] = &[
    RegisterWrite::new(reg::RGB_INTERFACE_CTRL_REG_1, 0x0104),
    RegisterWrite::new(reg::RGB_INTERFACE_CTRL_REG_2, 0x0442),
    RegisterWrite::new(reg::RGB_INTERFACE_CTRL_REG_3, 0x065C),
    RegisterWrite::new(reg::RGB_INTERFACE_CTRL_REG_4, 0x02D0),
    RegisterWrite::new(reg::RGB_INTERFACE_CTRL_REG_5, 0x0500),
    RegisterWrite::new(reg::RGB_INTERFACE_CTRL_REG_6, 0xE007),
    RegisterWrite::new(reg::LANE_CONFIGURATION_REG, 0x0003),
    RegisterWrite::new(reg::TEST_REG, 0x0004),
    RegisterWrite::new(reg::PLL_CTRL_REG, 0x0000),
    RegisterWrite::new(reg::LINE_CTRL_REG, 0x0001),
    RegisterWrite::new(reg::DELAY_ADJ_REG_1, 0x2103),
    RegisterWrite::new(reg::PLL_CONFIGURATION_REG, 0xC8AB),
    RegisterWrite::new(reg::CLOCK_CTRL_REG, 0x0009),
    RegisterWrite::new(reg::PLL_CTRL_REG, 0x0001),
    RegisterWrite::new(reg::VC_CTRL_REG, 0x0000),
];

const SCRIPT: &[ScriptStep] = &[
    ScriptStep::Mode(BridgeMode::GenericPassthrough),
    ScriptStep::Packet(ADDRESS_MODE),
    ScriptStep::Packet(PIXEL_FORMAT),
    ScriptStep::Mode(BridgeMode::DcsPassthrough),
    ScriptStep::Packet(EXIT_SLEEP),
    ScriptStep::Delay(80),
    ScriptStep::Mode(BridgeMode::GenericPassthrough),
    ScriptStep::Packet(MCAP_OFF),
    ScriptStep::Packet(POWER_SETTING),
    ScriptStep::Packet(GAMMA_A),
    ScriptStep::Packet(GAMMA_B),
    ScriptStep::Packet(GAMMA_C),
    ScriptStep::Packet(MCAP_ON),
    ScriptStep::Mode(BridgeMode::DcsPassthrough),
    ScriptStep::Packet(DISPLAY_ON),
    ScriptStep::Delay(50),
];

const VIDEO_ENABLE: &[RegisterWrite] = &[
    RegisterWrite::new(reg::PLL_CONFIGURATION_REG, 0xC8AB),
    RegisterWrite::new(reg::CLOCK_CTRL_REG, 0x0009),
    RegisterWrite::new(reg::PLL_CTRL_REG, 0x0001),
    RegisterWrite::new(reg::VC_CTRL_REG, 0x0000),
    RegisterWrite::new(reg::CONFIGURATION_REG, ConfigFlags::VIDEO.bits()),
];

pub static R69328: PanelModel = PanelModel {
    name: "renesas-r69328",
    compatible: &["jdi,dx12d100vm0eaa"],
    power: PowerTiming::new(5, 5),
    bridge_setup: BridgeConfig::new(BRIDGE_SETUP),
    script: PanelInitScript::new(SCRIPT),
    video_enable: BridgeConfig::new(VIDEO_ENABLE),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_valid() {
        assert_eq!(R69328.validate(), Ok(()));
    }

    #[test]
    fn test_timing() {
        let timing = R69328.display_timing().unwrap();
        assert_eq!((timing.hactive, timing.vactive), (720, 1280));
    }

    #[test]
    fn test_gamma_registers() {
        assert_eq!(GAMMA_A.len(), 29);
        assert_eq!(GAMMA_A[1..], GAMMA_C[1..]);
        assert_eq!([GAMMA_A[0], GAMMA_B[0], GAMMA_C[0]], [0xC8, 0xC9, 0xCA]);
    }

    #[test]
    fn test_video_mode() {
        assert_eq!(R69328.video_enable.value_of(reg::CONFIGURATION_REG), Some(0x0309));
    }
}
