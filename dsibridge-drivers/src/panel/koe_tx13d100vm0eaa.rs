//! KOE / Hitachi TX13D100VM0EAA panel (768x1024)
//!
//! Powered from its own supply after the enable line. The bridge PLL needs
//! 10 ms after latching before the first packet.

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

const DIGITAL_CONTRAST: &[u8] = &[0xCC, 0xDC, 0xB4, 0xFF];

const GAMMA_CURVE: &[u8] = &[
    0xC8, 0x0B, 0x0D, 0x10, 0x14, 0x13, 0x1D, 0x20, 0x18, 0x12, 0x09, 0x07, 0x06, 0x0A, 0x0C,
    0x10, 0x14, 0x13, 0x1D, 0x20, 0x18, 0x12, 0x09, 0x07, 0x06,
];

const COLUMN_INVERSION: &[u8] = &[0xC1, 0x00, 0x50, 0x03, 0x22, 0x16, 0x06, 0x60, 0x11];

const BRIDGE_SETUP: &[RegisterWrite] = &[
    RegisterWrite::new(reg::RGB_INTERFACE_CTRL_REG_1, 0x0205),
    RegisterWrite::new(reg::RGB_INTERFACE_CTRL_REG_2, 0x0A56),
    RegisterWrite::new(reg::RGB_INTERFACE_CTRL_REG_3, 0x1874),
    RegisterWrite::new(reg::RGB_INTERFACE_CTRL_REG_4, 0x0300),
    RegisterWrite::new(reg::RGB_INTERFACE_CTRL_REG_5, 0x0400),
    RegisterWrite::new(reg::RGB_INTERFACE_CTRL_REG_6, 0xE007),
    RegisterWrite::new(reg::LANE_CONFIGURATION_REG, 0x0003),
    RegisterWrite::new(reg::TEST_REG, 0x0004),
    RegisterWrite::new(reg::PLL_CTRL_REG, 0x0000),
    RegisterWrite::new(reg::LINE_CTRL_REG, 0x0001),
    RegisterWrite::new(reg::DELAY_ADJ_REG_1, 0x2103),
    RegisterWrite::new(reg::PLL_CONFIGURATION_REG, 0x8CD7),
    RegisterWrite::new(reg::CLOCK_CTRL_REG, 0x0009),
    RegisterWrite::new(reg::PLL_CTRL_REG, 0x0001),
    RegisterWrite::new(reg::VC_CTRL_REG, 0x0000),
];

const SCRIPT: &[ScriptStep] = &[
    ScriptStep::Mode(BridgeMode::DcsPassthrough),
    ScriptStep::Packet(EXIT_SLEEP),
    ScriptStep::Delay(80),
    ScriptStep::Packet(ADDRESS_MODE),
    ScriptStep::Delay(20),
    ScriptStep::Packet(PIXEL_FORMAT),
    ScriptStep::Mode(BridgeMode::GenericPassthrough),
    ScriptStep::Packet(MCAP_OFF),
    ScriptStep::Packet(DIGITAL_CONTRAST),
    ScriptStep::Packet(GAMMA_CURVE),
    ScriptStep::Packet(COLUMN_INVERSION),
    ScriptStep::Packet(MCAP_ON),
    ScriptStep::Mode(BridgeMode::DcsPassthrough),
    ScriptStep::Packet(DISPLAY_ON),
    ScriptStep::Delay(10),
];

/// PLL already programmed in setup; latch again and start video
const VIDEO_ENABLE: &[RegisterWrite] = &[
    RegisterWrite::new(reg::PLL_CTRL_REG, 0x0001),
    RegisterWrite::new(reg::VC_CTRL_REG, 0x0000),
    RegisterWrite::new(
        reg::CONFIGURATION_REG,
        ConfigFlags::VIDEO.union(ConfigFlags::DCS).bits(),
    ),
];

pub static TX13D100VM0EAA: PanelModel = PanelModel {
    name: "koe-tx13d100vm0eaa",
    compatible: &["koe,tx13d100vm0eaa", "hitachi,tx13d100vm0eaa"],
    power: PowerTiming::new(5, 5),
    bridge_setup: BridgeConfig::new(BRIDGE_SETUP).with_settle(10),
    script: PanelInitScript::new(SCRIPT),
    video_enable: BridgeConfig::new(VIDEO_ENABLE),
};
