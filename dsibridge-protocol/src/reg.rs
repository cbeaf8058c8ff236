//! SSD2825 register map

use bitflags::bitflags;

/// Device identification, reads back [`DEVICE_ID`]
pub const DEVICE_ID_REG: u8 = 0xB0;
/// RGB interface: VSA (high byte) and HSA (low byte)
pub const RGB_INTERFACE_CTRL_REG_1: u8 = 0xB1;
/// RGB interface: VBP (high byte) and HBP (low byte)
pub const RGB_INTERFACE_CTRL_REG_2: u8 = 0xB2;
/// RGB interface: VFP (high byte) and HFP (low byte)
pub const RGB_INTERFACE_CTRL_REG_3: u8 = 0xB3;
/// RGB interface: horizontal active pixels
pub const RGB_INTERFACE_CTRL_REG_4: u8 = 0xB4;
/// RGB interface: vertical active lines
pub const RGB_INTERFACE_CTRL_REG_5: u8 = 0xB5;
/// RGB interface: pixel format and sync polarity
pub const RGB_INTERFACE_CTRL_REG_6: u8 = 0xB6;
/// Operating mode, see [`ConfigFlags`]
pub const CONFIGURATION_REG: u8 = 0xB7;
/// Virtual channel
pub const VC_CTRL_REG: u8 = 0xB8;
/// PLL enable; bit 0 latches the PLL configuration
pub const PLL_CTRL_REG: u8 = 0xB9;
/// PLL multiplier/divider
pub const PLL_CONFIGURATION_REG: u8 = 0xBA;
/// LP clock divider
pub const CLOCK_CTRL_REG: u8 = 0xBB;
/// Packet size, low word
pub const PACKET_SIZE_CTRL_REG_1: u8 = 0xBC;
/// Packet size, high word
pub const PACKET_SIZE_CTRL_REG_2: u8 = 0xBD;
/// Packet size, buffer
pub const PACKET_SIZE_CTRL_REG_3: u8 = 0xBE;
/// Writing this register (command only) starts a new packet
pub const PACKET_DROP_REG: u8 = 0xBF;
pub const OPERATION_CTRL_REG: u8 = 0xC0;
pub const MAX_RETURN_SIZE_REG: u8 = 0xC1;
pub const RETURN_DATA_COUNT_REG: u8 = 0xC2;
pub const ACK_RESPONSE_REG: u8 = 0xC3;
/// Line control (lane polarity, EOT)
pub const LINE_CTRL_REG: u8 = 0xC4;
pub const INTERRUPT_CTRL_REG: u8 = 0xC5;
pub const INTERRUPT_STATUS_REG: u8 = 0xC6;
pub const ERROR_STATUS_REG: u8 = 0xC7;
pub const DATA_FORMAT_REG: u8 = 0xC8;
/// Delay adjustment 1 (HS zero/prepare)
pub const DELAY_ADJ_REG_1: u8 = 0xC9;
pub const DELAY_ADJ_REG_2: u8 = 0xCA;
pub const DELAY_ADJ_REG_3: u8 = 0xCB;
pub const DELAY_ADJ_REG_4: u8 = 0xCC;
pub const DELAY_ADJ_REG_5: u8 = 0xCD;
pub const DELAY_ADJ_REG_6: u8 = 0xCE;
/// Read-request register of the serial interface
pub const SPI_READ_REG: u8 = 0xD4;
/// Number of DSI data lanes
pub const LANE_CONFIGURATION_REG: u8 = 0xDE;
pub const DELAY_ADJ_REG_7: u8 = 0xDF;
/// Test register
pub const TEST_REG: u8 = 0xEE;
/// Read-pointer reset, used twice in the read handshake
pub const SPI_READ_REG_RESET: u8 = 0xFA;

/// Value of [`DEVICE_ID_REG`] on a genuine SSD2825
pub const DEVICE_ID: u16 = 0x2825;

/// [`PLL_CTRL_REG`] bit that latches the programmed PLL configuration
pub const PLL_CTRL_ENABLE: u16 = 0x0001;

bitflags! {
    /// Bits of [`CONFIGURATION_REG`]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ConfigFlags: u16 {
        /// High-speed mode
        const HS = 1 << 0;
        /// Clock lane enable
        const CKE = 1 << 1;
        /// Sleep mode
        const SLP = 1 << 2;
        /// Video mode enable
        const VEN = 1 << 3;
        /// HS clock disable
        const HCLK = 1 << 4;
        /// Clock source select
        const CSS = 1 << 5;
        /// Packets are DCS (otherwise generic)
        const DCS = 1 << 6;
        /// Read enable
        const REN = 1 << 7;
        /// ECC CRC check disable
        const ECD = 1 << 8;
        /// EOT packet enable
        const EOT = 1 << 9;
        /// Long packet enable
        const LPE = 1 << 10;
    }
}

impl ConfigFlags {
    /// Low-power passthrough of generic packets
    pub const GENERIC_PASSTHROUGH: Self = Self::CKE.union(Self::ECD).union(Self::EOT);

    /// Low-power passthrough of DCS packets
    pub const DCS_PASSTHROUGH: Self = Self::GENERIC_PASSTHROUGH.union(Self::DCS);

    /// High-speed video output
    pub const VIDEO: Self = Self::HS
        .union(Self::VEN)
        .union(Self::ECD)
        .union(Self::EOT);
}
