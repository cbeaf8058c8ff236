//! Error taxonomy
//!
//! Every layer returns [`Error`] unchanged from the layer below; nothing is
//! retried or swallowed. The power sequence wraps the failing cause in a
//! [`SequenceError`] that records which state it was heading for.

use dsibridge_hal::HalError;
use dsibridge_protocol::FrameError;

use crate::state::PowerState;

/// Digital lines owned by the bring-up stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// Bus chip select (active low)
    Csx,
    /// Bus clock
    Sck,
    /// Bus data towards the bridge
    Sdi,
    /// Bus data from the bridge
    Sdo,
    /// Panel enable
    PanelEnable,
    /// Panel reset (active low)
    PanelReset,
    /// Bridge enable
    BridgeEnable,
    /// Bridge reset (active low)
    BridgeReset,
    /// Backlight controller enable
    BacklightEnable,
}

/// Resources resolved at attach time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resource {
    /// A named digital line
    Line(Line),
    /// A power rail, by position in the supply list
    Supply(u8),
}

/// Rule of the bridge protocol broken by a caller or a static table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProtocolViolation {
    /// Command packet with no bytes
    EmptyPacket,
    /// Command packet longer than the length register can announce
    PacketTooLong,
    /// PLL latched before the PLL configuration write of the same phase
    PllLatchBeforeConfig {
        /// Table index of the offending latch
        index: u8,
    },
    /// PLL latched before the clock control write of the same phase
    PllLatchBeforeClock {
        /// Table index of the offending latch
        index: u8,
    },
    /// Lane or test register written after the PLL configuration
    LaneConfigAfterPll {
        /// Table index of the offending write
        index: u8,
    },
    /// Brightness outside 0..=100 percent
    BrightnessOutOfRange,
    /// More supplies than a driver can own
    TooManySupplies,
}

impl From<FrameError> for ProtocolViolation {
    fn from(err: FrameError) -> Self {
        match err {
            FrameError::EmptyPacket => ProtocolViolation::EmptyPacket,
            FrameError::PacketTooLong => ProtocolViolation::PacketTooLong,
        }
    }
}

/// Errors surfaced by any layer of the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A named resource could not be resolved at attach time
    Attach {
        /// What was being resolved
        resource: Resource,
        /// Board-reported cause
        source: HalError,
    },
    /// No panel model matches the configured compatible string
    UnknownModel,
    /// A bus line failed mid-transfer; the frame was not delivered
    Transfer(HalError),
    /// An enable or reset line failed to switch
    Line {
        /// Which line
        line: Line,
        /// Board-reported cause
        source: HalError,
    },
    /// A power rail failed to switch
    Regulator {
        /// Position in the supply order
        index: u8,
        /// Board-reported cause
        source: HalError,
    },
    /// The backlight controller failed
    Backlight(HalError),
    /// The bridge answered with an unexpected device id
    WrongDevice(u16),
    /// A protocol rule was broken; nothing was sent
    Protocol(ProtocolViolation),
    /// An earlier bring-up aborted; the driver must be attached again
    SequenceAborted,
}

impl From<ProtocolViolation> for Error {
    fn from(violation: ProtocolViolation) -> Self {
        Error::Protocol(violation)
    }
}

impl From<FrameError> for Error {
    fn from(err: FrameError) -> Self {
        Error::Protocol(err.into())
    }
}

impl Error {
    /// Status code for the invoking firmware (negative errno style)
    pub fn code(&self) -> i32 {
        match self {
            Error::Attach { source, .. }
            | Error::Line { source, .. }
            | Error::Regulator { source, .. } => source.code(),
            Error::Transfer(source) | Error::Backlight(source) => source.code(),
            // -ENODEV
            Error::UnknownModel | Error::WrongDevice(_) => -19,
            // -EINVAL
            Error::Protocol(_) => -22,
            // -EIO
            Error::SequenceAborted => -5,
        }
    }
}

/// A bring-up that stopped part way
///
/// `during` is the state the failed transition was heading for; the driver
/// itself stays in the state before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SequenceError {
    /// Target state of the transition that failed
    pub during: PowerState,
    /// Underlying failure
    pub cause: Error,
}

impl SequenceError {
    pub const fn new(during: PowerState, cause: Error) -> Self {
        Self { during, cause }
    }
}

impl From<SequenceError> for Error {
    fn from(err: SequenceError) -> Self {
        err.cause
    }
}
