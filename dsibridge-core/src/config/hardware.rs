//! Hardware configuration types
//!
//! A board describes its panel by naming resources; the attach code resolves
//! each name through the board's lookup.

use heapless::{String, Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ConfigError;
use super::types::{
    BusTiming, DEFAULT_BACKLIGHT_ADDRESS, MAX_COMPATIBLE_LEN, MAX_NAME_LEN, MAX_SUPPLIES,
};

/// Resource name
pub type Name = String<MAX_NAME_LEN>;

fn name(s: &str) -> Name {
    let mut out = Name::new();
    // Truncates silently; only used for built-in defaults
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Names of the four 3-wire bus lines
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BusLinesConfig {
    /// Chip select
    pub csx: Name,
    /// Clock
    pub sck: Name,
    /// Data towards the bridge
    pub sdi: Name,
    /// Data from the bridge
    pub sdo: Name,
    /// Bus delays
    pub timing: BusTiming,
}

impl Default for BusLinesConfig {
    fn default() -> Self {
        Self {
            csx: name("csx"),
            sck: name("sck"),
            sdi: name("sdi"),
            sdo: name("sdo"),
            timing: BusTiming::DEFAULT,
        }
    }
}

/// Bridge control lines, for boards where the bridge has its own
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BridgeHwConfig {
    /// Bridge enable line
    pub enable: Name,
    /// Bridge reset line (active low)
    pub reset: Name,
    /// Check the device id before bring-up
    pub verify_id: bool,
}

impl Default for BridgeHwConfig {
    fn default() -> Self {
        Self {
            enable: name("bridge-enable"),
            reset: name("bridge-reset"),
            verify_id: false,
        }
    }
}

/// LM3533 backlight controller
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BacklightHwConfig {
    /// 7-bit I2C address
    pub address: u8,
    /// Controller enable line
    pub enable: Name,
}

impl Default for BacklightHwConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_BACKLIGHT_ADDRESS,
            enable: name("backlight-enable"),
        }
    }
}

/// Complete panel description
///
/// This is the top-level structure a board provides for one display.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelHwConfig {
    /// Configuration version for compatibility checks
    #[cfg_attr(feature = "serde", serde(default = "default_version"))]
    pub version: u8,
    /// Panel model, e.g. "jdi,dx12d100vm0eaa"
    pub compatible: String<MAX_COMPATIBLE_LEN>,
    /// Panel enable line
    #[cfg_attr(feature = "serde", serde(default = "default_enable"))]
    pub enable: Name,
    /// Panel reset line (active low)
    #[cfg_attr(feature = "serde", serde(default = "default_reset"))]
    pub reset: Name,
    /// Supplies, enabled in this order
    #[cfg_attr(feature = "serde", serde(default))]
    pub supplies: Vec<Name, MAX_SUPPLIES>,
    /// Bridge bus lines
    #[cfg_attr(feature = "serde", serde(default))]
    pub bus: BusLinesConfig,
    /// Separate bridge control lines
    #[cfg_attr(feature = "serde", serde(default))]
    pub bridge: Option<BridgeHwConfig>,
    /// Backlight controller
    #[cfg_attr(feature = "serde", serde(default))]
    pub backlight: Option<BacklightHwConfig>,
}

pub const CONFIG_VERSION: u8 = 1;

#[cfg(feature = "serde")]
fn default_version() -> u8 {
    CONFIG_VERSION
}

#[cfg(feature = "serde")]
fn default_enable() -> Name {
    name("enable")
}

#[cfg(feature = "serde")]
fn default_reset() -> Name {
    name("reset")
}

impl PanelHwConfig {
    /// Description with default line names for the given model
    ///
    /// Compatible strings longer than [`MAX_COMPATIBLE_LEN`] bytes are
    /// rejected rather than cut short.
    pub fn new(compatible: &str) -> Result<Self, ConfigError> {
        let compatible = String::try_from(compatible).map_err(|_| ConfigError::NameTooLong)?;
        Ok(Self {
            version: CONFIG_VERSION,
            compatible,
            enable: name("enable"),
            reset: name("reset"),
            supplies: Vec::new(),
            bus: BusLinesConfig::default(),
            bridge: None,
            backlight: None,
        })
    }
}
