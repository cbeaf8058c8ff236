//! Configuration types
//!
//! Board descriptions of a panel. Stored in flash as postcard binary data,
//! or loaded from TOML text on hosts with an allocator.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;

/// Errors loading or storing a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// TOML text could not be parsed into a panel description
    Parse,
    /// Output buffer too small or value not encodable
    Encode,
    /// Stored bytes are not a valid panel description
    Decode,
    /// Description is for a different configuration version
    Version(u8),
    /// A name does not fit its fixed-capacity field
    NameTooLong,
}

fn check_version(config: PanelHwConfig) -> Result<PanelHwConfig, ConfigError> {
    if config.version != CONFIG_VERSION {
        return Err(ConfigError::Version(config.version));
    }
    Ok(config)
}

/// Parse a panel description from TOML text
///
/// ```toml
/// compatible = "koe,tx13d100vm0eaa"
/// supplies = ["vdd"]
///
/// [bus]
/// csx = "lcd-cs"
///
/// [backlight]
/// address = 0x36
/// ```
#[cfg(feature = "toml")]
pub fn parse_toml(input: &str) -> Result<PanelHwConfig, ConfigError> {
    let config: PanelHwConfig = toml::from_str(input).map_err(|_| ConfigError::Parse)?;
    check_version(config)
}

/// Encode a panel description into `buf`, returning the used part
#[cfg(feature = "serde")]
pub fn to_postcard<'a>(
    config: &PanelHwConfig,
    buf: &'a mut [u8],
) -> Result<&'a mut [u8], ConfigError> {
    postcard::to_slice(config, buf).map_err(|_| ConfigError::Encode)
}

/// Decode a panel description stored with [`to_postcard`]
#[cfg(feature = "serde")]
pub fn from_postcard(bytes: &[u8]) -> Result<PanelHwConfig, ConfigError> {
    let config: PanelHwConfig = postcard::from_bytes(bytes).map_err(|_| ConfigError::Decode)?;
    check_version(config)
}
