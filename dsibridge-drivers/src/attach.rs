//! Attach-time composition
//!
//! Resolves every name in a [`PanelHwConfig`] through the board's
//! [`ResourceLookup`] and assembles the driver stack. Lookups happen only
//! here. A missing resource fails the attach before any line moves.

use heapless::Vec;

use dsibridge_core::config::{
    BacklightHwConfig, BridgeHwConfig, BusLinesConfig, PanelHwConfig, MAX_SUPPLIES,
};
use dsibridge_core::traits::{Backlight, Panel};
use dsibridge_core::{Error, Line, ProtocolViolation, Resource};
use dsibridge_hal::{Delay, I2cBus, ResourceLookup};

use crate::backlight::Lm3533;
use crate::bridge::{Ssd2825, Ssd2825Bridge};
use crate::bus::BridgeSpi;
use crate::panel::{model_for, PanelDriver};

type Output<L> = <L as ResourceLookup>::Output;

/// Transport built from board lines
pub type BoardSpi<L, D> =
    BridgeSpi<Output<L>, Output<L>, Output<L>, <L as ResourceLookup>::Input, D>;

/// Framing layer over [`BoardSpi`]
pub type BoardBus<L, D> = Ssd2825<BoardSpi<L, D>>;

/// Panel driver built by [`panel_from_config`]
pub type BoardPanel<L, D> =
    PanelDriver<BoardBus<L, D>, Output<L>, <L as ResourceLookup>::Regulator, D>;

fn output<L: ResourceLookup>(lookup: &mut L, name: &str, line: Line) -> Result<L::Output, Error> {
    lookup.request_output(name).map_err(|source| {
        warn!("line {=str} not found", name);
        Error::Attach {
            resource: Resource::Line(line),
            source,
        }
    })
}

/// Claim the four bus lines and park the bus idle
pub fn bus_from_config<L, D>(
    lookup: &mut L,
    config: &BusLinesConfig,
    delay: D,
) -> Result<BoardBus<L, D>, Error>
where
    L: ResourceLookup,
    D: Delay,
{
    let csx = output(lookup, &config.csx, Line::Csx)?;
    let sck = output(lookup, &config.sck, Line::Sck)?;
    let sdi = output(lookup, &config.sdi, Line::Sdi)?;
    let sdo = lookup.request_input(&config.sdo).map_err(|source| {
        warn!("line {=str} not found", config.sdo.as_str());
        Error::Attach {
            resource: Resource::Line(Line::Sdo),
            source,
        }
    })?;

    let mut spi = BridgeSpi::with_timing(csx, sck, sdi, sdo, delay, config.timing);
    spi.idle()?;
    Ok(Ssd2825::new(spi))
}

/// Build the panel driver for a board description
///
/// The bus is claimed last so nothing is driven until every other resource
/// has resolved.
pub fn panel_from_config<L, D>(
    lookup: &mut L,
    config: &PanelHwConfig,
    delay: D,
) -> Result<BoardPanel<L, D>, Error>
where
    L: ResourceLookup,
    D: Delay + Clone,
{
    let model = model_for(&config.compatible).ok_or_else(|| {
        warn!("no panel model for {=str}", config.compatible.as_str());
        Error::UnknownModel
    })?;

    let enable = output(lookup, &config.enable, Line::PanelEnable)?;
    let reset = output(lookup, &config.reset, Line::PanelReset)?;

    let mut supplies: Vec<L::Regulator, MAX_SUPPLIES> = Vec::new();
    for (index, name) in config.supplies.iter().enumerate() {
        let rail = lookup.request_regulator(name).map_err(|source| {
            warn!("supply {=str} not found", name.as_str());
            Error::Attach {
                resource: Resource::Supply(index as u8),
                source,
            }
        })?;
        supplies
            .push(rail)
            .map_err(|_| ProtocolViolation::TooManySupplies)?;
    }

    let bus = bus_from_config(lookup, &config.bus, delay.clone())?;
    let verify_id = config.bridge.as_ref().is_some_and(|bridge| bridge.verify_id);

    let mut panel =
        PanelDriver::new(model, bus, enable, reset, delay).with_bridge_check(verify_id);
    for rail in supplies {
        panel = panel.with_supply(rail)?;
    }

    debug!("attached {=str}", model.name);
    Ok(panel)
}

/// Put a panel behind a bridge with its own enable and reset lines
pub fn bridge_from_config<L, D, P, B>(
    lookup: &mut L,
    config: &BridgeHwConfig,
    delay: D,
    panel: P,
    backlight: B,
) -> Result<Ssd2825Bridge<Output<L>, D, P, B>, Error>
where
    L: ResourceLookup,
    D: Delay,
    P: Panel,
    B: Backlight,
{
    let enable = output(lookup, &config.enable, Line::BridgeEnable)?;
    let reset = output(lookup, &config.reset, Line::BridgeReset)?;
    Ok(Ssd2825Bridge::new(enable, reset, delay, panel, backlight))
}

/// LM3533 on the given I2C bus
pub fn backlight_from_config<L, I, D>(
    lookup: &mut L,
    config: &BacklightHwConfig,
    i2c: I,
    delay: D,
) -> Result<Lm3533<I, Output<L>, D>, Error>
where
    L: ResourceLookup,
    I: I2cBus,
    D: Delay,
{
    let enable = output(lookup, &config.enable, Line::BacklightEnable)?;
    Ok(Lm3533::new(i2c, config.address, enable, delay))
}
