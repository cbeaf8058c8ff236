//! SSD2825 bridge with its own enable and reset lines
//!
//! Powers the bridge, then hands over to the panel behind it, then lights
//! the backlight. The panel does its own bridge programming.

use dsibridge_core::traits::{Backlight, DisplayTiming, Panel};
use dsibridge_core::{Error, Line, PowerState, SequenceError};
use dsibridge_hal::{Delay, OutputPin};

/// Bridge power and reset settle time in ms
const BRIDGE_SETTLE_MS: u32 = 10;

pub struct Ssd2825Bridge<O, D, P, L> {
    enable: O,
    reset: O,
    delay: D,
    panel: P,
    backlight: L,
    lit: bool,
    failed: Option<PowerState>,
}

impl<O, D, P, L> Ssd2825Bridge<O, D, P, L>
where
    O: OutputPin,
    D: Delay,
    P: Panel,
    L: Backlight,
{
    pub fn new(enable: O, reset: O, delay: D, panel: P, backlight: L) -> Self {
        Self {
            enable,
            reset,
            delay,
            panel,
            backlight,
            lit: false,
            failed: None,
        }
    }

    /// The panel behind the bridge
    pub fn panel(&self) -> &P {
        &self.panel
    }

    fn bridge_on(&mut self) -> Result<(), SequenceError> {
        let line = |source| Error::Line {
            line: Line::BridgeEnable,
            source,
        };
        self.enable
            .set_high()
            .map_err(|e| SequenceError::new(PowerState::EnableAsserted, line(e)))?;
        self.delay.delay_ms(BRIDGE_SETTLE_MS);

        let line = |source| Error::Line {
            line: Line::BridgeReset,
            source,
        };
        self.reset
            .set_low()
            .map_err(|e| SequenceError::new(PowerState::ResetAsserted, line(e)))?;
        self.delay.delay_ms(BRIDGE_SETTLE_MS);
        self.reset
            .set_high()
            .map_err(|e| SequenceError::new(PowerState::ResetReleased, line(e)))?;
        self.delay.delay_ms(BRIDGE_SETTLE_MS);

        debug!("bridge out of reset");
        Ok(())
    }

    fn light(&mut self) -> Result<(), SequenceError> {
        self.bridge_on()?;
        self.panel.enable_backlight()?;
        self.backlight
            .enable()
            .map_err(|cause| SequenceError::new(PowerState::DisplayOn, cause))
    }
}

impl<O, D, P, L> Panel for Ssd2825Bridge<O, D, P, L>
where
    O: OutputPin,
    D: Delay,
    P: Panel,
    L: Backlight,
{
    fn enable_backlight(&mut self) -> Result<(), SequenceError> {
        if let Some(during) = self.failed {
            return Err(SequenceError::new(during, Error::SequenceAborted));
        }
        if self.lit {
            return Ok(());
        }

        match self.light() {
            Ok(()) => {
                self.lit = true;
                Ok(())
            }
            Err(err) => {
                warn!("bridge bring-up failed: {}", err);
                self.failed = Some(err.during);
                Err(err)
            }
        }
    }

    fn set_backlight(&mut self, percent: u8) -> Result<(), Error> {
        self.backlight.set_brightness(percent)
    }

    fn display_timing(&self) -> Option<DisplayTiming> {
        self.panel.display_timing()
    }
}
