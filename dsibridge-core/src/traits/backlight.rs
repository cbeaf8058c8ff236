//! Backlight control

use crate::error::{Error, ProtocolViolation};

/// Backlight controller
///
/// Only touched once the panel is displaying video.
pub trait Backlight {
    /// Power the controller and program its default level
    fn enable(&mut self) -> Result<(), Error>;

    /// Set brightness in percent (0-100)
    fn set_brightness(&mut self, percent: u8) -> Result<(), Error>;
}

/// Check a brightness request
pub fn check_percent(percent: u8) -> Result<u8, Error> {
    if percent > 100 {
        return Err(ProtocolViolation::BrightnessOutOfRange.into());
    }
    Ok(percent)
}

/// Placeholder for panels whose backlight is driven elsewhere
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBacklight;

impl Backlight for NoBacklight {
    fn enable(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn set_brightness(&mut self, percent: u8) -> Result<(), Error> {
        check_percent(percent).map(|_| ())
    }
}

impl<T: Backlight + ?Sized> Backlight for &mut T {
    fn enable(&mut self) -> Result<(), Error> {
        T::enable(self)
    }

    fn set_brightness(&mut self, percent: u8) -> Result<(), Error> {
        T::set_brightness(self, percent)
    }
}
