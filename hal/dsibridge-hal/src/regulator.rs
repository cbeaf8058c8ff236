//! Power rail abstraction

use crate::HalError;

/// Switchable power rail (PMIC LDO, fixed regulator behind a GPIO, ...)
pub trait Regulator {
    /// Turn the rail on
    fn enable(&mut self) -> Result<(), HalError>;

    /// Turn the rail off
    fn disable(&mut self) -> Result<(), HalError>;

    /// Switch the rail to the requested state
    fn set_enabled(&mut self, on: bool) -> Result<(), HalError> {
        if on {
            self.enable()
        } else {
            self.disable()
        }
    }
}

impl<T: Regulator + ?Sized> Regulator for &mut T {
    fn enable(&mut self) -> Result<(), HalError> {
        T::enable(self)
    }

    fn disable(&mut self) -> Result<(), HalError> {
        T::disable(self)
    }
}
