//! Adapters from `embedded-hal` 1.0 traits
//!
//! Boards whose chip HAL already implements `embedded-hal` can wrap their
//! pins, delays and buses in [`Eh`] instead of writing glue by hand.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital;
use embedded_hal::i2c;

use crate::{Delay, HalError, I2cBus, InputPin, OutputPin};

/// `-EIO`, used when the wrapped driver gives no better classification
const EIO: i32 = -5;
/// `-ENXIO`, reported for an unacknowledged I2C address or data byte
const ENXIO: i32 = -6;
/// `-EAGAIN`, reported for lost I2C arbitration
const EAGAIN: i32 = -11;

/// Wrapper that exposes an `embedded-hal` implementation through the
/// dsibridge capability traits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Eh<T>(pub T);

impl<T> Eh<T> {
    /// Unwrap the inner `embedded-hal` implementation
    pub fn into_inner(self) -> T {
        self.0
    }
}

fn digital_error<E: digital::Error>(_err: E) -> HalError {
    // digital::ErrorKind only has `Other`
    HalError::Io(EIO)
}

fn i2c_error<E: i2c::Error>(err: E) -> HalError {
    match err.kind() {
        i2c::ErrorKind::NoAcknowledge(_) => HalError::Io(ENXIO),
        i2c::ErrorKind::ArbitrationLoss => HalError::Io(EAGAIN),
        _ => HalError::Io(EIO),
    }
}

impl<P: digital::OutputPin> OutputPin for Eh<P> {
    fn set_high(&mut self) -> Result<(), HalError> {
        self.0.set_high().map_err(digital_error)
    }

    fn set_low(&mut self) -> Result<(), HalError> {
        self.0.set_low().map_err(digital_error)
    }
}

impl<P: digital::InputPin> InputPin for Eh<P> {
    fn is_high(&mut self) -> Result<bool, HalError> {
        self.0.is_high().map_err(digital_error)
    }
}

impl<D: DelayNs> Delay for Eh<D> {
    fn delay_us(&mut self, us: u32) {
        self.0.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.delay_ms(ms);
    }
}

impl<I: i2c::I2c> I2cBus for Eh<I> {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), HalError> {
        self.0.write(address, data).map_err(i2c_error)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), HalError> {
        self.0
            .write_read(address, write_data, read_buf)
            .map_err(i2c_error)
    }
}
