//! I2C bus abstractions
//!
//! Used by companion devices of the display pipeline, such as the LED
//! backlight controller.

use crate::HalError;

/// I2C bus master
pub trait I2cBus {
    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), HalError>;

    /// Write then read in a single transaction (repeated start)
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `write_data` - Bytes to write (typically register address)
    /// * `read_buf` - Buffer to read into
    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), HalError>;

    /// Write one 8-bit register of an 8-bit addressed device
    fn write_reg(&mut self, address: u8, reg: u8, value: u8) -> Result<(), HalError> {
        self.write(address, &[reg, value])
    }
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), HalError> {
        T::write(self, address, data)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), HalError> {
        T::write_read(self, address, write_data, read_buf)
    }
}
