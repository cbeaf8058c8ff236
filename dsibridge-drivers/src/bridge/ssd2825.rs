//! SSD2825 register and packet framing
//!
//! Turns register writes, reads and DSI command packets into the word
//! sequences built by [`Frame::words`] and pushes them through a
//! [`BridgeTransport`]. No retries: a failed word ends the frame.

use dsibridge_core::traits::{BridgeBus, BridgeTransport};
use dsibridge_core::Error;
use dsibridge_protocol::{reg, Frame};

/// Framing layer over a bridge transport
pub struct Ssd2825<T> {
    transport: T,
}

impl<T: BridgeTransport> Ssd2825<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Give the transport back
    pub fn release(self) -> T {
        self.transport
    }

    /// Read the device identification register
    pub fn device_id(&mut self) -> Result<u16, Error> {
        self.read_register(reg::DEVICE_ID_REG)
    }

    /// Check that an SSD2825 answers on the bus
    pub fn verify_device(&mut self) -> Result<(), Error> {
        verify_device(self)
    }

    fn send(&mut self, frame: &Frame<'_>) -> Result<(), Error> {
        for word in frame.words() {
            self.transport.write_bits(word.bits())?;
        }
        Ok(())
    }
}

/// Read the device id through any bridge bus and check it
pub fn verify_device<B: BridgeBus + ?Sized>(bus: &mut B) -> Result<(), Error> {
    let id = bus.read_register(reg::DEVICE_ID_REG)?;
    if id != reg::DEVICE_ID {
        warn!("unexpected bridge id {=u16:#x}", id);
        return Err(Error::WrongDevice(id));
    }
    debug!("SSD2825 detected");
    Ok(())
}

impl<T: BridgeTransport> BridgeBus for Ssd2825<T> {
    fn write_register(&mut self, register: u8, value: u16) -> Result<(), Error> {
        trace!("reg {=u8:#x} <- {=u16:#x}", register, value);
        self.send(&Frame::RegisterWrite { register, value })
    }

    fn write_command(&mut self, register: u8) -> Result<(), Error> {
        self.send(&Frame::Command { register })
    }

    fn read_register(&mut self, register: u8) -> Result<u16, Error> {
        self.send(&Frame::RegisterRead { register })?;
        let value = self.transport.read_bits()?;
        trace!("reg {=u8:#x} -> {=u16:#x}", register, value);
        Ok(value)
    }

    fn send_command_packet(&mut self, bytes: &[u8]) -> Result<(), Error> {
        let frame = Frame::command_packet(bytes)?;
        trace!("dsi packet {=[u8]:#x}", bytes);
        self.send(&frame)
    }
}
