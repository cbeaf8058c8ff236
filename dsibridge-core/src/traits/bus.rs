//! Bridge bus traits
//!
//! Two seams: the raw 3-wire transport below the framing layer, and the
//! register/packet interface the framing layer offers to the sequencers.

use crate::error::Error;

/// 3-wire half-duplex transport to the bridge
///
/// Implementations own the bus lines exclusively. Each call is one complete
/// transfer with chip select held for its whole duration.
pub trait BridgeTransport {
    /// Clock out one 9-bit word, most significant bit first
    fn write_bits(&mut self, word: u16) -> Result<(), Error>;

    /// Clock in 16 bits and return them as a register value
    ///
    /// The bridge sends the low byte first; implementations return the
    /// byte-swapped sample so callers get the register value directly.
    fn read_bits(&mut self) -> Result<u16, Error>;
}

impl<T: BridgeTransport + ?Sized> BridgeTransport for &mut T {
    fn write_bits(&mut self, word: u16) -> Result<(), Error> {
        T::write_bits(self, word)
    }

    fn read_bits(&mut self) -> Result<u16, Error> {
        T::read_bits(self)
    }
}

/// Register and packet access to the bridge
pub trait BridgeBus {
    /// Write a 16-bit bridge register
    fn write_register(&mut self, register: u8, value: u16) -> Result<(), Error>;

    /// Send a register id with no value
    fn write_command(&mut self, register: u8) -> Result<(), Error>;

    /// Read a 16-bit bridge register
    fn read_register(&mut self, register: u8) -> Result<u16, Error>;

    /// Forward one DSI command packet (command byte plus parameters)
    fn send_command_packet(&mut self, bytes: &[u8]) -> Result<(), Error>;
}

impl<T: BridgeBus + ?Sized> BridgeBus for &mut T {
    fn write_register(&mut self, register: u8, value: u16) -> Result<(), Error> {
        T::write_register(self, register, value)
    }

    fn write_command(&mut self, register: u8) -> Result<(), Error> {
        T::write_command(self, register)
    }

    fn read_register(&mut self, register: u8) -> Result<u16, Error> {
        T::read_register(self, register)
    }

    fn send_command_packet(&mut self, bytes: &[u8]) -> Result<(), Error> {
        T::send_command_packet(self, bytes)
    }
}
