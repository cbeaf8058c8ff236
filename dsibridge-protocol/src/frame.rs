//! Frame encoding for the SSD2825 3-wire interface
//!
//! A [`Frame`] is one logical bus operation. [`Frame::words`] expands it into
//! the exact sequence of 9-bit [`Word`]s the transport must clock out, in
//! order. Nothing else in the stack builds words by hand.

use crate::reg;

/// Longest command packet the length register can announce
pub const MAX_PACKET_LEN: usize = u16::MAX as usize;

/// D/C bit of a 9-bit word, set for data
const DC_BIT: u16 = 1 << 8;

/// Valid bits of a wire word
pub const WORD_MASK: u16 = 0x01FF;

/// Longest fixed word sequence a frame emits before its payload
const MAX_HEAD: usize = 5;

/// Errors that can occur while building a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Command packets carry at least one byte
    EmptyPacket,
    /// Packet length does not fit the 16-bit length register
    PacketTooLong,
}

/// Purpose of a word on the bus
///
/// Exactly one role applies to every word. The bridge decodes only the D/C
/// bit, so `Data` and `DsiPayload` share a wire tag; the distinction is kept
/// so traces show which bytes were forwarded to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameRole {
    /// Register id
    Command,
    /// Register value byte
    Data,
    /// Byte forwarded to the panel inside a DSI packet
    DsiPayload,
}

impl FrameRole {
    /// D/C tag this role puts on the wire
    pub const fn wire_tag(self) -> u16 {
        match self {
            FrameRole::Command => 0,
            FrameRole::Data | FrameRole::DsiPayload => DC_BIT,
        }
    }
}

/// One 9-bit transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Word {
    /// What the byte means to the bridge
    pub role: FrameRole,
    /// Payload byte
    pub byte: u8,
}

impl Word {
    pub const fn command(byte: u8) -> Self {
        Self {
            role: FrameRole::Command,
            byte,
        }
    }

    pub const fn data(byte: u8) -> Self {
        Self {
            role: FrameRole::Data,
            byte,
        }
    }

    pub const fn dsi(byte: u8) -> Self {
        Self {
            role: FrameRole::DsiPayload,
            byte,
        }
    }

    /// Encode for the transport (9 significant bits)
    pub const fn bits(self) -> u16 {
        self.role.wire_tag() | self.byte as u16
    }
}

/// Payload of a command packet
///
/// Only [`Frame::command_packet`] builds one, so the length always fits the
/// 16-bit length register and is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Packet<'a> {
    bytes: &'a [u8],
    length: u16,
}

impl<'a> Packet<'a> {
    /// Command byte followed by its parameters
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Length announced to the bridge
    pub fn length(&self) -> u16 {
        self.length
    }
}

/// A logical bus operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Frame<'a> {
    /// Write a 16-bit register
    RegisterWrite { register: u8, value: u16 },
    /// Register id with no value (e.g. packet drop)
    Command { register: u8 },
    /// Read handshake for a 16-bit register; a 16-clock read follows
    RegisterRead { register: u8 },
    /// DSI command packet, built with [`Frame::command_packet`]
    CommandPacket(Packet<'a>),
}

impl<'a> Frame<'a> {
    /// Build a command packet frame, checking the length limits
    pub fn command_packet(bytes: &'a [u8]) -> Result<Self, FrameError> {
        if bytes.is_empty() {
            return Err(FrameError::EmptyPacket);
        }
        let length = u16::try_from(bytes.len()).map_err(|_| FrameError::PacketTooLong)?;
        Ok(Frame::CommandPacket(Packet { bytes, length }))
    }

    /// Words to clock out for this frame, in bus order
    pub fn words(&self) -> Words<'a> {
        let mut head = [Word::command(0); MAX_HEAD];
        let mut payload: &'a [u8] = &[];

        let head_len = match *self {
            Frame::RegisterWrite { register, value } => {
                let [lo, hi] = value.to_le_bytes();
                head[..3].copy_from_slice(&[Word::command(register), Word::data(lo), Word::data(hi)]);
                3
            }
            Frame::Command { register } => {
                head[0] = Word::command(register);
                1
            }
            Frame::RegisterRead { register } => {
                head.copy_from_slice(&[
                    Word::command(reg::SPI_READ_REG),
                    Word::data(reg::SPI_READ_REG_RESET),
                    Word::data(0x00),
                    Word::command(register),
                    Word::command(reg::SPI_READ_REG_RESET),
                ]);
                5
            }
            Frame::CommandPacket(packet) => {
                let [lo, hi] = packet.length().to_le_bytes();
                head[..4].copy_from_slice(&[
                    Word::command(reg::PACKET_SIZE_CTRL_REG_1),
                    Word::data(lo),
                    Word::data(hi),
                    Word::command(reg::PACKET_DROP_REG),
                ]);
                payload = packet.bytes();
                4
            }
        };

        Words {
            head,
            head_len,
            pos: 0,
            payload: payload.iter(),
        }
    }
}

/// Iterator over the words of one frame
#[derive(Debug, Clone)]
pub struct Words<'a> {
    head: [Word; MAX_HEAD],
    head_len: usize,
    pos: usize,
    payload: core::slice::Iter<'a, u8>,
}

impl Iterator for Words<'_> {
    type Item = Word;

    fn next(&mut self) -> Option<Word> {
        if self.pos < self.head_len {
            let word = self.head[self.pos];
            self.pos += 1;
            return Some(word);
        }
        self.payload.next().map(|&b| Word::dsi(b))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.head_len - self.pos + self.payload.len();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Words<'_> {}

/// Assemble a register value from the 16 bits sampled during a read
///
/// The bridge shifts out the low byte first, so the first eight sampled
/// bits end up in the high half of `raw`.
pub const fn decode_read(raw: u16) -> u16 {
    raw.swap_bytes()
}
