//! SSD2825 3-wire Bus Protocol
//!
//! This crate defines how register accesses and DSI command packets for the
//! Solomon SSD2825 RGB-to-MIPI-DSI bridge are packed into the 9-bit words of
//! its "8-bit 3-wire" serial interface. It is the only place in the stack
//! that knows the wire encoding.
//!
//! # Word Format
//!
//! Every transfer on the bus is one 9-bit word, most significant bit first:
//! ```text
//! ┌─────┬───────────────┐
//! │ D/C │ BYTE          │
//! │ 1b  │ 8b            │
//! └─────┴───────────────┘
//! ```
//!
//! D/C is `0` for a command (register id) and `1` for data. Register values
//! are 16 bits wide and travel as two data words, low byte first.
//!
//! # Frames
//!
//! - Register write: `CMD(reg) DAT(lo) DAT(hi)`
//! - Register read: `CMD(0xD4) DAT(0xFA) DAT(0x00) CMD(reg) CMD(0xFA)`,
//!   then 16 clocks of read-back
//! - DSI command packet: a register write of the packet length, a bare
//!   packet-drop command, then one data word per payload byte

#![no_std]
#![deny(unsafe_code)]

pub mod dcs;
pub mod frame;
pub mod reg;

pub use frame::{decode_read, Frame, FrameError, FrameRole, Packet, Word, Words, MAX_PACKET_LEN};
pub use reg::ConfigFlags;
