//! Bit-banged 3-wire bus ("8-bit 3 wire" mode of the SSD2825)
//!
//! Writes are 9 bits with the D/C flag in bit 8; reads are 16 clocks on
//! SDO after the read handshake. Both go MSB first with chip select held
//! low for the whole transfer. The bridge samples SDI on the rising edge of
//! SCK and shifts SDO after the falling edge.
//!
//! With the default 1 µs half period the bus runs near 500 kHz, below the
//! 1 MHz the bridge accepts right after reset.

use dsibridge_core::config::BusTiming;
use dsibridge_core::traits::BridgeTransport;
use dsibridge_core::Error;
use dsibridge_hal::{Delay, HalError, InputPin, OutputPin};
use dsibridge_protocol::frame::{decode_read, WORD_MASK};

/// Bits clocked out per write
const WRITE_BITS: u32 = 9;

/// Clocks per read
const READ_BITS: u32 = 16;

/// Exclusive owner of the four bus lines
pub struct BridgeSpi<CS, SCK, SDI, SDO, D> {
    csx: CS,
    sck: SCK,
    sdi: SDI,
    sdo: SDO,
    delay: D,
    timing: BusTiming,
}

impl<CS, SCK, SDI, SDO, D> BridgeSpi<CS, SCK, SDI, SDO, D>
where
    CS: OutputPin,
    SCK: OutputPin,
    SDI: OutputPin,
    SDO: InputPin,
    D: Delay,
{
    /// Take the lines with the default timing
    pub fn new(csx: CS, sck: SCK, sdi: SDI, sdo: SDO, delay: D) -> Self {
        Self::with_timing(csx, sck, sdi, sdo, delay, BusTiming::DEFAULT)
    }

    /// Take the lines with explicit delays
    pub fn with_timing(
        csx: CS,
        sck: SCK,
        sdi: SDI,
        sdo: SDO,
        delay: D,
        timing: BusTiming,
    ) -> Self {
        Self {
            csx,
            sck,
            sdi,
            sdo,
            delay,
            timing: timing.normalized(),
        }
    }

    /// Drive the bus to idle: select deasserted, clock high
    pub fn idle(&mut self) -> Result<(), Error> {
        self.csx.set_high().map_err(Error::Transfer)?;
        self.sck.set_high().map_err(Error::Transfer)
    }

    pub fn timing(&self) -> BusTiming {
        self.timing
    }

    /// Give the lines back
    pub fn release(self) -> (CS, SCK, SDI, SDO, D) {
        (self.csx, self.sck, self.sdi, self.sdo, self.delay)
    }

    fn select(&mut self) -> Result<(), HalError> {
        self.csx.set_low()?;
        self.delay.delay_us(self.timing.select_delay_us);
        Ok(())
    }

    fn deselect(&mut self) -> Result<(), HalError> {
        self.delay.delay_us(self.timing.select_delay_us);
        self.csx.set_high()?;
        self.delay.delay_us(self.timing.select_delay_us);
        Ok(())
    }

    fn shift_out(&mut self, word: u16) -> Result<(), HalError> {
        self.select()?;
        for bit in (0..WRITE_BITS).rev() {
            self.sck.set_low()?;
            self.sdi.set_state(word >> bit & 1 != 0)?;
            self.delay.delay_us(self.timing.bit_delay_us);
            self.sck.set_high()?;
            self.delay.delay_us(self.timing.bit_delay_us);
        }
        self.deselect()
    }

    fn shift_in(&mut self) -> Result<u16, HalError> {
        self.select()?;
        let mut raw = 0u16;
        for _ in 0..READ_BITS {
            self.sck.set_low()?;
            raw = raw << 1 | self.sdo.is_high()? as u16;
            self.delay.delay_us(self.timing.bit_delay_us);
            self.sck.set_high()?;
            self.delay.delay_us(self.timing.bit_delay_us);
        }
        self.deselect()?;
        Ok(raw)
    }
}

impl<CS, SCK, SDI, SDO, D> BridgeTransport for BridgeSpi<CS, SCK, SDI, SDO, D>
where
    CS: OutputPin,
    SCK: OutputPin,
    SDI: OutputPin,
    SDO: InputPin,
    D: Delay,
{
    fn write_bits(&mut self, word: u16) -> Result<(), Error> {
        self.shift_out(word & WORD_MASK).map_err(Error::Transfer)
    }

    fn read_bits(&mut self) -> Result<u16, Error> {
        let raw = self.shift_in().map_err(Error::Transfer)?;
        Ok(decode_read(raw))
    }
}

#[cfg(test)]
mod tests {
    use std::vec::Vec;

    use proptest::prelude::*;

    use super::*;
    use crate::mock::{self, MockDelay, MockPin, Op, Trace};

    type Spi = BridgeSpi<MockPin, MockPin, MockPin, MockPin, MockDelay>;

    fn spi(trace: &Trace) -> Spi {
        BridgeSpi::new(
            MockPin::new("csx", trace),
            MockPin::new("sck", trace),
            MockPin::new("sdi", trace),
            MockPin::new("sdo", trace),
            MockDelay::new(trace),
        )
    }

    /// SDI levels at each rising clock edge
    fn sampled_bits(ops: &[Op]) -> Vec<bool> {
        let mut sdi = false;
        let mut bits = Vec::new();
        for op in ops {
            match op {
                Op::Line("sdi", level) => sdi = *level,
                Op::Line("sck", true) => bits.push(sdi),
                _ => {}
            }
        }
        bits
    }

    fn select_changes(ops: &[Op]) -> Vec<bool> {
        ops.iter()
            .filter_map(|op| match op {
                Op::Line("csx", level) => Some(*level),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_write_framing() {
        let trace = mock::trace();
        let mut spi = spi(&trace);
        spi.write_bits(0x1A5).unwrap();

        let ops = mock::ops(&trace);
        // Select low then settle before the first clock
        assert_eq!(ops[0], Op::Line("csx", false));
        assert_eq!(ops[1], Op::Us(2));
        // Select high only at the very end, with settles around it
        let n = ops.len();
        assert_eq!(&ops[n - 3..], &[Op::Us(2), Op::Line("csx", true), Op::Us(2)]);
        assert_eq!(select_changes(&ops), [false, true]);

        let bits = sampled_bits(&ops);
        assert_eq!(
            bits,
            [true, true, false, true, false, false, true, false, true]
        );
    }

    #[test]
    fn test_bit_timing() {
        let trace = mock::trace();
        let mut spi = spi(&trace);
        spi.write_bits(0x000).unwrap();

        let ops = mock::ops(&trace);
        // One bit: SCK low, SDI, 1 µs, SCK high, 1 µs
        assert_eq!(
            &ops[2..7],
            &[
                Op::Line("sck", false),
                Op::Line("sdi", false),
                Op::Us(1),
                Op::Line("sck", true),
                Op::Us(1),
            ]
        );
        let clocks = ops.iter().filter(|op| **op == Op::Line("sck", true)).count();
        assert_eq!(clocks, 9);
    }

    #[test]
    fn test_custom_timing() {
        let trace = mock::trace();
        let mut spi = BridgeSpi::with_timing(
            MockPin::new("csx", &trace),
            MockPin::new("sck", &trace),
            MockPin::new("sdi", &trace),
            MockPin::new("sdo", &trace),
            MockDelay::new(&trace),
            BusTiming::new(3, 1),
        );
        assert_eq!(spi.timing().select_delay_us, 6);

        spi.write_bits(0x0B0).unwrap();
        let ops = mock::ops(&trace);
        assert_eq!(ops[1], Op::Us(6));
        assert_eq!(ops[4], Op::Us(3));
    }

    #[test]
    fn test_read_swaps_bytes() {
        let trace = mock::trace();
        let mut spi = BridgeSpi::new(
            MockPin::new("csx", &trace),
            MockPin::new("sck", &trace),
            MockPin::new("sdi", &trace),
            // Bridge shifts out 0x25 then 0x28
            MockPin::new("sdo", &trace).with_input(0x2528),
            MockDelay::new(&trace),
        );

        assert_eq!(spi.read_bits().unwrap(), 0x2825);

        let ops = mock::ops(&trace);
        let samples = ops.iter().filter(|op| **op == Op::Sample("sdo")).count();
        assert_eq!(samples, 16);
        assert_eq!(select_changes(&ops), [false, true]);

        // Sampled right after the falling edge
        let first = ops.iter().position(|op| *op == Op::Sample("sdo")).unwrap();
        assert_eq!(ops[first - 1], Op::Line("sck", false));
    }

    #[test]
    fn test_line_error_aborts() {
        let trace = mock::trace();
        let mut spi = BridgeSpi::new(
            MockPin::new("csx", &trace),
            // Fail on the fourth clock edge
            MockPin::new("sck", &trace).failing_at(3),
            MockPin::new("sdi", &trace),
            MockPin::new("sdo", &trace),
            MockDelay::new(&trace),
        );

        assert_eq!(
            spi.write_bits(0x111),
            Err(Error::Transfer(HalError::Io(-5)))
        );

        // Select left asserted, nothing after the failure
        let ops = mock::ops(&trace);
        assert_eq!(select_changes(&ops), [false]);
        assert_eq!(ops.last(), Some(&Op::Us(1)));
    }

    #[test]
    fn test_idle_and_release() {
        let trace = mock::trace();
        let mut spi = spi(&trace);
        spi.idle().unwrap();
        assert_eq!(
            mock::ops(&trace),
            [Op::Line("csx", true), Op::Line("sck", true)]
        );
        let (_csx, _sck, _sdi, _sdo, _delay) = spi.release();
    }

    proptest! {
        #[test]
        fn prop_write_msb_first(word in 0u16..0x200) {
            let trace = mock::trace();
            let mut spi = spi(&trace);
            spi.write_bits(word).unwrap();

            let ops = mock::ops(&trace);
            let bits = sampled_bits(&ops);
            prop_assert_eq!(bits.len(), 9);
            for (i, bit) in bits.iter().enumerate() {
                prop_assert_eq!(*bit, word >> (8 - i) & 1 != 0);
            }
            prop_assert_eq!(select_changes(&ops), [false, true]);
        }

        #[test]
        fn prop_read_is_swapped(raw: u16) {
            let trace = mock::trace();
            let mut spi = BridgeSpi::new(
                MockPin::new("csx", &trace),
                MockPin::new("sck", &trace),
                MockPin::new("sdi", &trace),
                MockPin::new("sdo", &trace).with_input(raw),
                MockDelay::new(&trace),
            );
            prop_assert_eq!(spi.read_bits().unwrap(), raw.swap_bytes());
        }
    }
}
