//! Test doubles sharing one ordered trace

use core::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

use dsibridge_core::traits::{Backlight, BridgeTransport};
use dsibridge_core::Error;
use dsibridge_hal::{Delay, HalError, I2cBus, InputPin, OutputPin, Regulator, ResourceLookup};

/// Something that happened on the mocked hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Line(&'static str, bool),
    Sample(&'static str),
    Us(u32),
    Ms(u32),
    Rail(&'static str, bool),
    Word(u16),
    Read,
    I2c(u8, u8, u8),
    Backlight(u8),
}

pub type Trace = Rc<RefCell<Vec<Op>>>;

pub fn trace() -> Trace {
    Rc::new(RefCell::new(Vec::new()))
}

/// Copy of the trace so far
pub fn ops(trace: &Trace) -> Vec<Op> {
    trace.borrow().clone()
}

/// 9-bit words written so far, in order
pub fn words(trace: &Trace) -> Vec<u16> {
    trace
        .borrow()
        .iter()
        .filter_map(|op| match op {
            Op::Word(w) => Some(*w),
            _ => None,
        })
        .collect()
}

pub struct MockPin {
    name: &'static str,
    trace: Trace,
    /// Fail the n-th operation (0-based)
    fail_at: Option<usize>,
    count: usize,
    input: VecDeque<bool>,
}

impl MockPin {
    pub fn new(name: &'static str, trace: &Trace) -> Self {
        Self {
            name,
            trace: trace.clone(),
            fail_at: None,
            count: 0,
            input: VecDeque::new(),
        }
    }

    pub fn failing_at(mut self, n: usize) -> Self {
        self.fail_at = Some(n);
        self
    }

    /// Levels returned by successive samples, MSB first
    pub fn with_input(mut self, value: u16) -> Self {
        for bit in (0..16).rev() {
            self.input.push_back(value >> bit & 1 != 0);
        }
        self
    }

    fn tick(&mut self) -> Result<(), HalError> {
        let n = self.count;
        self.count += 1;
        if self.fail_at == Some(n) {
            return Err(HalError::Io(-5));
        }
        Ok(())
    }
}

impl OutputPin for MockPin {
    fn set_high(&mut self) -> Result<(), HalError> {
        self.tick()?;
        self.trace.borrow_mut().push(Op::Line(self.name, true));
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), HalError> {
        self.tick()?;
        self.trace.borrow_mut().push(Op::Line(self.name, false));
        Ok(())
    }
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, HalError> {
        self.tick()?;
        self.trace.borrow_mut().push(Op::Sample(self.name));
        Ok(self.input.pop_front().unwrap_or(false))
    }
}

#[derive(Clone)]
pub struct MockDelay {
    trace: Trace,
}

impl MockDelay {
    pub fn new(trace: &Trace) -> Self {
        Self {
            trace: trace.clone(),
        }
    }
}

impl Delay for MockDelay {
    fn delay_us(&mut self, us: u32) {
        self.trace.borrow_mut().push(Op::Us(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.trace.borrow_mut().push(Op::Ms(ms));
    }
}

pub struct MockRegulator {
    name: &'static str,
    trace: Trace,
    fail: bool,
}

impl MockRegulator {
    pub fn new(name: &'static str, trace: &Trace) -> Self {
        Self {
            name,
            trace: trace.clone(),
            fail: false,
        }
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl Regulator for MockRegulator {
    fn enable(&mut self) -> Result<(), HalError> {
        if self.fail {
            return Err(HalError::Io(-110));
        }
        self.trace.borrow_mut().push(Op::Rail(self.name, true));
        Ok(())
    }

    fn disable(&mut self) -> Result<(), HalError> {
        self.trace.borrow_mut().push(Op::Rail(self.name, false));
        Ok(())
    }
}

/// Transport recording words instead of toggling lines
pub struct MockTransport {
    trace: Trace,
    fail_at: Option<usize>,
    count: usize,
    reads: VecDeque<u16>,
}

impl MockTransport {
    pub fn new(trace: &Trace) -> Self {
        Self {
            trace: trace.clone(),
            fail_at: None,
            count: 0,
            reads: VecDeque::new(),
        }
    }

    /// Fail the n-th write (0-based)
    pub fn failing_at(mut self, n: usize) -> Self {
        self.fail_at = Some(n);
        self
    }

    pub fn with_read(mut self, value: u16) -> Self {
        self.reads.push_back(value);
        self
    }
}

impl BridgeTransport for MockTransport {
    fn write_bits(&mut self, word: u16) -> Result<(), Error> {
        let n = self.count;
        self.count += 1;
        if self.fail_at == Some(n) {
            return Err(Error::Transfer(HalError::Io(-5)));
        }
        self.trace.borrow_mut().push(Op::Word(word));
        Ok(())
    }

    fn read_bits(&mut self) -> Result<u16, Error> {
        self.trace.borrow_mut().push(Op::Read);
        Ok(self.reads.pop_front().unwrap_or(0))
    }
}

pub struct MockBacklight {
    trace: Trace,
    fail: bool,
}

impl MockBacklight {
    pub fn new(trace: &Trace) -> Self {
        Self {
            trace: trace.clone(),
            fail: false,
        }
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl Backlight for MockBacklight {
    fn enable(&mut self) -> Result<(), Error> {
        if self.fail {
            return Err(Error::Backlight(HalError::Io(-6)));
        }
        self.trace.borrow_mut().push(Op::Backlight(100));
        Ok(())
    }

    fn set_brightness(&mut self, percent: u8) -> Result<(), Error> {
        self.trace.borrow_mut().push(Op::Backlight(percent));
        Ok(())
    }
}

pub struct MockI2c {
    trace: Trace,
    fail_at: Option<usize>,
    count: usize,
}

impl MockI2c {
    pub fn new(trace: &Trace) -> Self {
        Self {
            trace: trace.clone(),
            fail_at: None,
            count: 0,
        }
    }

    pub fn failing_at(mut self, n: usize) -> Self {
        self.fail_at = Some(n);
        self
    }
}

impl I2cBus for MockI2c {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), HalError> {
        let n = self.count;
        self.count += 1;
        if self.fail_at == Some(n) {
            return Err(HalError::Io(-6));
        }
        if let &[reg, value] = data {
            self.trace.borrow_mut().push(Op::I2c(address, reg, value));
        }
        Ok(())
    }

    fn write_read(
        &mut self,
        _address: u8,
        _write: &[u8],
        read: &mut [u8],
    ) -> Result<(), HalError> {
        read.fill(0);
        Ok(())
    }
}

/// Names the mock board can resolve
const BOARD: [&str; 13] = [
    "csx",
    "sck",
    "sdi",
    "sdo",
    "enable",
    "reset",
    "vdd",
    "avdd",
    "vio",
    "vled",
    "bridge-enable",
    "bridge-reset",
    "backlight-enable",
];

/// Board lookup handing out mocks on a shared trace
pub struct MockLookup {
    trace: Trace,
    missing: Option<&'static str>,
}

impl MockLookup {
    pub fn new(trace: &Trace) -> Self {
        Self {
            trace: trace.clone(),
            missing: None,
        }
    }

    /// Pretend the board lacks this resource
    pub fn without(mut self, name: &'static str) -> Self {
        self.missing = Some(name);
        self
    }

    fn find(&self, name: &str) -> Result<&'static str, HalError> {
        if self.missing == Some(name) {
            return Err(HalError::NotFound);
        }
        BOARD
            .iter()
            .copied()
            .find(|known| *known == name)
            .ok_or(HalError::NotFound)
    }
}

impl ResourceLookup for MockLookup {
    type Output = MockPin;
    type Input = MockPin;
    type Regulator = MockRegulator;

    fn request_output(&mut self, name: &str) -> Result<MockPin, HalError> {
        Ok(MockPin::new(self.find(name)?, &self.trace))
    }

    fn request_input(&mut self, name: &str) -> Result<MockPin, HalError> {
        Ok(MockPin::new(self.find(name)?, &self.trace))
    }

    fn request_regulator(&mut self, name: &str) -> Result<MockRegulator, HalError> {
        Ok(MockRegulator::new(self.find(name)?, &self.trace))
    }
}
