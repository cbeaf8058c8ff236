//! GPIO line abstractions
//!
//! Provides traits for digital input and output lines. Every operation can
//! fail: on the boards this stack targets the lines sit behind a GPIO
//! controller driver that reports errors, and callers must propagate them.

use crate::HalError;

/// Digital output line
pub trait OutputPin {
    /// Drive the line high (logic 1)
    fn set_high(&mut self) -> Result<(), HalError>;

    /// Drive the line low (logic 0)
    fn set_low(&mut self) -> Result<(), HalError>;

    /// Drive the line to a specific level
    fn set_state(&mut self, high: bool) -> Result<(), HalError> {
        if high {
            self.set_high()
        } else {
            self.set_low()
        }
    }
}

/// Digital input line
pub trait InputPin {
    /// Sample the line, `true` for logic 1
    ///
    /// Takes `&mut self` because some controllers latch on read.
    fn is_high(&mut self) -> Result<bool, HalError>;

    /// Sample the line, `true` for logic 0
    fn is_low(&mut self) -> Result<bool, HalError> {
        self.is_high().map(|high| !high)
    }
}

impl<T: OutputPin + ?Sized> OutputPin for &mut T {
    fn set_high(&mut self) -> Result<(), HalError> {
        T::set_high(self)
    }

    fn set_low(&mut self) -> Result<(), HalError> {
        T::set_low(self)
    }
}

impl<T: InputPin + ?Sized> InputPin for &mut T {
    fn is_high(&mut self) -> Result<bool, HalError> {
        T::is_high(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPin {
        high: bool,
        fail: bool,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) -> Result<(), HalError> {
            if self.fail {
                return Err(HalError::Io(-5));
            }
            self.high = true;
            Ok(())
        }

        fn set_low(&mut self) -> Result<(), HalError> {
            if self.fail {
                return Err(HalError::Io(-5));
            }
            self.high = false;
            Ok(())
        }
    }

    impl InputPin for MockPin {
        fn is_high(&mut self) -> Result<bool, HalError> {
            Ok(self.high)
        }
    }

    #[test]
    fn test_set_state() {
        let mut pin = MockPin {
            high: false,
            fail: false,
        };

        pin.set_state(true).unwrap();
        assert!(pin.is_high().unwrap());

        pin.set_state(false).unwrap();
        assert!(pin.is_low().unwrap());
    }

    #[test]
    fn test_error_propagates() {
        let mut pin = MockPin {
            high: false,
            fail: true,
        };

        assert_eq!(pin.set_state(true), Err(HalError::Io(-5)));
    }

    #[test]
    fn test_mut_ref_forwarding() {
        let mut pin = MockPin {
            high: false,
            fail: false,
        };

        fn drive<P: OutputPin>(mut p: P) {
            p.set_high().unwrap();
        }

        drive(&mut pin);
        assert!(pin.high);
    }
}
