//! Blocking delay abstraction
//!
//! Delays are busy or sleeping waits that cannot be cancelled. They are the
//! only suspension points in the bring-up sequence.

/// Blocking delay provider
pub trait Delay {
    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32);

    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1_000);
        }
    }
}

impl<T: Delay + ?Sized> Delay for &mut T {
    fn delay_us(&mut self, us: u32) {
        T::delay_us(self, us)
    }

    fn delay_ms(&mut self, ms: u32) {
        T::delay_ms(self, ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingDelay {
        total_us: u64,
    }

    impl Delay for CountingDelay {
        fn delay_us(&mut self, us: u32) {
            self.total_us += us as u64;
        }
    }

    #[test]
    fn test_default_ms_in_us() {
        let mut delay = CountingDelay { total_us: 0 };
        delay.delay_ms(80);
        assert_eq!(delay.total_us, 80_000);
    }

    #[test]
    fn test_zero_ms_is_noop() {
        let mut delay = CountingDelay { total_us: 0 };
        delay.delay_ms(0);
        assert_eq!(delay.total_us, 0);
    }
}
