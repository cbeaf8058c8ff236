//! TI LM3533 LED backlight controller (I2C)
//!
//! Both HVLED strings run from control bank A in linear register current
//! mode. Enabling programs the bank and a default level; brightness is
//! then written as a fraction of the full 8-bit range.

use dsibridge_core::traits::backlight::check_percent;
use dsibridge_core::traits::Backlight;
use dsibridge_core::{Error, Line};
use dsibridge_hal::{Delay, I2cBus, OutputPin};

/// LM3533 register addresses
pub mod reg {
    /// HVLED 1 and 2 bank assignment
    pub const HVLED_OUTPUT_CONFIG: u8 = 0x10;
    /// PWM input routing
    pub const PWM_CONFIG_BANK_A: u8 = 0x14;
    /// Bank A control mode (linear/exponential, register/ALS)
    pub const CTRL_BANK_A_MODE: u8 = 0x1A;
    /// Bank A full-scale current
    pub const CTRL_BANK_A_FULL_SCALE: u8 = 0x1F;
    /// Control bank enables
    pub const CTRL_BANK_ENABLE: u8 = 0x27;
    /// Overvoltage and boost frequency
    pub const BOOST_CONFIG: u8 = 0x2C;
    /// Bank A brightness
    pub const BRIGHTNESS_BANK_A: u8 = 0x40;
}

/// Brightness programmed on enable
pub const DEFAULT_BRIGHTNESS: u8 = 0x71;

/// Largest brightness register value
pub const MAX_BRIGHTNESS: u8 = 0xFF;

/// Settle time after the enable line goes high, in ms
const ENABLE_SETTLE_MS: u32 = 5;

/// Register writes performed on enable, in order
const INIT: [(u8, u8); 7] = [
    // HVLED 1 and 2 on bank A
    (reg::HVLED_OUTPUT_CONFIG, 0x00),
    // No PWM input
    (reg::PWM_CONFIG_BANK_A, 0x00),
    // Linear, register current control
    (reg::CTRL_BANK_A_MODE, 0x02),
    // 20.2 mA
    (reg::CTRL_BANK_A_FULL_SCALE, 0x13),
    (reg::CTRL_BANK_ENABLE, 0x01),
    (reg::BOOST_CONFIG, 0x0A),
    (reg::BRIGHTNESS_BANK_A, DEFAULT_BRIGHTNESS),
];

pub struct Lm3533<I, O, D> {
    i2c: I,
    address: u8,
    enable: O,
    delay: D,
    enabled: bool,
}

impl<I, O, D> Lm3533<I, O, D>
where
    I: I2cBus,
    O: OutputPin,
    D: Delay,
{
    pub fn new(i2c: I, address: u8, enable: O, delay: D) -> Self {
        Self {
            i2c,
            address,
            enable,
            delay,
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn write(&mut self, register: u8, value: u8) -> Result<(), Error> {
        self.i2c
            .write_reg(self.address, register, value)
            .map_err(|source| {
                warn!("lm3533 write {=u8:#x} failed", register);
                Error::Backlight(source)
            })
    }
}

/// Brightness register value for a percentage
pub const fn brightness_level(percent: u8) -> u8 {
    (percent as u16 * MAX_BRIGHTNESS as u16 / 100) as u8
}

impl<I, O, D> Backlight for Lm3533<I, O, D>
where
    I: I2cBus,
    O: OutputPin,
    D: Delay,
{
    fn enable(&mut self) -> Result<(), Error> {
        self.enable.set_high().map_err(|source| Error::Line {
            line: Line::BacklightEnable,
            source,
        })?;
        self.delay.delay_ms(ENABLE_SETTLE_MS);

        for (register, value) in INIT {
            self.write(register, value)?;
        }
        self.enabled = true;
        Ok(())
    }

    fn set_brightness(&mut self, percent: u8) -> Result<(), Error> {
        let percent = check_percent(percent)?;
        if !self.enabled {
            // Level is programmed on enable
            return Ok(());
        }
        self.write(reg::BRIGHTNESS_BANK_A, brightness_level(percent))
    }
}
