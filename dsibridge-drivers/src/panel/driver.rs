//! Generic panel bring-up driver
//!
//! Walks a [`PanelModel`] through the power sequence, one state per step:
//!
//! ```text
//! Unpowered ─► EnableAsserted ─► RegulatorsOn ─► ResetAsserted ─► ResetReleased
//!                                                                      │
//!            DisplayOn ◄─ PanelScripted ◄─ BridgeConfigured ◄──────────┘
//! ```
//!
//! The first failure stops the walk. Nothing is rolled back and the driver
//! refuses to run again; the board must attach it anew.

use heapless::Vec;

use dsibridge_core::config::MAX_SUPPLIES;
use dsibridge_core::script::PanelModel;
use dsibridge_core::traits::{Backlight, BridgeBus, DisplayTiming, NoBacklight, Panel};
use dsibridge_core::{Error, Event, Line, PowerState, ProtocolViolation, SequenceError};
use dsibridge_hal::{Delay, OutputPin, Regulator};

use crate::bridge::{sequencer, verify_device};

/// Panel behind an SSD2825, driven from static model data
pub struct PanelDriver<B, O, R, D, L = NoBacklight> {
    model: &'static PanelModel,
    bus: B,
    enable: O,
    reset: O,
    supplies: Vec<R, MAX_SUPPLIES>,
    delay: D,
    backlight: L,
    state: PowerState,
    /// Target state of the transition that aborted the sequence
    failed: Option<PowerState>,
    check_bridge_id: bool,
}

impl<B, O, R, D> PanelDriver<B, O, R, D, NoBacklight>
where
    B: BridgeBus,
    O: OutputPin,
    R: Regulator,
    D: Delay,
{
    /// Take the panel lines and the bridge bus
    pub fn new(model: &'static PanelModel, bus: B, enable: O, reset: O, delay: D) -> Self {
        Self {
            model,
            bus,
            enable,
            reset,
            supplies: Vec::new(),
            delay,
            backlight: NoBacklight,
            state: PowerState::Unpowered,
            failed: None,
            check_bridge_id: false,
        }
    }
}

impl<B, O, R, D, L> PanelDriver<B, O, R, D, L>
where
    B: BridgeBus,
    O: OutputPin,
    R: Regulator,
    D: Delay,
    L: Backlight,
{
    /// Add a supply; supplies are enabled in the order they are added
    pub fn with_supply(mut self, supply: R) -> Result<Self, Error> {
        self.supplies
            .push(supply)
            .map_err(|_| ProtocolViolation::TooManySupplies)?;
        Ok(self)
    }

    /// Light this backlight once video is running
    pub fn with_backlight<L2: Backlight>(self, backlight: L2) -> PanelDriver<B, O, R, D, L2> {
        PanelDriver {
            model: self.model,
            bus: self.bus,
            enable: self.enable,
            reset: self.reset,
            supplies: self.supplies,
            delay: self.delay,
            backlight,
            state: self.state,
            failed: self.failed,
            check_bridge_id: self.check_bridge_id,
        }
    }

    /// Read back the bridge device id before programming it
    pub fn with_bridge_check(mut self, check: bool) -> Self {
        self.check_bridge_id = check;
        self
    }

    pub fn model(&self) -> &'static PanelModel {
        self.model
    }

    pub fn state(&self) -> PowerState {
        self.state
    }

    /// Run the power sequence up to `DisplayOn`
    ///
    /// Does nothing once the display is on. After a failure every call
    /// returns [`Error::SequenceAborted`].
    pub fn power_on(&mut self) -> Result<(), SequenceError> {
        if let Some(during) = self.failed {
            return Err(SequenceError::new(during, Error::SequenceAborted));
        }

        while let Some(target) = self.state.next() {
            let event = match self.advance() {
                Ok(event) => event,
                Err(cause) => {
                    warn!("{=str}: failed entering {}: {}", self.model.name, target, cause);
                    self.failed = Some(target);
                    return Err(SequenceError::new(target, cause));
                }
            };
            self.state = self.state.transition(event);
            debug!("{=str}: {}", self.model.name, self.state);
        }
        Ok(())
    }

    /// Perform the step out of the current state
    fn advance(&mut self) -> Result<Event, Error> {
        let power = self.model.power;

        match self.state {
            PowerState::Unpowered => {
                self.enable.set_high().map_err(|source| Error::Line {
                    line: Line::PanelEnable,
                    source,
                })?;
                self.delay.delay_ms(power.enable_settle_ms);
                Ok(Event::EnableAsserted)
            }
            PowerState::EnableAsserted => {
                for (index, supply) in self.supplies.iter_mut().enumerate() {
                    supply.enable().map_err(|source| Error::Regulator {
                        index: index as u8,
                        source,
                    })?;
                }
                if power.rails_settle_ms > 0 {
                    self.delay.delay_ms(power.rails_settle_ms);
                }
                Ok(Event::RailsEnabled)
            }
            PowerState::RegulatorsOn => {
                self.reset.set_low().map_err(|source| Error::Line {
                    line: Line::PanelReset,
                    source,
                })?;
                self.delay.delay_ms(power.reset_assert_ms);
                Ok(Event::ResetAsserted)
            }
            PowerState::ResetAsserted => {
                self.reset.set_high().map_err(|source| Error::Line {
                    line: Line::PanelReset,
                    source,
                })?;
                self.delay.delay_ms(power.reset_release_ms);
                Ok(Event::ResetReleased)
            }
            PowerState::ResetReleased => {
                if self.check_bridge_id {
                    verify_device(&mut self.bus)?;
                }
                let setup = &self.model.bridge_setup;
                sequencer::apply_phase(&mut self.bus, &mut self.delay, setup)?;
                Ok(Event::BridgeConfigured)
            }
            PowerState::BridgeConfigured => {
                sequencer::run_script(&mut self.bus, &mut self.delay, &self.model.script)?;
                Ok(Event::ScriptComplete)
            }
            PowerState::PanelScripted => {
                let video = &self.model.video_enable;
                sequencer::apply_phase(&mut self.bus, &mut self.delay, video)?;
                self.backlight.enable()?;
                Ok(Event::VideoEnabled)
            }
            // Already lit
            PowerState::DisplayOn => Ok(Event::VideoEnabled),
        }
    }
}

impl<B, O, R, D, L> Panel for PanelDriver<B, O, R, D, L>
where
    B: BridgeBus,
    O: OutputPin,
    R: Regulator,
    D: Delay,
    L: Backlight,
{
    fn enable_backlight(&mut self) -> Result<(), SequenceError> {
        self.power_on()
    }

    fn set_backlight(&mut self, percent: u8) -> Result<(), Error> {
        self.backlight.set_brightness(percent)
    }

    fn display_timing(&self) -> Option<DisplayTiming> {
        self.model.display_timing()
    }
}

#[cfg(test)]
mod tests {
    use std::vec::Vec;

    use super::*;
    use crate::bridge::Ssd2825;
    use crate::mock::{
        self, MockBacklight, MockDelay, MockPin, MockRegulator, MockTransport, Op, Trace,
    };
    use crate::panel::{R69328, TX13D100VM0EAA};
    use dsibridge_core::script::{
        BridgeConfig, BridgeMode, PanelInitScript, PowerTiming, RegisterWrite, ScriptStep,
    };
    use dsibridge_hal::HalError;
    use dsibridge_protocol::reg;

    type TestDriver<L = NoBacklight> =
        PanelDriver<Ssd2825<MockTransport>, MockPin, MockRegulator, MockDelay, L>;

    fn driver(model: &'static PanelModel, trace: &Trace) -> TestDriver {
        PanelDriver::new(
            model,
            Ssd2825::new(MockTransport::new(trace)),
            MockPin::new("enable", trace),
            MockPin::new("reset", trace),
            MockDelay::new(trace),
        )
    }

    /// Packet payloads in send order, decoded from the word trace
    fn packets(ops: &[Op]) -> Vec<Vec<u8>> {
        let words: Vec<u16> = ops
            .iter()
            .filter_map(|op| match op {
                Op::Word(w) => Some(*w),
                _ => None,
            })
            .collect();

        let mut out = Vec::new();
        let mut i = 0;
        while i < words.len() {
            if words[i] == reg::PACKET_SIZE_CTRL_REG_1 as u16 {
                let len = (words[i + 1] & 0xFF | (words[i + 2] & 0xFF) << 8) as usize;
                assert_eq!(words[i + 3], reg::PACKET_DROP_REG as u16);
                let payload = words[i + 4..i + 4 + len].iter().map(|w| *w as u8).collect();
                out.push(payload);
                i += 4 + len;
            } else {
                i += 1;
            }
        }
        out
    }

    const SMALL_SCRIPT: &[ScriptStep] = &[
        ScriptStep::Mode(BridgeMode::DcsPassthrough),
        ScriptStep::Packet(&[0x11, 0x00]),
        ScriptStep::Delay(80),
        ScriptStep::Packet(&[0x36, 0x00]),
        ScriptStep::Delay(20),
        ScriptStep::Packet(&[0x3A, 0x70]),
    ];

    static SMALL: PanelModel = PanelModel {
        name: "small",
        compatible: &["test,small"],
        power: PowerTiming::new(5, 5),
        bridge_setup: BridgeConfig::new(&[RegisterWrite::new(reg::VC_CTRL_REG, 0)]),
        script: PanelInitScript::new(SMALL_SCRIPT),
        video_enable: BridgeConfig::new(&[]),
    };

    #[test]
    fn test_three_packet_script() {
        let trace = mock::trace();
        let mut panel = driver(&SMALL, &trace);
        panel.power_on().unwrap();
        assert_eq!(panel.state(), PowerState::DisplayOn);

        let ops = mock::ops(&trace);
        assert_eq!(
            packets(&ops),
            [
                std::vec![0x11, 0x00],
                std::vec![0x36, 0x00],
                std::vec![0x3A, 0x70]
            ]
        );

        // Delays sit between the packets
        let first_end = ops.iter().position(|op| *op == Op::Word(0x111)).unwrap() + 1;
        assert_eq!(ops[first_end + 1], Op::Ms(80));
        let second = ops.iter().position(|op| *op == Op::Word(0x136)).unwrap();
        assert_eq!(ops[second + 2], Op::Ms(20));
        assert!(ops.iter().position(|op| *op == Op::Word(0x13A)).unwrap() > second + 2);
    }

    #[test]
    fn test_power_steps_in_order() {
        let trace = mock::trace();
        let mut panel = driver(&TX13D100VM0EAA, &trace)
            .with_supply(MockRegulator::new("vdd", &trace))
            .unwrap();
        panel.power_on().unwrap();

        let ops = mock::ops(&trace);
        assert_eq!(
            &ops[..7],
            &[
                Op::Line("enable", true),
                Op::Ms(5),
                Op::Rail("vdd", true),
                Op::Line("reset", false),
                Op::Ms(5),
                Op::Line("reset", true),
                Op::Ms(5),
            ]
        );
        // First bridge write follows reset release
        assert_eq!(ops[7], Op::Word(reg::RGB_INTERFACE_CTRL_REG_1 as u16));
    }

    #[test]
    fn test_rail_failure_aborts() {
        let trace = mock::trace();
        let mut panel = driver(&TX13D100VM0EAA, &trace)
            .with_supply(MockRegulator::new("vdd", &trace))
            .unwrap()
            .with_supply(MockRegulator::new("avdd", &trace).failing())
            .unwrap();

        let err = panel.power_on().unwrap_err();
        assert_eq!(err.during, PowerState::RegulatorsOn);
        assert_eq!(
            err.cause,
            Error::Regulator {
                index: 1,
                source: HalError::Io(-110)
            }
        );
        assert_eq!(panel.state(), PowerState::EnableAsserted);

        // No reset toggle and no bus traffic after the failure
        let ops = mock::ops(&trace);
        assert_eq!(
            ops,
            [Op::Line("enable", true), Op::Ms(5), Op::Rail("vdd", true)]
        );
    }

    #[test]
    fn test_rerun_after_abort() {
        let trace = mock::trace();
        let mut panel = driver(&TX13D100VM0EAA, &trace)
            .with_supply(MockRegulator::new("vdd", &trace).failing())
            .unwrap();

        assert!(panel.power_on().is_err());
        let before = mock::ops(&trace).len();

        let err = panel.power_on().unwrap_err();
        assert_eq!(err.cause, Error::SequenceAborted);
        assert_eq!(err.during, PowerState::RegulatorsOn);
        assert_eq!(mock::ops(&trace).len(), before);
    }

    #[test]
    fn test_second_power_on_is_noop() {
        let trace = mock::trace();
        let mut panel = driver(&R69328, &trace);
        panel.power_on().unwrap();

        let before = mock::ops(&trace).len();
        panel.power_on().unwrap();
        assert_eq!(mock::ops(&trace).len(), before);
    }

    #[test]
    fn test_enable_line_failure() {
        let trace = mock::trace();
        let mut panel: TestDriver = PanelDriver::new(
            &R69328,
            Ssd2825::new(MockTransport::new(&trace)),
            MockPin::new("enable", &trace).failing_at(0),
            MockPin::new("reset", &trace),
            MockDelay::new(&trace),
        );

        let err = panel.power_on().unwrap_err();
        assert_eq!(err.during, PowerState::EnableAsserted);
        assert!(matches!(
            err.cause,
            Error::Line {
                line: Line::PanelEnable,
                ..
            }
        ));
        assert!(mock::ops(&trace).is_empty());
    }

    #[test]
    fn test_bus_failure_during_script() {
        let trace = mock::trace();
        // Setup phase is 15 writes of 3 words; fail inside the first mode switch
        let bus = Ssd2825::new(MockTransport::new(&trace).failing_at(15 * 3 + 1));
        let mut panel: TestDriver = PanelDriver::new(
            &R69328,
            bus,
            MockPin::new("enable", &trace),
            MockPin::new("reset", &trace),
            MockDelay::new(&trace),
        );

        let err = panel.power_on().unwrap_err();
        assert_eq!(err.during, PowerState::PanelScripted);
        assert_eq!(err.cause, Error::Transfer(HalError::Io(-5)));
        assert_eq!(panel.state(), PowerState::BridgeConfigured);
    }

    #[test]
    fn test_video_phase_then_backlight() {
        let trace = mock::trace();
        let mut panel = driver(&R69328, &trace).with_backlight(MockBacklight::new(&trace));
        panel.power_on().unwrap();

        let ops = mock::ops(&trace);
        let n = ops.len();
        assert_eq!(ops[n - 1], Op::Backlight(100));
        // Video mode 0x0309 written last before the backlight
        assert_eq!(
            &ops[n - 4..n - 1],
            &[Op::Word(0x0B7), Op::Word(0x109), Op::Word(0x103)]
        );
    }

    #[test]
    fn test_backlight_failure() {
        let trace = mock::trace();
        let mut panel = driver(&R69328, &trace)
            .with_backlight(MockBacklight::new(&trace).failing());

        let err = panel.power_on().unwrap_err();
        assert_eq!(err.during, PowerState::DisplayOn);
        assert_eq!(panel.state(), PowerState::PanelScripted);
    }

    #[test]
    fn test_bridge_check() {
        let trace = mock::trace();
        let bus = Ssd2825::new(MockTransport::new(&trace).with_read(0x1234));
        let mut panel: TestDriver = PanelDriver::new(
            &R69328,
            bus,
            MockPin::new("enable", &trace),
            MockPin::new("reset", &trace),
            MockDelay::new(&trace),
        )
        .with_bridge_check(true);

        let err = panel.power_on().unwrap_err();
        assert_eq!(err.during, PowerState::BridgeConfigured);
        assert_eq!(err.cause, Error::WrongDevice(0x1234));
    }

    #[test]
    fn test_too_many_supplies() {
        let trace = mock::trace();
        let mut panel = driver(&TX13D100VM0EAA, &trace);
        for _ in 0..MAX_SUPPLIES {
            panel = panel.with_supply(MockRegulator::new("vdd", &trace)).unwrap();
        }
        assert!(matches!(
            panel.with_supply(MockRegulator::new("vdd", &trace)),
            Err(Error::Protocol(ProtocolViolation::TooManySupplies))
        ));
    }

    #[test]
    fn test_panel_trait() {
        let trace = mock::trace();
        let mut panel =
            driver(&TX13D100VM0EAA, &trace).with_backlight(MockBacklight::new(&trace));

        let timing = Panel::display_timing(&panel).unwrap();
        assert_eq!(timing.hactive, 768);

        Panel::enable_backlight(&mut panel).unwrap();
        panel.set_backlight(40).unwrap();
        assert_eq!(mock::ops(&trace).last(), Some(&Op::Backlight(40)));
    }
}
