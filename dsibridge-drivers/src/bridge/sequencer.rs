//! Bridge phase and panel script sequencing
//!
//! Both functions check their table before the first write, then apply it
//! strictly in order and stop at the first failure. Nothing is read back.

use dsibridge_core::script::{BridgeConfig, BridgeMode, PanelInitScript, ScriptStep};
use dsibridge_core::traits::BridgeBus;
use dsibridge_core::Error;
use dsibridge_hal::Delay;

/// Apply one bridge register phase
pub fn apply_phase<B, D>(bus: &mut B, delay: &mut D, phase: &BridgeConfig) -> Result<(), Error>
where
    B: BridgeBus,
    D: Delay,
{
    if let Err(violation) = phase.check_order() {
        warn!("bridge phase rejected: {}", violation);
        return Err(violation.into());
    }

    for write in phase.writes {
        bus.write_register(write.register, write.value)?;
    }

    if phase.settle_ms > 0 {
        delay.delay_ms(phase.settle_ms);
    }
    Ok(())
}

/// Switch the bridge packet routing mode
pub fn set_mode<B: BridgeBus>(bus: &mut B, mode: BridgeMode) -> Result<(), Error> {
    for write in mode.writes() {
        bus.write_register(write.register, write.value)?;
    }
    Ok(())
}

/// Deliver a panel init script
pub fn run_script<B, D>(bus: &mut B, delay: &mut D, script: &PanelInitScript) -> Result<(), Error>
where
    B: BridgeBus,
    D: Delay,
{
    script.validate()?;

    for step in script.steps {
        match *step {
            ScriptStep::Packet(bytes) => bus.send_command_packet(bytes)?,
            ScriptStep::Delay(ms) => delay.delay_ms(ms),
            ScriptStep::Register(write) => bus.write_register(write.register, write.value)?,
            ScriptStep::Mode(mode) => set_mode(bus, mode)?,
        }
    }
    Ok(())
}
