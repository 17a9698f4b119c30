//! Interlock guards.
//!
//! Every intent that has a precondition is checked here before the
//! supervisor touches the state.  The guards are pure functions of the
//! current [`DeviceState`]; they never mutate it.
//!
//! ## Gates
//!
//! | Intent                 | Requires                                  |
//! |------------------------|-------------------------------------------|
//! | `SetPower`             | nothing                                   |
//! | `ToggleConnection`     | powered                                   |
//! | `SetSpeed`             | powered, connected, no emergency stop     |
//! | `BeginMove`            | powered, connected, no emergency stop     |
//! | `EndMove`              | nothing                                   |
//! | `ToggleEmergencyStop`  | nothing                                   |
//! | `Tick`                 | powered, no emergency stop                |
//!
//! When several gates are open at once the first one in the order
//! power → link → emergency stop is reported.

use crate::app::commands::Intent;
use crate::error::Interlock;
use crate::state::DeviceState;

/// Gate for link toggling.
pub fn check_link(state: &DeviceState) -> Result<(), Interlock> {
    if !state.powered {
        return Err(Interlock::PoweredOff);
    }
    Ok(())
}

/// Gate for anything that commands motion or changes the motion profile.
pub fn check_drive(state: &DeviceState) -> Result<(), Interlock> {
    check_link(state)?;
    if !state.connected {
        return Err(Interlock::LinkDown);
    }
    if state.emergency_stopped {
        return Err(Interlock::EmergencyStop);
    }
    Ok(())
}

/// Gate for power depletion.
pub fn check_drain(state: &DeviceState) -> Result<(), Interlock> {
    check_link(state)?;
    if state.emergency_stopped {
        return Err(Interlock::EmergencyStop);
    }
    Ok(())
}

/// Evaluate the gate that applies to `intent`.
pub fn check(intent: &Intent, state: &DeviceState) -> Result<(), Interlock> {
    match intent {
        Intent::SetPower(_) | Intent::EndMove | Intent::ToggleEmergencyStop => Ok(()),
        Intent::ToggleConnection => check_link(state),
        Intent::SetSpeed(_) | Intent::BeginMove(_) => check_drive(state),
        Intent::Tick { .. } => check_drain(state),
    }
}
