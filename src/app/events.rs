//! Outbound state-change notifications.
//!
//! The [`ControlSupervisor`](super::service::ControlSupervisor) emits one
//! [`StateChange`] through every registered
//! [`EventSink`](super::ports::EventSink) after each applied intent.
//! Rejected and no-op intents emit nothing.

use crate::state::DeviceState;

use super::commands::Intent;

/// One applied transition: the intent that caused it and the snapshots on
/// either side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateChange {
    pub intent: Intent,
    pub previous: DeviceState,
    pub current: DeviceState,
}

impl StateChange {
    /// Motion was active before and is not now.
    pub fn motion_ended(&self) -> bool {
        self.previous.active_movement.is_some() && self.current.active_movement.is_none()
    }

    /// The device lost power in this transition (operator or depletion policy).
    pub fn powered_down(&self) -> bool {
        self.previous.powered && !self.current.powered
    }

    /// Direction or speed differ between the two snapshots.
    pub fn drive_profile_changed(&self) -> bool {
        self.previous.active_movement != self.current.active_movement
            || self.previous.speed_setting != self.current.speed_setting
    }
}
