//! Drive bridge adapter.
//!
//! Subscribes to the supervisor as an [`EventSink`] and turns state
//! changes into [`DrivePort`] commands:
//!
//! - motion permitted and direction or speed changed → `drive(dir, speed)`
//! - motion ended for any reason (release, e-stop, link loss, power-off) → `halt()`
//!
//! The bridge re-checks the interlocks on the new snapshot before every
//! `drive` call, so no motion command can reach the port while power is
//! off, the link is down, or the emergency stop is asserted.

use log::{info, warn};

use crate::app::events::StateChange;
use crate::app::ports::{DrivePort, EventSink};
use crate::interlock;
use crate::state::Direction;

/// Forwards motion to a [`DrivePort`].
pub struct DriveBridge<D: DrivePort> {
    port: D,
}

impl<D: DrivePort> DriveBridge<D> {
    pub fn new(port: D) -> Self {
        Self { port }
    }

    pub fn port(&self) -> &D {
        &self.port
    }

    pub fn into_inner(self) -> D {
        self.port
    }
}

impl<D: DrivePort> EventSink for DriveBridge<D> {
    fn emit(&mut self, change: &StateChange) {
        let current = &change.current;

        match current.active_movement {
            Some(direction) => {
                if let Err(reason) = interlock::check_drive(current) {
                    // Unreachable through the supervisor; halt rather than trust it.
                    warn!("Drive bridge: motion with open interlock ({}), halting", reason);
                    self.port.halt();
                    return;
                }
                if change.drive_profile_changed() {
                    self.port.drive(direction, current.speed_setting);
                }
            }
            None => {
                if change.motion_ended() {
                    self.port.halt();
                }
            }
        }
    }
}

// ───────────────────────────────────────────────────────────────
// LogDrive
// ───────────────────────────────────────────────────────────────

/// [`DrivePort`] for the simulator: logs each command instead of
/// energising a motor.
#[derive(Default)]
pub struct LogDrive;

impl LogDrive {
    pub fn new() -> Self {
        Self
    }
}

impl DrivePort for LogDrive {
    fn drive(&mut self, direction: Direction, speed: u8) {
        info!("DRIVE | {} @ {}%", direction, speed);
    }

    fn halt(&mut self) {
        info!("DRIVE | halt");
    }
}
