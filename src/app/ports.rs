//! Port traits: the hexagonal boundary between the control core and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ControlSupervisor (domain)
//! ```
//!
//! Driven adapters (renderers, loggers, the drive bridge) implement these
//! traits.  The supervisor holds event sinks as boxed trait objects in its
//! observer registry, so it never touches a display or a motor directly.

use crate::state::Direction;

use super::events::StateChange;

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → renderer / logging)
// ───────────────────────────────────────────────────────────────

/// Receives one [`StateChange`] per applied transition.
///
/// Implementations run synchronously inside the control loop and must not
/// block.
pub trait EventSink {
    fn emit(&mut self, change: &StateChange);
}

// ───────────────────────────────────────────────────────────────
// Drive port (driven adapter: domain → motor controller / radio)
// ───────────────────────────────────────────────────────────────

/// Outbound motion commands.
///
/// Only [`DriveBridge`](crate::adapters::drive_bridge::DriveBridge) calls
/// this port, and only while every interlock is closed.
pub trait DrivePort {
    /// Run in `direction` at `speed` percent (0–100).
    fn drive(&mut self, direction: Direction, speed: u8);

    /// Stop all motion immediately.
    fn halt(&mut self);
}
