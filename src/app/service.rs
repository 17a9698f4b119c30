//! Control supervisor: the hexagonal core.
//!
//! [`ControlSupervisor`] owns the [`DeviceState`] and is the only code that
//! mutates it.  Every intent is checked against the interlock gates first;
//! a failed gate is a silent no-op that leaves the state untouched and
//! notifies nobody.  Applied transitions are reported to every registered
//! [`EventSink`] exactly once.
//!
//! ```text
//!  Intent ──▶ ┌───────────────────────────┐ ──▶ EventSink (renderer, log)
//!             │     ControlSupervisor      │
//!  Tick   ──▶ │  interlocks · transitions  │ ──▶ EventSink (drive bridge)
//!             └───────────────────────────┘
//! ```

use log::{debug, info, warn};

use crate::config::{DepletionPolicy, SupervisorConfig};
use crate::error::{Error, Interlock};
use crate::interlock;
use crate::state::{DeviceState, Direction, PERCENT_MAX};

use super::commands::Intent;
use super::events::StateChange;
use super::ports::EventSink;

/// Maximum number of simultaneously registered observers.
pub const MAX_OBSERVERS: usize = 4;

/// Handle returned by [`ControlSupervisor::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u32);

/// Result of applying one intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The state changed; observers were notified.
    Applied,
    /// Preconditions held but nothing changed (e.g. `EndMove` while idle).
    Unchanged,
    /// A precondition failed; the state is untouched.
    Rejected(Interlock),
}

impl Outcome {
    pub fn is_rejected(self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

type Observer = (ObserverId, Box<dyn EventSink + Send>);

// ───────────────────────────────────────────────────────────────
// ControlSupervisor
// ───────────────────────────────────────────────────────────────

/// Sole authority over the device state.
pub struct ControlSupervisor {
    state: DeviceState,
    drain_rate_per_sec: f32,
    depletion_policy: DepletionPolicy,
    observers: heapless::Vec<Observer, MAX_OBSERVERS>,
    next_observer: u32,
    applied_count: u64,
    rejected_count: u64,
}

impl Default for ControlSupervisor {
    fn default() -> Self {
        Self::new(&SupervisorConfig::default())
    }
}

impl ControlSupervisor {
    /// Construct the supervisor in its power-on-reset state.
    ///
    /// `config` is expected to have passed [`SupervisorConfig::validate`];
    /// the initial level and speed are clamped regardless.
    pub fn new(config: &SupervisorConfig) -> Self {
        let initial = config.initial_power_level;
        let state = DeviceState {
            power_level: if initial.is_finite() {
                initial.clamp(0.0, f32::from(PERCENT_MAX))
            } else {
                DeviceState::default().power_level
            },
            speed_setting: config.default_speed.min(PERCENT_MAX),
            ..DeviceState::default()
        };
        info!(
            "Supervisor ready: level={:.1}% speed={}% drain={}/s policy={:?}",
            state.power_level, state.speed_setting, config.drain_rate_per_sec, config.depletion_policy
        );
        Self {
            state,
            drain_rate_per_sec: config.drain_rate_per_sec.max(0.0),
            depletion_policy: config.depletion_policy,
            observers: heapless::Vec::new(),
            next_observer: 0,
            applied_count: 0,
            rejected_count: 0,
        }
    }

    // ── Observers ─────────────────────────────────────────────

    /// Register an observer.  It is called after every applied transition.
    pub fn subscribe(&mut self, sink: Box<dyn EventSink + Send>) -> Result<ObserverId, Error> {
        let id = ObserverId(self.next_observer);
        self.observers
            .push((id, sink))
            .map_err(|_| Error::ObserverLimit)?;
        self.next_observer = self.next_observer.wrapping_add(1);
        debug!("Observer {:?} subscribed ({} total)", id, self.observers.len());
        Ok(id)
    }

    /// Remove an observer.  Returns `false` if the id is unknown.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        match self.observers.iter().position(|(oid, _)| *oid == id) {
            Some(idx) => {
                self.observers.remove(idx);
                true
            }
            None => false,
        }
    }

    // ── Intent handling ───────────────────────────────────────

    /// Validate and apply one intent.
    pub fn apply(&mut self, intent: Intent) -> Outcome {
        if let Err(reason) = interlock::check(&intent, &self.state) {
            self.rejected_count += 1;
            debug!("Rejected '{}': {}", intent, reason);
            return Outcome::Rejected(reason);
        }

        let previous = self.state;
        let mut next = previous;

        match intent {
            Intent::SetPower(on) => {
                next.powered = on;
                if !on {
                    next.connected = false;
                    next.active_movement = None;
                }
            }
            Intent::ToggleConnection => {
                next.connected = !next.connected;
                if !next.connected {
                    next.active_movement = None;
                }
            }
            Intent::SetSpeed(value) => {
                next.speed_setting = value.clamp(0, i32::from(PERCENT_MAX)) as u8;
            }
            Intent::BeginMove(direction) => {
                next.active_movement = Some(direction);
            }
            Intent::EndMove => {
                next.active_movement = None;
            }
            Intent::ToggleEmergencyStop => {
                next.emergency_stopped = !next.emergency_stopped;
                next.active_movement = None;
            }
            Intent::Tick { delta_secs } => {
                self.deplete(&mut next, delta_secs);
            }
        }

        if next == previous {
            debug!("'{}' left the state unchanged", intent);
            return Outcome::Unchanged;
        }

        self.state = next;
        self.applied_count += 1;
        let change = StateChange {
            intent,
            previous,
            current: next,
        };
        for (_, sink) in &mut self.observers {
            sink.emit(&change);
        }
        Outcome::Applied
    }

    /// Switch power on or off.  Off also drops the link and any motion.
    pub fn set_power(&mut self, on: bool) -> DeviceState {
        self.apply(Intent::SetPower(on));
        self.state
    }

    /// Flip the link.  No-op unless powered.
    pub fn toggle_connection(&mut self) -> DeviceState {
        self.apply(Intent::ToggleConnection);
        self.state
    }

    /// Set the speed, clamped to 0–100.  No-op unless motion is permitted.
    pub fn set_speed(&mut self, value: i32) -> DeviceState {
        self.apply(Intent::SetSpeed(value));
        self.state
    }

    /// Start or redirect motion.  No-op unless motion is permitted.
    pub fn begin_move(&mut self, direction: Direction) -> DeviceState {
        self.apply(Intent::BeginMove(direction));
        self.state
    }

    /// Release motion.
    pub fn end_move(&mut self) -> DeviceState {
        self.apply(Intent::EndMove);
        self.state
    }

    /// Flip the emergency stop.  Motion is cleared either way.
    pub fn toggle_emergency_stop(&mut self) -> DeviceState {
        self.apply(Intent::ToggleEmergencyStop);
        self.state
    }

    /// Deplete power for `delta_secs` of elapsed time.  No-op unless
    /// powered and not emergency-stopped.
    pub fn tick(&mut self, delta_secs: f32) -> DeviceState {
        self.apply(Intent::Tick { delta_secs });
        self.state
    }

    // ── Queries ───────────────────────────────────────────────

    /// Snapshot of the current state.
    pub fn current_state(&self) -> DeviceState {
        self.state
    }

    /// Number of applied transitions since construction.
    pub fn applied_count(&self) -> u64 {
        self.applied_count
    }

    /// Number of rejected intents since construction.
    pub fn rejected_count(&self) -> u64 {
        self.rejected_count
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    // ── Internal ──────────────────────────────────────────────

    /// Linear decay floored at zero.  Negative or non-finite deltas count
    /// as no elapsed time.
    fn deplete(&self, next: &mut DeviceState, delta_secs: f32) {
        let delta = if delta_secs.is_finite() { delta_secs.max(0.0) } else { 0.0 };
        next.power_level = (next.power_level - self.drain_rate_per_sec * delta).max(0.0);

        if next.power_level <= 0.0 && self.depletion_policy == DepletionPolicy::PowerOff {
            warn!("Power source depleted, switching off");
            next.powered = false;
            next.connected = false;
            next.active_movement = None;
        }
    }
}
