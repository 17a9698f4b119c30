//! Control loop.
//!
//! Couples the supervisor, the depletion clock, and the intent queue into
//! one serialized step function.  The embedding process decides how time
//! passes (sleep loop, hardware timer, synthetic test time) and calls
//! [`ControlLoop::step`] with the milliseconds elapsed since the last call.
//!
//! Each step:
//! 1. drains every queued intent into the supervisor, re-syncing the clock
//!    after each one so an emergency stop or power-off disarms it at once;
//! 2. advances the clock and, if a tick is due, applies it.  The tick is
//!    still gated by the supervisor, so it cannot drain a device that was
//!    switched off or stopped earlier in the same step.

use log::debug;

use crate::app::commands::Intent;
use crate::app::service::{ControlSupervisor, Outcome};
use crate::config::SupervisorConfig;
use crate::intents::IntentQueue;
use crate::scheduler::DepletionClock;
use crate::state::DeviceState;

pub struct ControlLoop<'q> {
    supervisor: ControlSupervisor,
    clock: DepletionClock,
    queue: &'q IntentQueue,
}

impl<'q> ControlLoop<'q> {
    pub fn new(config: &SupervisorConfig, queue: &'q IntentQueue) -> Self {
        Self::with_supervisor(ControlSupervisor::new(config), config.tick_interval_ms, queue)
    }

    /// Wrap an already-configured supervisor (e.g. with observers attached).
    pub fn with_supervisor(
        supervisor: ControlSupervisor,
        tick_interval_ms: u32,
        queue: &'q IntentQueue,
    ) -> Self {
        let mut clock = DepletionClock::new(tick_interval_ms);
        clock.sync(supervisor.current_state().drains());
        Self {
            supervisor,
            clock,
            queue,
        }
    }

    /// Run one iteration.  Returns the number of intents applied.
    pub fn step(&mut self, elapsed_ms: u32) -> usize {
        let mut applied = 0;
        let queue = self.queue;
        let supervisor = &mut self.supervisor;
        let clock = &mut self.clock;

        queue.drain(|intent| {
            if supervisor.apply(intent) == Outcome::Applied {
                applied += 1;
            }
            clock.sync(supervisor.current_state().drains());
        });

        if self.clock.advance(elapsed_ms) {
            let delta_secs = self.clock.period_secs();
            debug!("Depletion tick ({} s)", delta_secs);
            self.supervisor.apply(Intent::Tick { delta_secs });
            self.clock.sync(self.supervisor.current_state().drains());
        }

        applied
    }

    pub fn state(&self) -> DeviceState {
        self.supervisor.current_state()
    }

    pub fn supervisor(&self) -> &ControlSupervisor {
        &self.supervisor
    }

    pub fn clock_armed(&self) -> bool {
        self.clock.is_armed()
    }
}
