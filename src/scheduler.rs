//! Depletion timer.
//!
//! A cancellable fixed-cadence clock for the power-depletion tick.  It is
//! driven by elapsed milliseconds supplied by the caller, so the same
//! logic runs under the simulator's sleep loop, a hardware timer, or a
//! test that feeds synthetic time.
//!
//! ```text
//!   sync(true)            advance(dt)…            sync(false)
//!  ───┬────────────┬────────────┬────────────┬──────┬──────────
//!     armed        fire         fire         fire   disarmed
//!     (phase = 0)  (+1 period)  (+2 periods) …      (no further fires)
//! ```
//!
//! Arming restarts the phase, so the first tick lands one full period
//! after the device becomes eligible to drain.  Long gaps fire a single
//! tick; missed periods are not caught up.

use log::{debug, info};

/// Smallest accepted period.
const MIN_PERIOD_MS: u32 = 1;

/// Periodic tick source for power depletion.
#[derive(Debug, Clone)]
pub struct DepletionClock {
    period_ms: u32,
    armed: bool,
    /// Milliseconds accumulated since the last fire (or since arming).
    elapsed_ms: u32,
    /// Total fires since construction.
    fired: u64,
}

impl DepletionClock {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms: period_ms.max(MIN_PERIOD_MS),
            armed: false,
            elapsed_ms: 0,
            fired: 0,
        }
    }

    /// Arm or disarm according to whether the device is draining.
    ///
    /// Calling with the current value is a no-op; a fresh arm resets the
    /// phase.
    pub fn sync(&mut self, draining: bool) {
        match (self.armed, draining) {
            (false, true) => {
                self.armed = true;
                self.elapsed_ms = 0;
                info!("Depletion clock armed ({} ms period)", self.period_ms);
            }
            (true, false) => {
                self.armed = false;
                self.elapsed_ms = 0;
                info!("Depletion clock disarmed");
            }
            _ => {}
        }
    }

    /// Account for `dt_ms` of elapsed time.  Returns `true` when a tick is
    /// due.  At most one tick is reported per call.
    pub fn advance(&mut self, dt_ms: u32) -> bool {
        if !self.armed {
            return false;
        }
        let total = self.elapsed_ms.saturating_add(dt_ms);
        if total < self.period_ms {
            self.elapsed_ms = total;
            return false;
        }
        if total >= self.period_ms.saturating_mul(2) {
            debug!("Depletion clock: {} ms gap, skipping missed ticks", total);
        }
        self.elapsed_ms = total % self.period_ms;
        self.fired += 1;
        true
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Tick period in seconds, the delta handed to each depletion tick.
    pub fn period_secs(&self) -> f32 {
        self.period_ms as f32 / 1000.0
    }

    pub fn fired(&self) -> u64 {
        self.fired
    }
}
