//! Mock drive adapter for integration tests.
//!
//! Records every drive command so tests can assert on the full command
//! history without a motor controller.

use std::sync::{Arc, Mutex};

use wheelchair::app::ports::DrivePort;
use wheelchair::state::Direction;

// ── Drive call record ─────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum DriveCall {
    Drive { direction: Direction, speed: u8 },
    Halt,
}

// ── MockDrive ─────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockDrive {
    calls: Arc<Mutex<Vec<DriveCall>>>,
}

#[allow(dead_code)]
impl MockDrive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<DriveCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> Option<DriveCall> {
        self.calls.lock().unwrap().last().cloned()
    }

    /// Whether the most recent command left the motors running.
    pub fn moving(&self) -> bool {
        matches!(self.last_call(), Some(DriveCall::Drive { .. }))
    }
}

impl DrivePort for MockDrive {
    fn drive(&mut self, direction: Direction, speed: u8) {
        self.calls
            .lock()
            .unwrap()
            .push(DriveCall::Drive { direction, speed });
    }

    fn halt(&mut self) {
        self.calls.lock().unwrap().push(DriveCall::Halt);
    }
}
