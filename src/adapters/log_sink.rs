//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing every applied transition to the
//! `log` facade, using the same status labels a control panel shows.
//! A display renderer would implement the same trait.

use log::info;

use crate::app::events::StateChange;
use crate::app::ports::EventSink;
use crate::state::DeviceState;

/// Adapter that logs every [`StateChange`] to the console.
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

/// One-line status summary of a snapshot.
pub fn status_line(s: &DeviceState) -> String {
    format!(
        "power={} | {} | {} | battery={}% ({:?}) | speed={}% | motion={}",
        if s.powered { "ON" } else { "OFF" },
        s.link_label(),
        s.stop_label(),
        s.display_percent(),
        s.battery_band(),
        s.speed_setting,
        s.active_movement.map_or("none", |d| d.as_str()),
    )
}

impl EventSink for LogEventSink {
    fn emit(&mut self, change: &StateChange) {
        info!("STATE | '{}' -> {}", change.intent, status_line(&change.current));
        if change.powered_down() {
            info!("STATE | device powered down");
        }
    }
}
