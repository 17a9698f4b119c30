//! Device state snapshot.
//!
//! [`DeviceState`] is the single aggregate owned by the
//! [`ControlSupervisor`](crate::app::service::ControlSupervisor).  It is
//! `Copy`, so every value handed to callers and observers is an
//! independent snapshot; the only way to change the live state is through
//! the supervisor's intents.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseIntentError;

/// Full-scale bound for both the power level and the speed setting.
pub const PERCENT_MAX: u8 = 100;

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Direction of an active movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ParseIntentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "forward" | "fwd" | "up" => Ok(Self::Forward),
            "backward" | "back" | "down" => Ok(Self::Backward),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(ParseIntentError::InvalidArgument("direction")),
        }
    }
}

// ---------------------------------------------------------------------------
// DeviceState
// ---------------------------------------------------------------------------

/// Observable device state.
///
/// Reachable values always satisfy:
/// - `connected` implies `powered`
/// - `active_movement.is_some()` implies `powered && connected && !emergency_stopped`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceState {
    pub powered: bool,
    pub connected: bool,
    pub emergency_stopped: bool,
    /// Remaining power, 0.0–100.0.
    pub power_level: f32,
    /// Speed setting, 0–100.
    pub speed_setting: u8,
    pub active_movement: Option<Direction>,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self {
            powered: false,
            connected: false,
            emergency_stopped: false,
            power_level: 100.0,
            speed_setting: 50,
            active_movement: None,
        }
    }
}

impl DeviceState {
    /// True when motion commands may reach the drive:
    /// powered, connected and not emergency-stopped.
    pub fn may_drive(&self) -> bool {
        self.powered && self.connected && !self.emergency_stopped
    }

    /// True while the power source is being depleted.
    pub fn drains(&self) -> bool {
        self.powered && !self.emergency_stopped
    }

    /// Both state invariants hold.
    pub fn is_consistent(&self) -> bool {
        let link_ok = !self.connected || self.powered;
        let motion_ok = self.active_movement.is_none() || self.may_drive();
        let level_ok = (0.0..=f32::from(PERCENT_MAX)).contains(&self.power_level);
        link_ok && motion_ok && level_ok && self.speed_setting <= PERCENT_MAX
    }

    /// Power level rounded to the nearest whole percent.
    pub fn display_percent(&self) -> u8 {
        self.power_level.round().clamp(0.0, f32::from(PERCENT_MAX)) as u8
    }

    pub fn battery_band(&self) -> BatteryBand {
        BatteryBand::from_level(self.power_level)
    }

    pub fn link_label(&self) -> &'static str {
        if self.connected { "Connected" } else { "Disconnected" }
    }

    pub fn stop_label(&self) -> &'static str {
        if self.emergency_stopped { "EMERGENCY STOP" } else { "Ready" }
    }

    /// Which controls a control surface should offer in this state.
    pub fn controls(&self) -> ControlAvailability {
        ControlAvailability {
            power: true,
            connection: self.powered,
            emergency_stop: self.powered,
            speed: self.may_drive(),
            movement: self.may_drive(),
        }
    }
}

// ---------------------------------------------------------------------------
// Presentation helpers
// ---------------------------------------------------------------------------

/// Colour band of the battery indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryBand {
    /// Above 50 %.
    Normal,
    /// Above 20 %, up to 50 %.
    Low,
    /// 20 % or less.
    Critical,
}

impl BatteryBand {
    pub fn from_level(level: f32) -> Self {
        if level > 50.0 {
            Self::Normal
        } else if level > 20.0 {
            Self::Low
        } else {
            Self::Critical
        }
    }
}

/// Enable flags for each control on a rendering surface.
///
/// The supervisor enforces the same gates internally; this only tells a
/// surface what to grey out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlAvailability {
    pub power: bool,
    pub connection: bool,
    pub emergency_stop: bool,
    pub speed: bool,
    pub movement: bool,
}
