//! Inbound intents to the control supervisor.
//!
//! These represent actions requested by the outside world (a rendering
//! surface, the simulator console, a radio bridge, the depletion timer)
//! that the [`ControlSupervisor`](super::service::ControlSupervisor)
//! validates and applies.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseIntentError;
use crate::state::Direction;

/// Requests that external callers can send into the control core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// Switch the device on or off.  Switching off drops the link and any motion.
    SetPower(bool),

    /// Connect or disconnect the remote link.
    ToggleConnection,

    /// Set the speed; out-of-range values are clamped to 0–100.
    SetSpeed(i32),

    /// Start (or redirect) motion.  Replaces any active direction.
    BeginMove(Direction),

    /// Release motion.  Always allowed, idempotent.
    EndMove,

    /// Assert or release the emergency stop.  Always clears motion.
    ToggleEmergencyStop,

    /// Advance power depletion by `delta_secs` of elapsed time.
    Tick { delta_secs: f32 },
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetPower(true) => write!(f, "power on"),
            Self::SetPower(false) => write!(f, "power off"),
            Self::ToggleConnection => write!(f, "connect"),
            Self::SetSpeed(v) => write!(f, "speed {v}"),
            Self::BeginMove(d) => write!(f, "move {d}"),
            Self::EndMove => write!(f, "stop"),
            Self::ToggleEmergencyStop => write!(f, "estop"),
            Self::Tick { delta_secs } => write!(f, "tick {delta_secs}"),
        }
    }
}

/// Console grammar, one intent per line:
///
/// ```text
/// power on|off
/// connect
/// speed <n>
/// move forward|backward|left|right
/// stop
/// estop
/// tick <secs>
/// ```
impl FromStr for Intent {
    type Err = ParseIntentError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let cmd = words.next().ok_or(ParseIntentError::Empty)?;
        let arg = words.next();

        match cmd.to_ascii_lowercase().as_str() {
            "power" => match arg.map(str::to_ascii_lowercase).as_deref() {
                Some("on") => Ok(Self::SetPower(true)),
                Some("off") => Ok(Self::SetPower(false)),
                Some(_) => Err(ParseIntentError::InvalidArgument("power expects on|off")),
                None => Err(ParseIntentError::MissingArgument("on|off")),
            },
            "connect" => Ok(Self::ToggleConnection),
            "speed" => {
                let raw = arg.ok_or(ParseIntentError::MissingArgument("speed value"))?;
                raw.parse::<i32>()
                    .map(Self::SetSpeed)
                    .map_err(|_| ParseIntentError::InvalidArgument("speed value"))
            }
            "move" => {
                let raw = arg.ok_or(ParseIntentError::MissingArgument("direction"))?;
                raw.parse::<Direction>().map(Self::BeginMove)
            }
            "stop" | "release" => Ok(Self::EndMove),
            "estop" => Ok(Self::ToggleEmergencyStop),
            "tick" => {
                let raw = arg.ok_or(ParseIntentError::MissingArgument("seconds"))?;
                raw.parse::<f32>()
                    .map(|delta_secs| Self::Tick { delta_secs })
                    .map_err(|_| ParseIntentError::InvalidArgument("seconds"))
            }
            _ => Err(ParseIntentError::UnknownCommand),
        }
    }
}
