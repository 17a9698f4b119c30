//! Error and rejection types for the wheelchair supervisor.
//!
//! The control core itself never fails: an intent whose preconditions do
//! not hold is rejected with an [`Interlock`] reason and leaves the state
//! untouched.  The remaining types cover the fallible edges around the
//! core: configuration loading and observer registration.  Console
//! parsing has its own [`ParseIntentError`]; the simulator only logs it.
//! All variants are `Copy` so they pass through the control loop without
//! allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation outside the control core funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration is invalid or could not be parsed.
    Config(ConfigError),
    /// The observer registry is full.
    ObserverLimit,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::ObserverLimit => write!(f, "observer registry full"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Interlocks
// ---------------------------------------------------------------------------

/// Why an intent was rejected.
///
/// Guards are evaluated in declaration order, so a device that is both
/// unpowered and emergency-stopped reports [`Interlock::PoweredOff`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interlock {
    /// The device is not powered.
    PoweredOff,
    /// The remote link is not connected.
    LinkDown,
    /// The emergency stop is asserted.
    EmergencyStop,
}

impl fmt::Display for Interlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PoweredOff => write!(f, "device powered off"),
            Self::LinkDown => write!(f, "link not connected"),
            Self::EmergencyStop => write!(f, "emergency stop asserted"),
        }
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The document is not valid JSON for [`SupervisorConfig`](crate::config::SupervisorConfig).
    Malformed,
    /// A field failed range validation.  Names the field and the range.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "malformed config document"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Console parse errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseIntentError {
    /// Blank line.
    Empty,
    /// The first word is not a known command.
    UnknownCommand,
    /// The command needs an argument that was not given.
    MissingArgument(&'static str),
    /// The argument could not be interpreted.
    InvalidArgument(&'static str),
}

impl fmt::Display for ParseIntentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::UnknownCommand => write!(f, "unknown command"),
            Self::MissingArgument(what) => write!(f, "missing argument: {what}"),
            Self::InvalidArgument(what) => write!(f, "invalid argument: {what}"),
        }
    }
}

impl std::error::Error for ParseIntentError {}
