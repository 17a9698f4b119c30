//! Supervisor configuration parameters
//!
//! All tunable parameters for the control core and the simulator loop.
//! Values come from the defaults below or from a JSON document handed to
//! the simulator on the command line.  Nothing here is persisted.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// What happens when a depletion tick takes the power level to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DepletionPolicy {
    /// Floor at 0 % and keep running.
    #[default]
    Hold,
    /// Switch the device off, exactly as an operator power-off would.
    PowerOff,
}

/// Core supervisor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SupervisorConfig {
    // --- Power source ---
    /// Power level lost per second of powered, non-stopped operation
    pub drain_rate_per_sec: f32,
    /// Power level at construction (0-100)
    pub initial_power_level: f32,
    /// Behaviour on reaching 0 %
    pub depletion_policy: DepletionPolicy,

    // --- Drive ---
    /// Speed setting at construction (0-100)
    pub default_speed: u8,

    // --- Timing ---
    /// Depletion tick period (milliseconds)
    pub tick_interval_ms: u32,
    /// Simulator loop granularity (milliseconds)
    pub poll_interval_ms: u32,
}

impl Default for SupervisorConfig {
    fn default() -> Self {
        Self {
            // Power source
            drain_rate_per_sec: 0.1,
            initial_power_level: 100.0,
            depletion_policy: DepletionPolicy::Hold,

            // Drive
            default_speed: 50,

            // Timing
            tick_interval_ms: 1000, // 1 Hz
            poll_interval_ms: 50,   // 20 Hz
        }
    }
}

impl SupervisorConfig {
    /// Parse and validate a JSON document.  Missing fields take defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(text).map_err(|_| ConfigError::Malformed)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject out-of-range values instead of clamping them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.drain_rate_per_sec.is_finite() || !(0.0..=100.0).contains(&self.drain_rate_per_sec)
        {
            return Err(ConfigError::ValidationFailed(
                "drain_rate_per_sec must be 0.0..=100.0",
            ));
        }
        if !(0.0..=100.0).contains(&self.initial_power_level) {
            return Err(ConfigError::ValidationFailed(
                "initial_power_level must be 0.0..=100.0",
            ));
        }
        if self.default_speed > 100 {
            return Err(ConfigError::ValidationFailed("default_speed must be 0..=100"));
        }
        if !(10..=60_000).contains(&self.tick_interval_ms) {
            return Err(ConfigError::ValidationFailed(
                "tick_interval_ms must be 10..=60000",
            ));
        }
        if self.poll_interval_ms == 0 || self.poll_interval_ms > self.tick_interval_ms {
            return Err(ConfigError::ValidationFailed(
                "poll_interval_ms must be 1..=tick_interval_ms",
            ));
        }
        Ok(())
    }
}
