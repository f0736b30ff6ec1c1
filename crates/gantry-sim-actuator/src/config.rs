//! Plugin configuration parsed from hardware parameters.

use std::collections::HashMap;

use gantry_hwi::error::HwError;
use gantry_hwi::params;

/// Parameter key for the simulated startup delay in seconds.
pub const PARAM_START_DURATION: &str = "example_param_hw_start_duration_sec";
/// Parameter key for the simulated shutdown delay in seconds.
pub const PARAM_STOP_DURATION: &str = "example_param_hw_stop_duration_sec";
/// Parameter key for the easing divisor applied each read cycle.
pub const PARAM_SLOWDOWN: &str = "example_param_hw_slowdown";

// ---------------------------------------------------------------------------
// SimActuatorConfig
// ---------------------------------------------------------------------------

/// Validated configuration for [`SimJointActuator`](crate::SimJointActuator).
///
/// Parsed once at initialization and never changed afterward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimActuatorConfig {
    /// Simulated startup delay, whole seconds of which are slept on activate.
    pub start_delay_secs: f64,
    /// Simulated shutdown delay, whole seconds of which are slept on
    /// deactivate.
    pub stop_delay_secs: f64,
    /// Easing divisor; each read moves the reported position by
    /// `(command - state) / slowdown`.
    pub slowdown: f64,
}

impl SimActuatorConfig {
    /// Parse the three required parameters from a hardware parameter map.
    pub fn from_params(parameters: &HashMap<String, String>) -> Result<Self, HwError> {
        let config = Self {
            start_delay_secs: params::parse(parameters, PARAM_START_DURATION)?,
            stop_delay_secs: params::parse(parameters, PARAM_STOP_DURATION)?,
            slowdown: params::parse(parameters, PARAM_SLOWDOWN)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values the update rule cannot operate on. Delays must be finite
    /// and non-negative; the slowdown must be finite and strictly positive
    /// since it is a divisor every cycle.
    pub fn validate(&self) -> Result<(), HwError> {
        if !self.start_delay_secs.is_finite() || self.start_delay_secs < 0.0 {
            return Err(HwError::InvalidParameter {
                key: PARAM_START_DURATION.to_owned(),
                message: format!("{} is not a finite non-negative duration", self.start_delay_secs),
            });
        }
        if !self.stop_delay_secs.is_finite() || self.stop_delay_secs < 0.0 {
            return Err(HwError::InvalidParameter {
                key: PARAM_STOP_DURATION.to_owned(),
                message: format!("{} is not a finite non-negative duration", self.stop_delay_secs),
            });
        }
        if !self.slowdown.is_finite() || self.slowdown <= 0.0 {
            return Err(HwError::InvalidParameter {
                key: PARAM_SLOWDOWN.to_owned(),
                message: format!("{} is not a finite positive divisor", self.slowdown),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
