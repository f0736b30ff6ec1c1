//! Simulated actuator plugin for the Gantry hardware interface.
//!
//! Provides [`SimJointActuator`], a demo hardware component driving a single
//! position-controlled joint. There is no real hardware behind it: the
//! reported position chases the commanded position with a first-order easing
//! rule, and lifecycle transitions block for configurable whole-second
//! delays so console output resembles a device spinning up.
//!
//! Register it with a host registry and drive it like any other plugin:
//!
//! ```
//! use gantry_hwi::prelude::*;
//! use gantry_sim_actuator::PLUGIN_NAME;
//!
//! let mut registry = ActuatorRegistry::new();
//! gantry_sim_actuator::register(&mut registry);
//! let plugin = registry.instantiate(PLUGIN_NAME).unwrap();
//! assert_eq!(plugin.name(), "SimJointActuator");
//! ```

pub mod config;
pub mod joint;

pub use config::SimActuatorConfig;
pub use joint::{SimJointActuator, PLUGIN_NAME};

use gantry_hwi::registry::{ActuatorRegistry, CAP_ACTUATOR};

/// Register this crate's plugins with a host registry.
pub fn register(registry: &mut ActuatorRegistry) {
    registry.register(PLUGIN_NAME, CAP_ACTUATOR, || {
        Box::new(SimJointActuator::new())
    });
}
