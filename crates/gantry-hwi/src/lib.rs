//! Hardware-interface contract for Gantry hardware plugins.
//!
//! Framework-agnostic library with no engine or executor dependencies.
//! Defines everything a hardware plugin and its host need to agree on:
//! joint/interface descriptors, the [`Actuator`](actuator::Actuator) plugin
//! contract, exported state/command handles, the managed lifecycle state
//! machine, and a name-keyed plugin registry.
//!
//! # Host/plugin split
//!
//! ```text
//! HardwareInfo ──► on_init ──► export handles ──► activate ──► read/write cycles
//!                  (validate)   (state, command)   (delays)     (host loop)
//! ```
//!
//! The host framework owns instantiation (via [`registry::ActuatorRegistry`]),
//! the control loop, and call ordering. Plugins are passive: they only react
//! to lifecycle callbacks and per-cycle operations.

pub mod actuator;
pub mod error;
pub mod handle;
pub mod lifecycle;
pub mod params;
pub mod registry;
pub mod types;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::actuator::{Actuator, ManagedActuator};
    pub use crate::error::HwError;
    pub use crate::handle::{CommandHandle, SharedValue, StateHandle};
    pub use crate::lifecycle::{Lifecycle, LifecycleState};
    pub use crate::registry::ActuatorRegistry;
    pub use crate::types::{HardwareInfo, InterfaceConfig, JointDescriptor, POSITION};
}
