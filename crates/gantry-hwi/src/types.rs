//! Core data types for hardware descriptions.
//!
//! These types are the canonical in-memory representation of what a hardware
//! component offers: named joints, each with ordered command and state
//! interface lists, plus a flat string parameter map. They map closely to the
//! hardware-description concepts of robot-control middleware but use
//! Rust-native types and deserialize from TOML.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::HwError;

// ---------------------------------------------------------------------------
// Interface kinds
// ---------------------------------------------------------------------------

/// Position interface kind identifier.
pub const POSITION: &str = "position";
/// Velocity interface kind identifier.
pub const VELOCITY: &str = "velocity";
/// Effort interface kind identifier.
pub const EFFORT: &str = "effort";

// ---------------------------------------------------------------------------
// InterfaceConfig
// ---------------------------------------------------------------------------

/// One declared interface on a joint.
///
/// `name` is the interface kind string (e.g. [`POSITION`]), matching the
/// convention that a joint's interfaces are addressed by `(joint, kind)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceConfig {
    /// Interface kind.
    pub name: String,
}

impl InterfaceConfig {
    /// Create an interface declaration of the given kind.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

// ---------------------------------------------------------------------------
// JointDescriptor
// ---------------------------------------------------------------------------

/// A joint and the interfaces it declares. Immutable after initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JointDescriptor {
    /// Joint name.
    pub name: String,
    /// Writable channels through which targets are sent to the joint.
    #[serde(default)]
    pub command_interfaces: Vec<InterfaceConfig>,
    /// Readable channels through which the joint reports its value.
    #[serde(default)]
    pub state_interfaces: Vec<InterfaceConfig>,
}

impl JointDescriptor {
    /// A joint with one position command interface and one position state
    /// interface — the shape the demo actuator requires.
    pub fn position_joint(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command_interfaces: vec![InterfaceConfig::new(POSITION)],
            state_interfaces: vec![InterfaceConfig::new(POSITION)],
        }
    }
}

// ---------------------------------------------------------------------------
// HardwareInfo
// ---------------------------------------------------------------------------

/// Complete hardware description handed to a plugin at initialization.
///
/// Built in code or loaded from a TOML file:
///
/// ```toml
/// name = "gantry_lift_joint"
///
/// [[joints]]
/// name = "joint1"
/// command_interfaces = [{ name = "position" }]
/// state_interfaces = [{ name = "position" }]
///
/// [parameters]
/// example_param_hw_start_duration_sec = "2.0"
/// example_param_hw_stop_duration_sec = "3.0"
/// example_param_hw_slowdown = "2.0"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HardwareInfo {
    /// Hardware component name.
    pub name: String,
    /// Declared joints, in declaration order.
    #[serde(default)]
    pub joints: Vec<JointDescriptor>,
    /// Flat string-to-string parameter map; values are parsed by the plugin.
    #[serde(default)]
    pub parameters: HashMap<String, String>,
}

impl HardwareInfo {
    /// Create a description with a name and no joints or parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            joints: Vec::new(),
            parameters: HashMap::new(),
        }
    }

    /// Builder: add a joint.
    #[must_use]
    pub fn with_joint(mut self, joint: JointDescriptor) -> Self {
        self.joints.push(joint);
        self
    }

    /// Builder: set a parameter.
    #[must_use]
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// The first declared joint, or an error naming the component.
    pub fn first_joint(&self) -> Result<&JointDescriptor, HwError> {
        self.joints
            .first()
            .ok_or_else(|| HwError::MissingJoint(self.name.clone()))
    }

    /// Load a hardware description from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, HwError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| HwError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
