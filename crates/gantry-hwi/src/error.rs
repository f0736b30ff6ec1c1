//! Error types for hardware description validation and lifecycle management.

use std::path::PathBuf;

use crate::lifecycle::LifecycleState;

/// Errors surfaced by the hardware-interface layer.
///
/// Every failure is terminal to the component's usability: there are no
/// retries, and a plugin that fails initialization stays unconfigured.
#[derive(Debug, thiserror::Error)]
pub enum HwError {
    /// Failed to read a hardware description file.
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse a hardware description file.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The hardware description declares no joints.
    #[error("hardware '{0}' declares no joints")]
    MissingJoint(String),

    /// A joint declares the wrong number of command or state interfaces.
    #[error("joint '{joint}' has {found} {access} interfaces, 1 expected")]
    InterfaceCount {
        joint: String,
        /// `"command"` or `"state"`.
        access: &'static str,
        found: usize,
    },

    /// A joint declares an interface of the wrong kind.
    #[error("joint '{joint}' has '{found}' {access} interface, '{expected}' expected")]
    InterfaceKind {
        joint: String,
        /// `"command"` or `"state"`.
        access: &'static str,
        found: String,
        expected: &'static str,
    },

    /// A required hardware parameter is absent from the parameter map.
    #[error("missing hardware parameter: {0}")]
    MissingParameter(String),

    /// A hardware parameter could not be parsed or failed validation.
    #[error("invalid value for parameter {key}: {message}")]
    InvalidParameter { key: String, message: String },

    /// A lifecycle transition not allowed from the current state.
    #[error("invalid lifecycle transition: {transition} from state '{from}'")]
    InvalidTransition {
        transition: &'static str,
        from: LifecycleState,
    },

    /// A cycle operation was attempted outside the active state.
    #[error("cannot {operation} in state '{state}', plugin must be active")]
    NotActive {
        operation: &'static str,
        state: LifecycleState,
    },

    /// No plugin is registered under the requested type name.
    #[error("unknown plugin type: {0}")]
    UnknownPlugin(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
