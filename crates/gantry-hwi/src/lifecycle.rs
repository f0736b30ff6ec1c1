//! Managed lifecycle state machine for hardware plugins.
//!
//! [`Lifecycle`] tracks the current [`LifecycleState`] and validates that
//! transitions requested by the host are legal before the plugin callback is
//! invoked. The plugin itself never changes state; it only reacts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::HwError;

// ---------------------------------------------------------------------------
// LifecycleState
// ---------------------------------------------------------------------------

/// One of the standard managed-node phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    /// Constructed but not yet initialized.
    #[default]
    Unconfigured,
    /// Initialized and validated; not participating in the control loop.
    Inactive,
    /// Participating in the control loop; read/write cycles are legal.
    Active,
    /// Shut down for good; no further transitions.
    Finalized,
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unconfigured => "unconfigured",
            Self::Inactive => "inactive",
            Self::Active => "active",
            Self::Finalized => "finalized",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

/// Tracks a plugin's lifecycle state and enforces valid transitions.
///
/// # Example
///
/// ```
/// use gantry_hwi::lifecycle::{Lifecycle, LifecycleState};
///
/// let mut lc = Lifecycle::new();
/// assert_eq!(lc.state(), LifecycleState::Unconfigured);
/// lc.configure().unwrap();
/// lc.activate().unwrap();
/// assert_eq!(lc.state(), LifecycleState::Active);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Lifecycle {
    state: LifecycleState,
}

impl Lifecycle {
    /// Create a state machine in [`LifecycleState::Unconfigured`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: LifecycleState::Unconfigured,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> LifecycleState {
        self.state
    }

    /// Whether read/write cycles are legal right now.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, LifecycleState::Active)
    }

    /// `Unconfigured → Inactive`. The caller runs the plugin's `on_init`
    /// first and only records the transition on success.
    pub fn configure(&mut self) -> Result<(), HwError> {
        self.transition("configure", LifecycleState::Unconfigured, LifecycleState::Inactive)
    }

    /// `Inactive → Active`.
    pub fn activate(&mut self) -> Result<(), HwError> {
        self.transition("activate", LifecycleState::Inactive, LifecycleState::Active)
    }

    /// `Active → Inactive`.
    pub fn deactivate(&mut self) -> Result<(), HwError> {
        self.transition("deactivate", LifecycleState::Active, LifecycleState::Inactive)
    }

    /// Any non-finalized state `→ Finalized`.
    pub fn finalize(&mut self) -> Result<(), HwError> {
        if self.state == LifecycleState::Finalized {
            return Err(HwError::InvalidTransition {
                transition: "finalize",
                from: self.state,
            });
        }
        self.state = LifecycleState::Finalized;
        Ok(())
    }

    fn transition(
        &mut self,
        name: &'static str,
        from: LifecycleState,
        to: LifecycleState,
    ) -> Result<(), HwError> {
        if self.state != from {
            return Err(HwError::InvalidTransition {
                transition: name,
                from: self.state,
            });
        }
        self.state = to;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
