//! The actuator plugin contract and the host-side lifecycle driver.
//!
//! [`Actuator`] is the complete operation set the host framework dispatches
//! over: initialization, interface export, lifecycle transitions, and the
//! per-cycle read/write pair. Plugins implement it; the host owns
//! instantiation (see [`registry`](crate::registry)) and call ordering.
//!
//! [`ManagedActuator`] wraps a boxed plugin together with a [`Lifecycle`] and
//! rejects out-of-order transitions and cycles outside the active state, so a
//! host loop cannot misuse a plugin by accident.

use crate::error::HwError;
use crate::handle::{CommandHandle, StateHandle};
use crate::lifecycle::{Lifecycle, LifecycleState};
use crate::types::HardwareInfo;

// ---------------------------------------------------------------------------
// Actuator
// ---------------------------------------------------------------------------

/// Plugin contract for a hardware actuator component.
///
/// The host invokes these in a fixed pattern: `on_init` once, then the
/// export methods once, then `on_activate`/`on_deactivate` around runs of
/// `read`/`write` cycles (`read` before `write`, once per cycle). Plugins do
/// not enforce that ordering themselves; [`ManagedActuator`] does.
pub trait Actuator: Send + 'static {
    /// Validate the hardware description and parse configuration.
    ///
    /// A failure leaves the plugin unusable; there is no partial
    /// initialization and no retry.
    fn on_init(&mut self, info: &HardwareInfo) -> Result<(), HwError>;

    /// Export one read handle per state interface.
    fn export_state_interfaces(&mut self) -> Vec<StateHandle>;

    /// Export one read/write handle per command interface.
    fn export_command_interfaces(&mut self) -> Vec<CommandHandle>;

    /// Prepare for cyclic operation. `previous` is the state the host is
    /// transitioning from.
    fn on_activate(&mut self, previous: LifecycleState) -> Result<(), HwError>;

    /// Leave cyclic operation.
    fn on_deactivate(&mut self, previous: LifecycleState) -> Result<(), HwError>;

    /// Refresh exported state from the (simulated) hardware. Called once per
    /// control cycle, before [`write`](Self::write).
    fn read(&mut self) -> Result<(), HwError>;

    /// Push the current command to the (simulated) hardware. Called once per
    /// control cycle, after [`read`](Self::read).
    fn write(&mut self) -> Result<(), HwError>;

    /// Human-readable name for this plugin.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

// ---------------------------------------------------------------------------
// ManagedActuator
// ---------------------------------------------------------------------------

/// A boxed plugin driven through the managed lifecycle.
///
/// Transitions run the lifecycle check first and the plugin callback second,
/// so a rejected transition never reaches the plugin and a failed callback
/// leaves the recorded state unchanged. `read`/`write` are forwarded only in
/// [`LifecycleState::Active`], and no handles are exported before a
/// successful `configure`.
pub struct ManagedActuator {
    inner: Box<dyn Actuator>,
    lifecycle: Lifecycle,
}

impl ManagedActuator {
    /// Wrap a plugin; starts unconfigured.
    #[must_use]
    pub fn new(inner: Box<dyn Actuator>) -> Self {
        Self {
            inner,
            lifecycle: Lifecycle::new(),
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    /// Plugin name.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Run `on_init` and move to inactive.
    ///
    /// If the plugin rejects the description the lifecycle stays
    /// unconfigured (terminal failure: configure cannot be retried by this
    /// wrapper once it has succeeded, and a failed init leaves the plugin
    /// unusable).
    pub fn configure(&mut self, info: &HardwareInfo) -> Result<(), HwError> {
        if self.lifecycle.state() != LifecycleState::Unconfigured {
            return Err(HwError::InvalidTransition {
                transition: "configure",
                from: self.lifecycle.state(),
            });
        }
        self.inner.on_init(info)?;
        self.lifecycle.configure()?;
        log::info!("configured plugin '{}' for hardware '{}'", self.name(), info.name);
        Ok(())
    }

    /// Export the plugin's state handles. Empty until configured.
    pub fn export_state_interfaces(&mut self) -> Vec<StateHandle> {
        if self.lifecycle.state() == LifecycleState::Unconfigured {
            return Vec::new();
        }
        self.inner.export_state_interfaces()
    }

    /// Export the plugin's command handles. Empty until configured.
    pub fn export_command_interfaces(&mut self) -> Vec<CommandHandle> {
        if self.lifecycle.state() == LifecycleState::Unconfigured {
            return Vec::new();
        }
        self.inner.export_command_interfaces()
    }

    /// Move to active, running the plugin's `on_activate`.
    ///
    /// The transition is only recorded after the callback succeeds; a
    /// failed callback leaves the wrapper inactive.
    pub fn activate(&mut self) -> Result<(), HwError> {
        if self.lifecycle.state() != LifecycleState::Inactive {
            return Err(HwError::InvalidTransition {
                transition: "activate",
                from: self.lifecycle.state(),
            });
        }
        log::info!("activating plugin '{}'", self.name());
        self.inner.on_activate(LifecycleState::Inactive)?;
        self.lifecycle.activate()
    }

    /// Move to inactive, running the plugin's `on_deactivate`.
    ///
    /// As with [`activate`](Self::activate), a failed callback leaves the
    /// lifecycle state unchanged.
    pub fn deactivate(&mut self) -> Result<(), HwError> {
        if self.lifecycle.state() != LifecycleState::Active {
            return Err(HwError::InvalidTransition {
                transition: "deactivate",
                from: self.lifecycle.state(),
            });
        }
        log::info!("deactivating plugin '{}'", self.name());
        self.inner.on_deactivate(LifecycleState::Active)?;
        self.lifecycle.deactivate()
    }

    /// Forward a read cycle; legal only while active.
    pub fn read(&mut self) -> Result<(), HwError> {
        if !self.lifecycle.is_active() {
            return Err(HwError::NotActive {
                operation: "read",
                state: self.lifecycle.state(),
            });
        }
        self.inner.read()
    }

    /// Forward a write cycle; legal only while active.
    pub fn write(&mut self) -> Result<(), HwError> {
        if !self.lifecycle.is_active() {
            return Err(HwError::NotActive {
                operation: "write",
                state: self.lifecycle.state(),
            });
        }
        self.inner.write()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
