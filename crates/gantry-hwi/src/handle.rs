//! Shared value cells and the handles exported over them.
//!
//! A plugin owns one [`SharedValue`] per interface and hands out
//! [`StateHandle`] (read) or [`CommandHandle`] (read/write) accessors to the
//! host. The cell is reference-counted, so it outlives every issued handle
//! regardless of drop order; the host and plugin observe the same storage
//! without further indirection.

use std::sync::{Arc, RwLock};

// ---------------------------------------------------------------------------
// SharedValue
// ---------------------------------------------------------------------------

/// A shared mutable `f64` cell.
///
/// The lock is a formality: the host framework guarantees non-overlapping
/// calls, so contention never occurs. It exists to keep the cell
/// `Send + Sync` without `unsafe`.
#[derive(Debug, Clone, Default)]
pub struct SharedValue {
    cell: Arc<RwLock<f64>>,
}

impl SharedValue {
    /// Create a cell holding `value`.
    pub fn new(value: f64) -> Self {
        Self {
            cell: Arc::new(RwLock::new(value)),
        }
    }

    /// Current value.
    pub fn get(&self) -> f64 {
        *self.cell.read().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Replace the value.
    pub fn set(&self, value: f64) {
        *self
            .cell
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = value;
    }

    /// Apply `f` to the value in place and return the result.
    pub fn update(&self, f: impl FnOnce(f64) -> f64) -> f64 {
        let mut guard = self
            .cell
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = f(*guard);
        *guard
    }
}

// ---------------------------------------------------------------------------
// StateHandle
// ---------------------------------------------------------------------------

/// Read access to one exported state interface, addressed by
/// `(joint, interface kind)`.
#[derive(Debug, Clone)]
pub struct StateHandle {
    joint: String,
    interface: String,
    cell: SharedValue,
}

impl StateHandle {
    /// Bind a read handle to `cell` under the given address.
    pub fn new(joint: impl Into<String>, interface: impl Into<String>, cell: SharedValue) -> Self {
        Self {
            joint: joint.into(),
            interface: interface.into(),
            cell,
        }
    }

    /// Joint name this handle belongs to.
    pub fn joint(&self) -> &str {
        &self.joint
    }

    /// Interface kind (e.g. `"position"`).
    pub fn interface(&self) -> &str {
        &self.interface
    }

    /// Whether this handle is addressed by `(joint, interface)`.
    pub fn matches(&self, joint: &str, interface: &str) -> bool {
        self.joint == joint && self.interface == interface
    }

    /// Current value of the underlying cell.
    pub fn get(&self) -> f64 {
        self.cell.get()
    }
}

// ---------------------------------------------------------------------------
// CommandHandle
// ---------------------------------------------------------------------------

/// Read/write access to one exported command interface, addressed by
/// `(joint, interface kind)`.
#[derive(Debug, Clone)]
pub struct CommandHandle {
    joint: String,
    interface: String,
    cell: SharedValue,
}

impl CommandHandle {
    /// Bind a read/write handle to `cell` under the given address.
    pub fn new(joint: impl Into<String>, interface: impl Into<String>, cell: SharedValue) -> Self {
        Self {
            joint: joint.into(),
            interface: interface.into(),
            cell,
        }
    }

    /// Joint name this handle belongs to.
    pub fn joint(&self) -> &str {
        &self.joint
    }

    /// Interface kind (e.g. `"position"`).
    pub fn interface(&self) -> &str {
        &self.interface
    }

    /// Whether this handle is addressed by `(joint, interface)`.
    pub fn matches(&self, joint: &str, interface: &str) -> bool {
        self.joint == joint && self.interface == interface
    }

    /// Current value of the underlying cell.
    pub fn get(&self) -> f64 {
        self.cell.get()
    }

    /// Write a new target value into the cell.
    pub fn set(&self, value: f64) {
        self.cell.set(value);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
