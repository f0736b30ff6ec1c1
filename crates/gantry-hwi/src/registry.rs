//! In-process plugin registry.
//!
//! Stands in for the host runtime's dynamic plugin discovery: plugins are
//! registered under a fully-qualified type name (`"crate_name/TypeName"`)
//! together with a base capability tag, and the host instantiates them by
//! name as boxed [`Actuator`] trait objects.

use std::collections::HashMap;

use crate::actuator::Actuator;
use crate::error::HwError;

/// Capability tag for actuator plugins.
pub const CAP_ACTUATOR: &str = "actuator";

type Factory = Box<dyn Fn() -> Box<dyn Actuator> + Send + Sync>;

struct Entry {
    capability: &'static str,
    factory: Factory,
}

// ---------------------------------------------------------------------------
// ActuatorRegistry
// ---------------------------------------------------------------------------

/// Maps fully-qualified plugin type names to factories.
#[derive(Default)]
pub struct ActuatorRegistry {
    entries: HashMap<String, Entry>,
}

impl ActuatorRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a plugin factory under `type_name` with the given capability.
    ///
    /// A later registration under the same name replaces the earlier one.
    pub fn register<F>(&mut self, type_name: impl Into<String>, capability: &'static str, factory: F)
    where
        F: Fn() -> Box<dyn Actuator> + Send + Sync + 'static,
    {
        self.entries.insert(
            type_name.into(),
            Entry {
                capability,
                factory: Box::new(factory),
            },
        );
    }

    /// Instantiate a fresh plugin by type name.
    pub fn instantiate(&self, type_name: &str) -> Result<Box<dyn Actuator>, HwError> {
        self.entries
            .get(type_name)
            .map(|entry| (entry.factory)())
            .ok_or_else(|| HwError::UnknownPlugin(type_name.to_owned()))
    }

    /// Capability tag of a registered plugin.
    pub fn capability(&self, type_name: &str) -> Result<&'static str, HwError> {
        self.entries
            .get(type_name)
            .map(|entry| entry.capability)
            .ok_or_else(|| HwError::UnknownPlugin(type_name.to_owned()))
    }

    /// Whether a plugin is registered under `type_name`.
    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    /// Registered type names, sorted alphabetically.
    #[must_use]
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
