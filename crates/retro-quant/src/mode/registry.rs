//! Immutable name -> mode table, built once at startup.

use std::collections::BTreeMap;

use super::c64::builtin_modes;
use super::spec::ModeSpec;

/// Mode used when none is requested.
pub const DEFAULT_MODE: &str = "koala";

/// Named graphics modes, iterated in name order.
#[derive(Debug, Clone, Default)]
pub struct ModeRegistry {
    modes: BTreeMap<String, ModeSpec>,
}

impl ModeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in C64 modes.
    pub fn builtin() -> Self {
        builtin_modes()
            .into_iter()
            .fold(Self::new(), |registry, (name, mode)| {
                registry.with_mode(name, mode)
            })
    }

    /// Add or replace a mode.
    pub fn with_mode(mut self, name: impl Into<String>, mode: ModeSpec) -> Self {
        self.modes.insert(name.into(), mode);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ModeSpec> {
        self.modes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modes.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModeSpec)> {
        self.modes.iter().map(|(name, mode)| (name.as_str(), mode))
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}
