//! Symbolic name → file resolution.
//!
//! # Algorithm
//!
//! ```text
//! for (prefix, dirs) in registry (registration order):
//!     name starts with prefix?          no  → next prefix
//!     relative = name - prefix
//!     for dir in dirs (registration order):
//!         dir + relative(sep → /) + .ext readable?   yes → return it
//! not found
//! ```
//!
//! The first registered matching prefix whose probe hits wins. A more
//! specific prefix registered later is only consulted once every earlier
//! matching prefix has missed.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::prefix::Prefix;
use crate::probe::{compose, probe};
use crate::registry::PrefixRegistry;

/// Read-only view of a [`PrefixRegistry`] that answers lookups.
#[derive(Clone, Copy, Debug)]
pub struct Resolver<'r> {
    registry: &'r PrefixRegistry,
}

impl<'r> Resolver<'r> {
    pub fn new(registry: &'r PrefixRegistry) -> Self {
        Resolver { registry }
    }

    /// Locate the file for `name`, or `None` if no registered prefix yields
    /// a readable file.
    ///
    /// Never mutates the registry and never loads anything.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        let options = self.registry.options();
        for (prefix, dirs) in self.registry.iter() {
            let Some(relative) = prefix.strip_from(name) else {
                continue;
            };
            if let Some(path) = probe(dirs, relative, options) {
                debug!(symbol = name, %prefix, path = %path.display(), "resolved");
                return Some(path);
            }
        }
        trace!(symbol = name, "no registered prefix resolved");
        None
    }

    /// Every path [`resolve`](Self::resolve) would probe for `name`, in probe
    /// order. Does not touch the filesystem.
    pub fn candidates(&self, name: &str) -> Vec<PathBuf> {
        let options = self.registry.options();
        let mut candidates = Vec::new();
        for (prefix, dirs) in self.registry.iter() {
            let Some(relative) = prefix.strip_from(name) else {
                continue;
            };
            candidates.extend(dirs.iter().map(|dir| compose(dir, relative, options)));
        }
        candidates
    }

    /// Registered prefixes that textually match `name`, in probe order.
    pub fn matching_prefixes(&self, name: &str) -> Vec<&'r Prefix> {
        self.registry
            .iter()
            .filter(|(prefix, _)| prefix.strip_from(name).is_some())
            .map(|(prefix, _)| prefix)
            .collect()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
