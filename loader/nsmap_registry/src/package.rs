//! Package-root registration.
//!
//! Registering a package root lists the root and every directory below it
//! under one prefix, so any file in the package resolves through that
//! prefix. The tree is walked once, at registration time.

use tracing::trace;

use crate::prefix::BaseDir;
use crate::registry::PrefixRegistry;
use crate::walk::subdirectories;

impl PrefixRegistry {
    /// Register `root_dir` and all of its subdirectories under `prefix`.
    ///
    /// Returns without walking if `root_dir` is already listed for `prefix`,
    /// whether as a root or as a previously discovered subdirectory.
    /// Discovered directories are appended only if not already listed.
    pub fn register_package_root(&mut self, prefix: &str, root_dir: &str) {
        let prefix = self.normalize_prefix(prefix);
        let root = BaseDir::new(root_dir);
        if self.contains_dir(&prefix, &root) {
            trace!(%prefix, %root, "package root already registered");
            return;
        }

        let discovered = subdirectories(&root);
        trace!(%prefix, %root, subdirectories = discovered.len(), "register package root");
        self.dirs_mut(prefix.clone()).push(root);
        for dir in discovered {
            self.push_once(&prefix, dir);
        }
    }

    /// One [`register_package_root`](Self::register_package_root) call per
    /// `(prefix, root)` pair, in caller order.
    pub fn register_package_roots<I, P, R>(&mut self, mapping: I)
    where
        I: IntoIterator<Item = (P, R)>,
        P: AsRef<str>,
        R: AsRef<str>,
    {
        for (prefix, root) in mapping {
            self.register_package_root(prefix.as_ref(), root.as_ref());
        }
    }
}
