//! The two loader flavors.
//!
//! Both own a [`PrefixRegistry`] and resolve through it identically. They
//! differ in registration:
//!
//! - [`ClassLoader`] registers base directories as given.
//! - [`PackageLoader`] registers package roots and expands each into its
//!   whole directory tree.
//!
//! A loader is shared with its host as an `Arc`, so the registry sits behind
//! a read-write lock: registration may continue after activation.

use std::path::PathBuf;
use std::sync::Arc;

use nsmap_registry::{DirSpec, PrefixRegistry, ResolveOptions, Resolver};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::LoaderConfig;
use crate::host::{Activation, Resolve, ResolverHost};

/// Registry with interior mutability: registration through `&self`.
#[derive(Debug, Default)]
struct SharedRegistry(RwLock<PrefixRegistry>);

impl SharedRegistry {
    fn new(options: ResolveOptions) -> Self {
        SharedRegistry(RwLock::new(PrefixRegistry::with_options(options)))
    }

    fn read(&self) -> RwLockReadGuard<'_, PrefixRegistry> {
        self.0.read()
    }

    fn write(&self) -> RwLockWriteGuard<'_, PrefixRegistry> {
        self.0.write()
    }

    fn resolve(&self, name: &str) -> Option<PathBuf> {
        Resolver::new(&self.read()).resolve(name)
    }

    fn candidates(&self, name: &str) -> Vec<PathBuf> {
        Resolver::new(&self.read()).candidates(name)
    }

    fn snapshot(&self) -> PrefixRegistry {
        self.read().clone()
    }
}

/// Loader whose prefixes map to explicitly listed base directories.
#[derive(Debug, Default)]
pub struct ClassLoader {
    registry: SharedRegistry,
}

impl ClassLoader {
    /// An empty loader with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ResolveOptions) -> Self {
        ClassLoader {
            registry: SharedRegistry::new(options),
        }
    }

    pub fn from_config(config: &LoaderConfig) -> Self {
        Self::with_options(config.options.clone())
    }

    /// See [`PrefixRegistry::register_prefix`].
    pub fn register_prefix(&self, prefix: &str, base_dir: &str) {
        self.registry.write().register_prefix(prefix, base_dir);
    }

    /// See [`PrefixRegistry::register_prefixes`].
    pub fn register_prefixes<I, P, D>(&self, mapping: I)
    where
        I: IntoIterator<Item = (P, D)>,
        P: AsRef<str>,
        D: Into<DirSpec>,
    {
        self.registry.write().register_prefixes(mapping);
    }

    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.registry.resolve(name)
    }

    /// Paths [`resolve`](Self::resolve) would probe, in order.
    pub fn candidates(&self, name: &str) -> Vec<PathBuf> {
        self.registry.candidates(name)
    }

    /// A copy of the current registry.
    pub fn snapshot(&self) -> PrefixRegistry {
        self.registry.snapshot()
    }

    /// Subscribe this loader with `host`, ahead of existing resolvers if
    /// `prepend`.
    pub fn activate<H>(self: &Arc<Self>, host: &mut H, prepend: bool) -> Activation
    where
        H: ResolverHost + ?Sized,
    {
        Activation::new(Arc::clone(self) as Arc<dyn Resolve>, host, prepend)
    }
}

impl Resolve for ClassLoader {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        ClassLoader::resolve(self, name)
    }
}

/// Loader whose prefixes map to package roots expanded into their
/// directory trees at registration time.
#[derive(Debug, Default)]
pub struct PackageLoader {
    registry: SharedRegistry,
}

impl PackageLoader {
    /// An empty loader with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ResolveOptions) -> Self {
        PackageLoader {
            registry: SharedRegistry::new(options),
        }
    }

    pub fn from_config(config: &LoaderConfig) -> Self {
        Self::with_options(config.options.clone())
    }

    /// See [`PrefixRegistry::register_package_root`].
    ///
    /// Walks the tree while holding the write lock.
    pub fn register_package_root(&self, prefix: &str, root_dir: &str) {
        self.registry.write().register_package_root(prefix, root_dir);
    }

    /// One package root per prefix, in caller order.
    pub fn register_prefixes<I, P, R>(&self, mapping: I)
    where
        I: IntoIterator<Item = (P, R)>,
        P: AsRef<str>,
        R: AsRef<str>,
    {
        self.registry.write().register_package_roots(mapping);
    }

    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.registry.resolve(name)
    }

    /// Paths [`resolve`](Self::resolve) would probe, in order.
    pub fn candidates(&self, name: &str) -> Vec<PathBuf> {
        self.registry.candidates(name)
    }

    /// A copy of the current registry.
    pub fn snapshot(&self) -> PrefixRegistry {
        self.registry.snapshot()
    }

    /// Subscribe this loader with `host`, ahead of existing resolvers if
    /// `prepend`.
    pub fn activate<H>(self: &Arc<Self>, host: &mut H, prepend: bool) -> Activation
    where
        H: ResolverHost + ?Sized,
    {
        Activation::new(Arc::clone(self) as Arc<dyn Resolve>, host, prepend)
    }
}

impl Resolve for PackageLoader {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        PackageLoader::resolve(self, name)
    }
}
