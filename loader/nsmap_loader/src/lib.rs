//! Namespace autoloaders.
//!
//! Wraps a [`PrefixRegistry`](nsmap_registry::PrefixRegistry) in a loader
//! object that a module-loading pipeline can consult:
//!
//! ```text
//! ClassLoader / PackageLoader        (registration during startup)
//!     │ activate(host, prepend)
//!     ▼
//! ResolverHost ── e.g. Pipeline      (ordered resolver list)
//!     │ locate(name) → first resolver returning a path
//!     ▼
//! SourceLoader ── e.g. FsSourceLoader (reads the located file)
//! ```
//!
//! Lookups that no resolver claims are `None`, never errors.

mod config;
mod error;
mod host;
mod loader;
mod pipeline;
mod source;
mod tracing_setup;

pub use config::{LoaderConfig, EXTENSION_VAR, PREPEND_VAR, SEPARATOR_VAR};
pub use error::{ConfigError, LoadError};
pub use host::{Activation, Resolve, ResolverHost, ResolverId};
pub use loader::{ClassLoader, PackageLoader};
pub use pipeline::Pipeline;
pub use source::{FsSourceLoader, LoadedSource, SourceLoader};
pub use tracing_setup::init_tracing;

pub use nsmap_registry::{BaseDir, DirSpec, Prefix, PrefixRegistry, ResolveOptions, Resolver};
