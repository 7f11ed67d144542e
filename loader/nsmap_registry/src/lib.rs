//! Namespace prefix registry and file resolver.
//!
//! Maps symbolic names such as `Vendor\Package\Http\Client` to source files
//! through a small set of `(prefix, directory)` registrations:
//!
//! ```text
//! register_prefix("Vendor\Package", "/srv/vendor/package/src")
//!
//! resolve("Vendor\Package\Http\Client")
//!     prefix   = Vendor\Package\
//!     relative = Http\Client
//!     probe    /srv/vendor/package/src/Http/Client.php
//! ```
//!
//! Two registration flavors share one [`PrefixRegistry`]:
//!
//! - [`PrefixRegistry::register_prefix`] appends a single base directory.
//! - [`PrefixRegistry::register_package_root`] appends a package root and
//!   every directory below it, so nested files resolve through one prefix.
//!
//! This crate never loads files and never reports errors: a lookup either
//! yields a readable path or `None`. Hosting a resolver inside a loading
//! pipeline lives in `nsmap_loader`.

mod options;
mod package;
mod prefix;
mod probe;
mod registry;
mod resolver;
mod walk;

pub use options::{ResolveOptions, DEFAULT_EXTENSION, DEFAULT_NAMESPACE_SEPARATOR};
pub use prefix::{BaseDir, Prefix};
pub use probe::{compose, is_readable_file, probe};
pub use registry::{DirSpec, PrefixRegistry};
pub use resolver::Resolver;
pub use walk::subdirectories;
