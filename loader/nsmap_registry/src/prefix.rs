//! Normalized registry keys and directory entries.
//!
//! Both types are plain strings with a normalization invariant applied at
//! construction:
//!
//! - [`Prefix`]: no leading separator, exactly one trailing namespace separator.
//! - [`BaseDir`]: exactly one trailing path separator.
//!
//! Normalization is idempotent, so feeding a normalized value back through
//! the constructor yields the same value.

use std::fmt;
use std::path::{Path, MAIN_SEPARATOR};

/// A namespace prefix, stored as `Segment\...\Segment\`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(String);

impl Prefix {
    /// Normalize `raw`: trim every leading and trailing `separator`, then
    /// append exactly one.
    ///
    /// An empty (or separator-only) input normalizes to the bare separator.
    /// Symbolic names never start with a separator, so such a prefix never
    /// matches anything.
    pub fn new(raw: &str, separator: char) -> Self {
        let trimmed = raw.trim_matches(separator);
        let mut key = String::with_capacity(trimmed.len() + separator.len_utf8());
        key.push_str(trimmed);
        key.push(separator);
        Prefix(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes, including the trailing separator.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: a prefix holds at least its trailing separator.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The remainder of `name` after this prefix, if `name` starts with it.
    ///
    /// Exact, case-sensitive byte comparison; `name` is not normalized.
    pub fn strip_from<'n>(&self, name: &'n str) -> Option<&'n str> {
        name.strip_prefix(self.0.as_str())
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Prefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A base directory, stored with exactly one trailing [`MAIN_SEPARATOR`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BaseDir(String);

impl BaseDir {
    /// Strip all trailing path separators from `raw`, then append one.
    ///
    /// The path is not checked against the filesystem.
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim_end_matches(std::path::is_separator);
        let mut dir = String::with_capacity(trimmed.len() + 1);
        dir.push_str(trimmed);
        dir.push(MAIN_SEPARATOR);
        BaseDir(dir)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// The child directory `name` directly below this one.
    pub(crate) fn child(&self, name: &str) -> BaseDir {
        let mut dir = String::with_capacity(self.0.len() + name.len() + 1);
        dir.push_str(&self.0);
        dir.push_str(name);
        BaseDir::new(&dir)
    }
}

impl fmt::Display for BaseDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for BaseDir {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}
