//! Ordered prefix → base-directory mapping.
//!
//! Prefix insertion order is match priority: the resolver tests prefixes
//! first-registered-first. Directory order within a prefix is probe order.

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::options::ResolveOptions;
use crate::prefix::{BaseDir, Prefix};

/// One directory or a list of directories for a single prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirSpec {
    One(String),
    Many(Vec<String>),
}

impl DirSpec {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let dirs: &[String] = match self {
            DirSpec::One(dir) => std::slice::from_ref(dir),
            DirSpec::Many(dirs) => dirs,
        };
        dirs.iter().map(String::as_str)
    }
}

impl From<&str> for DirSpec {
    fn from(dir: &str) -> Self {
        DirSpec::One(dir.to_owned())
    }
}

impl From<String> for DirSpec {
    fn from(dir: String) -> Self {
        DirSpec::One(dir)
    }
}

impl From<Vec<String>> for DirSpec {
    fn from(dirs: Vec<String>) -> Self {
        DirSpec::Many(dirs)
    }
}

impl From<Vec<&str>> for DirSpec {
    fn from(dirs: Vec<&str>) -> Self {
        DirSpec::Many(dirs.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for DirSpec {
    fn from(dirs: &[&str]) -> Self {
        DirSpec::Many(dirs.iter().map(|d| (*d).to_owned()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for DirSpec {
    fn from(dirs: [&str; N]) -> Self {
        DirSpec::Many(dirs.iter().map(|d| (*d).to_owned()).collect())
    }
}

#[derive(Clone, Debug)]
struct PrefixEntry {
    prefix: Prefix,
    dirs: Vec<BaseDir>,
}

/// Mapping from normalized [`Prefix`] to its ordered [`BaseDir`] list.
///
/// Built during configuration, read during resolution. There is no removal
/// API; a registry is discarded as a whole.
#[derive(Clone, Debug)]
pub struct PrefixRegistry {
    options: ResolveOptions,
    /// Registration order.
    entries: Vec<PrefixEntry>,
    /// Prefix → position in `entries`.
    index: FxHashMap<Prefix, usize>,
}

impl PrefixRegistry {
    /// Empty registry with default options.
    pub fn new() -> Self {
        Self::with_options(ResolveOptions::default())
    }

    pub fn with_options(options: ResolveOptions) -> Self {
        PrefixRegistry {
            options,
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// Normalize a raw prefix with this registry's namespace separator.
    pub fn normalize_prefix(&self, raw: &str) -> Prefix {
        Prefix::new(raw, self.options.namespace_separator)
    }

    /// Append `base_dir` to the directory list of `prefix`.
    ///
    /// Does not de-duplicate: registering the same pair twice probes the
    /// directory twice. The directory is not checked for existence.
    pub fn register_prefix(&mut self, prefix: &str, base_dir: &str) {
        let prefix = self.normalize_prefix(prefix);
        let base_dir = BaseDir::new(base_dir);
        trace!(%prefix, %base_dir, "register prefix");
        self.dirs_mut(prefix).push(base_dir);
    }

    /// Batch form of [`register_prefix`](Self::register_prefix), in caller order.
    pub fn register_prefixes<I, P, D>(&mut self, mapping: I)
    where
        I: IntoIterator<Item = (P, D)>,
        P: AsRef<str>,
        D: Into<DirSpec>,
    {
        for (prefix, dirs) in mapping {
            let dirs = dirs.into();
            for dir in dirs.iter() {
                self.register_prefix(prefix.as_ref(), dir);
            }
        }
    }

    /// Directories registered for `prefix` (normalized before lookup).
    pub fn dirs(&self, prefix: &str) -> Option<&[BaseDir]> {
        self.dirs_of(&self.normalize_prefix(prefix))
    }

    pub fn dirs_of(&self, prefix: &Prefix) -> Option<&[BaseDir]> {
        self.index
            .get(prefix)
            .map(|&idx| self.entries[idx].dirs.as_slice())
    }

    pub fn contains_dir(&self, prefix: &Prefix, dir: &BaseDir) -> bool {
        self.dirs_of(prefix).is_some_and(|dirs| dirs.contains(dir))
    }

    /// Prefixes and their directories, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&Prefix, &[BaseDir])> {
        self.entries
            .iter()
            .map(|entry| (&entry.prefix, entry.dirs.as_slice()))
    }

    /// Number of registered prefixes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append `dir` unless the prefix already lists it. Returns whether it
    /// was appended.
    pub(crate) fn push_once(&mut self, prefix: &Prefix, dir: BaseDir) -> bool {
        let dirs = self.dirs_mut(prefix.clone());
        if dirs.contains(&dir) {
            return false;
        }
        dirs.push(dir);
        true
    }

    /// The directory list for `prefix`, created empty if absent.
    pub(crate) fn dirs_mut(&mut self, prefix: Prefix) -> &mut Vec<BaseDir> {
        let idx = match self.index.get(&prefix) {
            Some(&idx) => idx,
            None => {
                let idx = self.entries.len();
                self.index.insert(prefix.clone(), idx);
                self.entries.push(PrefixEntry {
                    prefix,
                    dirs: Vec::new(),
                });
                idx
            }
        };
        &mut self.entries[idx].dirs
    }
}

impl Default for PrefixRegistry {
    fn default() -> Self {
        Self::new()
    }
}
