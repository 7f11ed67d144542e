//! The load step: turning a located file into source text.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LoadError;

/// A loaded unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedSource {
    /// The symbolic name that was resolved.
    pub name: String,
    pub path: PathBuf,
    pub contents: String,
}

/// The host primitive that reads (or executes) a located file.
pub trait SourceLoader {
    fn load(&self, name: &str, path: &Path) -> Result<LoadedSource, LoadError>;
}

/// Reads the located file as UTF-8 text.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsSourceLoader;

impl SourceLoader for FsSourceLoader {
    fn load(&self, name: &str, path: &Path) -> Result<LoadedSource, LoadError> {
        let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
            name: name.to_owned(),
            path: path.to_path_buf(),
            source,
        })?;
        Ok(LoadedSource {
            name: name.to_owned(),
            path: path.to_path_buf(),
            contents,
        })
    }
}
