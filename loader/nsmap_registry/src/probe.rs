//! Path composition and the readable-file probe.

use std::fs;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use crate::options::ResolveOptions;
use crate::prefix::BaseDir;

/// Compose `base_dir + relative + "." + extension`.
///
/// Every namespace separator in `relative` becomes a path-segment boundary,
/// independent of the host's native path separator.
pub fn compose(base_dir: &BaseDir, relative: &str, options: &ResolveOptions) -> PathBuf {
    let mut path = String::with_capacity(
        base_dir.as_str().len() + relative.len() + options.extension.len() + 1,
    );
    path.push_str(base_dir.as_str());
    path.extend(relative.chars().map(|c| {
        if c == options.namespace_separator {
            MAIN_SEPARATOR
        } else {
            c
        }
    }));
    path.push('.');
    path.push_str(&options.extension);
    PathBuf::from(path)
}

/// Whether `path` is a regular file that can be opened for reading.
///
/// Symlinks are followed. Any I/O failure counts as "not readable".
pub fn is_readable_file(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.is_file()) && fs::File::open(path).is_ok()
}

/// The first composed path, in `dirs` order, that is a readable file.
pub fn probe(dirs: &[BaseDir], relative: &str, options: &ResolveOptions) -> Option<PathBuf> {
    dirs.iter()
        .map(|dir| compose(dir, relative, options))
        .find(|path| is_readable_file(path))
}
