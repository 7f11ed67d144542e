//! Eager subdirectory discovery for package roots.

use std::fs;

use tracing::trace;

use crate::prefix::BaseDir;

/// Every directory below `root`, depth-first, each directory before its
/// children. `root` itself is not included.
///
/// Siblings are visited in byte order of their names. A symlink to a
/// directory is listed but not descended into. Unreadable directories and
/// entries whose names are not valid UTF-8 are skipped without error.
pub fn subdirectories(root: &BaseDir) -> Vec<BaseDir> {
    let mut found = Vec::new();
    walk(root, &mut found);
    found
}

fn walk(dir: &BaseDir, found: &mut Vec<BaseDir>) {
    let entries = match fs::read_dir(dir.as_path()) {
        Ok(entries) => entries,
        Err(err) => {
            trace!(%dir, %err, "skipping unreadable directory");
            return;
        }
    };

    let mut children: Vec<(String, bool)> = Vec::new();
    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let descend = if file_type.is_dir() {
            true
        } else if file_type.is_symlink() && entry.path().is_dir() {
            false
        } else {
            continue;
        };
        match entry.file_name().into_string() {
            Ok(name) => children.push((name, descend)),
            Err(name) => trace!(%dir, ?name, "skipping non-UTF-8 directory name"),
        }
    }
    children.sort_unstable_by(|a, b| a.0.cmp(&b.0));

    for (name, descend) in children {
        let child = dir.child(&name);
        trace!(dir = %child, "discovered directory");
        found.push(child.clone());
        if descend {
            walk(&child, found);
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
