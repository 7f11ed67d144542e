use super::*;
use pretty_assertions::assert_eq;
use std::fs::File;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn root_of(path: &Path) -> BaseDir {
    BaseDir::new(path.to_str().unwrap())
}

fn as_paths(dirs: &[BaseDir]) -> Vec<PathBuf> {
    dirs.iter().map(|d| d.as_path().to_path_buf()).collect()
}

#[test]
fn empty_root_has_no_subdirectories() {
    let dir = tempdir().unwrap();
    assert!(subdirectories(&root_of(dir.path())).is_empty());
}

#[test]
fn self_first_depth_first_order() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("b").join("deep")).unwrap();
    fs::create_dir_all(root.join("a").join("x").join("y")).unwrap();
    fs::create_dir_all(root.join("c")).unwrap();

    let found = subdirectories(&root_of(root));
    assert_eq!(
        as_paths(&found),
        vec![
            root.join("a"),
            root.join("a").join("x"),
            root.join("a").join("x").join("y"),
            root.join("b"),
            root.join("b").join("deep"),
            root.join("c"),
        ]
    );
}

#[test]
fn files_are_not_listed() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    File::create(dir.path().join("Top.php")).unwrap();
    File::create(dir.path().join("sub").join("Inner.php")).unwrap();

    let found = subdirectories(&root_of(dir.path()));
    assert_eq!(as_paths(&found), vec![dir.path().join("sub")]);
}

#[test]
fn entries_keep_single_trailing_separator() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();

    let with_slashes = format!("{}///", dir.path().to_str().unwrap());
    let found = subdirectories(&BaseDir::new(&with_slashes));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0], BaseDir::new(dir.path().join("sub").to_str().unwrap()));
}

#[test]
fn missing_root_yields_nothing() {
    let found = subdirectories(&BaseDir::new("/nonexistent/nsmap/walk"));
    assert!(found.is_empty());
}

#[cfg(unix)]
#[test]
fn symlinked_directory_is_listed_not_followed() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("root");
    let outside = dir.path().join("outside");
    fs::create_dir_all(root.join("real")).unwrap();
    fs::create_dir_all(outside.join("hidden")).unwrap();
    std::os::unix::fs::symlink(&outside, root.join("link")).unwrap();
    // A cycle back to the root must not recurse forever.
    std::os::unix::fs::symlink(&root, root.join("real").join("loop")).unwrap();

    let found = subdirectories(&root_of(&root));
    assert_eq!(
        as_paths(&found),
        vec![root.join("link"), root.join("real"), root.join("real").join("loop")]
    );
}
