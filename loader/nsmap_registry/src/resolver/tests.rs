use super::*;
use crate::options::ResolveOptions;
use pretty_assertions::assert_eq;
use std::fs::{self, File};
use std::path::Path;
use tempfile::tempdir;

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    File::create(path).unwrap();
}

fn s(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn resolves_bare_remainder() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("Kernel.php"));

    let mut registry = PrefixRegistry::new();
    registry.register_prefix("App", s(dir.path()));

    let found = Resolver::new(&registry).resolve("App\\Kernel").unwrap();
    assert_eq!(found, dir.path().join("Kernel.php"));
}

#[test]
fn resolves_nested_remainder() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("Sub").join("Name.php");
    touch(&target);

    let mut registry = PrefixRegistry::new();
    registry.register_prefix("\\App\\", s(dir.path()));

    assert_eq!(Resolver::new(&registry).resolve("App\\Sub\\Name"), Some(target));
}

#[test]
fn every_prefix_spelling_resolves_identically() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("Bar.php"));

    let results: Vec<Option<PathBuf>> = ["Foo", "\\Foo", "Foo\\", "\\Foo\\"]
        .iter()
        .map(|raw| {
            let mut registry = PrefixRegistry::new();
            registry.register_prefix(raw, s(dir.path()));
            Resolver::new(&registry).resolve("Foo\\Bar")
        })
        .collect();

    assert!(results[0].is_some());
    assert!(results.iter().all(|r| r == &results[0]));
}

#[test]
fn multi_directory_fallback() {
    let d1 = tempdir().unwrap();
    let d2 = tempdir().unwrap();
    touch(&d2.path().join("Thing.php"));

    let mut registry = PrefixRegistry::new();
    registry.register_prefixes([("P", [s(d1.path()), s(d2.path())])]);

    let found = Resolver::new(&registry).resolve("P\\Thing").unwrap();
    assert_eq!(found, d2.path().join("Thing.php"));
}

#[test]
fn earlier_prefix_wins_over_more_specific_one() {
    let general = tempdir().unwrap();
    let specific = tempdir().unwrap();
    touch(&general.path().join("B").join("X.php"));
    touch(&specific.path().join("X.php"));

    let mut registry = PrefixRegistry::new();
    registry.register_prefix("A\\", s(general.path()));
    registry.register_prefix("A\\B\\", s(specific.path()));

    let found = Resolver::new(&registry).resolve("A\\B\\X").unwrap();
    assert_eq!(found, general.path().join("B").join("X.php"));
}

#[test]
fn later_prefix_tried_after_earlier_probe_misses() {
    let general = tempdir().unwrap();
    let specific = tempdir().unwrap();
    touch(&specific.path().join("X.php"));

    let mut registry = PrefixRegistry::new();
    registry.register_prefix("A", s(general.path()));
    registry.register_prefix("A\\B", s(specific.path()));

    let found = Resolver::new(&registry).resolve("A\\B\\X").unwrap();
    assert_eq!(found, specific.path().join("X.php"));
}

#[test]
fn candidates_follow_probe_order() {
    let mut registry = PrefixRegistry::new();
    registry.register_prefix("A", "/general/one");
    registry.register_prefix("Other", "/other");
    registry.register_prefix("A\\B", "/specific");
    registry.register_prefix("A", "/general/two");

    let resolver = Resolver::new(&registry);
    assert_eq!(
        resolver.candidates("A\\B\\X"),
        vec![
            Path::new("/general/one").join("B").join("X.php"),
            Path::new("/general/two").join("B").join("X.php"),
            Path::new("/specific").join("X.php"),
        ]
    );

    let prefixes: Vec<&str> = resolver
        .matching_prefixes("A\\B\\X")
        .into_iter()
        .map(Prefix::as_str)
        .collect();
    assert_eq!(prefixes, vec!["A\\", "A\\B\\"]);
}

#[test]
fn unregistered_prefix_is_not_found() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("Thing.php"));

    let mut registry = PrefixRegistry::new();
    registry.register_prefix("App", s(dir.path()));
    let before = format!("{registry:?}");

    let resolver = Resolver::new(&registry);
    assert!(resolver.resolve("Vendor\\Thing").is_none());
    assert!(resolver.resolve("Vendor\\Thing").is_none());
    assert!(resolver.candidates("Vendor\\Thing").is_empty());
    assert_eq!(format!("{registry:?}"), before);
}

#[test]
fn registered_prefix_without_file_is_not_found() {
    let dir = tempdir().unwrap();
    let mut registry = PrefixRegistry::new();
    registry.register_prefix("App", s(dir.path()));

    assert!(Resolver::new(&registry).resolve("App\\Missing").is_none());
}

#[test]
fn missing_directory_is_silently_not_found() {
    let mut registry = PrefixRegistry::new();
    registry.register_prefix("App", "/nonexistent/nsmap/resolver");

    assert!(Resolver::new(&registry).resolve("App\\Thing").is_none());
}

#[test]
fn lookup_is_case_sensitive() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("Thing.php"));

    let mut registry = PrefixRegistry::new();
    registry.register_prefix("App", s(dir.path()));

    assert!(Resolver::new(&registry).resolve("app\\Thing").is_none());
}

#[test]
fn dotted_names_with_custom_extension() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("net").join("Socket.src");
    touch(&target);

    let options = ResolveOptions::with_separator('.').extension("src");
    let mut registry = PrefixRegistry::with_options(options);
    registry.register_prefix("std", s(dir.path()));

    assert_eq!(Resolver::new(&registry).resolve("std.net.Socket"), Some(target));
}
