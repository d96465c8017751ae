//! Integration tests for the cache store public API.

use std::fs;

use ridgepole::template::{TemplateId, TemplateStore};
use tempfile::TempDir;

fn seed(root: &std::path::Path, entry: &str) {
    fs::create_dir_all(root.join(entry)).unwrap();
}

#[test]
fn list_on_empty_root_returns_empty_sequence() {
    let root = TempDir::new().unwrap();
    let store = TemplateStore::new(root.path());

    assert!(store.list().unwrap().is_empty());
}

#[test]
fn list_reconstructs_two_level_identifiers() {
    let root = TempDir::new().unwrap();
    let store = TemplateStore::new(root.path());

    seed(root.path(), "acme/widgets");
    seed(root.path(), "octo/hello-world");

    let ids: Vec<String> = store.list().unwrap().iter().map(|i| i.to_string()).collect();
    assert_eq!(ids, ["acme/widgets", "octo/hello-world"]);
}

#[test]
fn list_is_freshly_computed_each_call() {
    let root = TempDir::new().unwrap();
    let store = TemplateStore::new(root.path());

    seed(root.path(), "acme/widgets");
    assert_eq!(store.list().unwrap().len(), 1);

    seed(root.path(), "acme/gadgets");
    assert_eq!(store.list().unwrap().len(), 2);
}

#[test]
fn clean_removes_entries_and_reports_two_deletions() {
    let root = TempDir::new().unwrap();
    let store = TemplateStore::new(root.path());

    seed(root.path(), "acme/widgets");
    seed(root.path(), "acme/gadgets");

    let mut reported = Vec::new();
    let removed = store.clean(|id| reported.push(id.to_string())).unwrap();

    assert_eq!(removed, 2);
    assert_eq!(reported.len(), 2);
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn clean_on_missing_root_surfaces_the_read_error() {
    let root = TempDir::new().unwrap();
    let store = TemplateStore::new(root.path().join("does-not-exist"));

    assert!(store.clean(|_| {}).is_err());
}

#[test]
fn exists_does_not_distinguish_empty_from_populated() {
    let root = TempDir::new().unwrap();
    let store = TemplateStore::new(root.path());

    seed(root.path(), "acme/empty");
    seed(root.path(), "acme/full");
    fs::write(root.path().join("acme/full/README.md"), "x").unwrap();

    assert!(store.exists(&TemplateId::parse("acme/empty").unwrap()));
    assert!(store.exists(&TemplateId::parse("acme/full").unwrap()));
}
