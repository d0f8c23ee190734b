//! Integration tests for fcnscrape-store
//!
//! These tests exercise the artifact lifecycle of a release directory.

use fcnscrape_domain::traits::ArtifactStore;
use fcnscrape_domain::{Release, ToolboxCatalog};
use fcnscrape_store::{JsonStore, StoreError};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, JsonStore, Release) {
    let dir = TempDir::new().unwrap();
    let store = JsonStore::new(dir.path().join("out"), dir.path().join("blacklist.JSON"));
    let release = Release::parse("R2020a").unwrap();
    (dir, store, release)
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_write_toolbox_strips_spaces_and_tab_indents() {
    let (_dir, store, release) = setup();

    store
        .write_toolbox(&release, "Signal Processing Toolbox", &names(&["filter", "fft"]))
        .unwrap();

    let path = store.release_dir(&release).join("SignalProcessingToolbox.JSON");
    assert_eq!(fs::read_to_string(path).unwrap(), "[\n\t\"filter\",\n\t\"fft\"\n]\n");
}

#[test]
fn test_write_toolbox_overwrites() {
    let (_dir, store, release) = setup();

    store.write_toolbox(&release, "MATLAB", &names(&["a", "b"])).unwrap();
    store.write_toolbox(&release, "MATLAB", &names(&["c"])).unwrap();

    let text = fs::read_to_string(store.toolbox_path(&release, "MATLAB")).unwrap();
    assert_eq!(text, "[\n\t\"c\"\n]\n");
}

#[test]
fn test_combine_dedups_and_sorts_case_insensitively() {
    let (_dir, store, release) = setup();

    store.write_toolbox(&release, "Zed", &names(&["Zeta", "plot"])).unwrap();
    store.write_toolbox(&release, "Alpha", &names(&["alpha", "plot", "Plot"])).unwrap();

    let count = store.combine(&release).unwrap();

    assert_eq!(count, 4);
    assert_eq!(
        store.load_combined(&release).unwrap(),
        names(&["alpha", "Plot", "plot", "Zeta"])
    );
}

#[test]
fn test_combine_excludes_cache_and_previous_combined() {
    let (_dir, store, release) = setup();

    let mut catalog = ToolboxCatalog::new();
    catalog.insert_url(&["all products"], "MATLAB", "https://example.test/matlab");
    store.save_catalog(&release, &catalog).unwrap();
    store.write_toolbox(&release, "MATLAB", &names(&["disp"])).unwrap();

    assert_eq!(store.combine(&release).unwrap(), 1);
    // Second run must not read the combined artifact or the URL cache as input
    assert_eq!(store.combine(&release).unwrap(), 1);
    assert_eq!(store.load_combined(&release).unwrap(), names(&["disp"]));
}

#[test]
fn test_combine_is_byte_identical_on_rerun() {
    let (_dir, store, release) = setup();

    store.write_toolbox(&release, "A", &names(&["b", "a"])).unwrap();
    store.write_toolbox(&release, "B", &names(&["C"])).unwrap();

    store.combine(&release).unwrap();
    let first = fs::read(store.combined_path(&release)).unwrap();
    store.combine(&release).unwrap();
    let second = fs::read(store.combined_path(&release)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_combine_ignores_other_extensions() {
    let (_dir, store, release) = setup();

    store.write_toolbox(&release, "A", &names(&["x"])).unwrap();
    fs::write(store.release_dir(&release).join("notes.txt"), "not a list").unwrap();
    fs::write(store.release_dir(&release).join("lower.json"), "{}").unwrap();

    assert_eq!(store.combine(&release).unwrap(), 1);
}

#[test]
fn test_combine_rejects_non_list_artifact() {
    let (_dir, store, release) = setup();

    store.write_toolbox(&release, "A", &names(&["x"])).unwrap();
    fs::write(store.release_dir(&release).join("Broken.JSON"), "{\"a\": 1}").unwrap();

    let err = store.combine(&release).unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(_)));
}

#[test]
fn test_combine_without_release_dir() {
    let (_dir, store, release) = setup();
    assert!(matches!(store.combine(&release), Err(StoreError::MissingArtifact(_))));
}

#[test]
fn test_catalog_round_trip_and_denest() {
    let (_dir, store, release) = setup();
    assert!(!store.has_catalog(&release));

    let mut catalog = ToolboxCatalog::new();
    catalog.insert_url(&["matlab"], "MATLAB", "u1");
    catalog.insert_url(&["matlab", "Signal Processing"], "Signal Processing Toolbox", "u2");
    catalog.insert_url(&["simulink"], "Simulink", "u3");
    store.save_catalog(&release, &catalog).unwrap();

    assert!(store.has_catalog(&release));
    assert_eq!(store.load_catalog(&release).unwrap(), catalog);

    let urls = store.load_toolbox_urls(&release).unwrap();
    let pairs: Vec<(&str, &str)> = urls.iter().collect();
    assert_eq!(
        pairs,
        vec![
            ("MATLAB", "u1"),
            ("Signal Processing Toolbox", "u2"),
            ("Simulink", "u3"),
        ]
    );
}

#[test]
fn test_missing_catalog_is_fatal() {
    let (_dir, store, release) = setup();
    assert!(matches!(
        store.load_toolbox_urls(&release),
        Err(StoreError::MissingArtifact(_))
    ));
}

#[test]
fn test_blacklist_loading() {
    let (dir, store, _release) = setup();

    assert!(matches!(store.load_blacklist(), Err(StoreError::MissingArtifact(_))));

    fs::write(dir.path().join("blacklist.JSON"), "[\"end\", \"if\"]").unwrap();
    let blacklist = store.load_blacklist().unwrap();
    assert_eq!(blacklist.len(), 2);
    assert!(blacklist.contains("end"));
    assert!(!blacklist.contains("endfoo"));

    fs::write(dir.path().join("blacklist.JSON"), "[\"end\",").unwrap();
    assert!(matches!(store.load_blacklist(), Err(StoreError::Json { .. })));
}
