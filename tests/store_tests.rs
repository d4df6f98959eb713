//! Tests for the file-backed report store
//!
//! Covers persistence format, enumeration order, and the skip-and-log
//! policy for undecodable files. Each test gets its own scratch directory.

use custodia::report::{decode_report, ObservationReport, Tool};
use custodia::store::ReportStore;
use tempfile::tempdir;

#[test]
fn test_persist_creates_one_decodable_file() {
    let dir = tempdir().unwrap();
    let store = ReportStore::open(dir.path()).unwrap();

    let report = ObservationReport::ingested("cam-data".to_string(), Tool::Exiftool);
    let path = store.persist(&report).unwrap();

    assert!(path.exists());
    assert_eq!(path.parent().unwrap(), dir.path());
    assert_eq!(path.extension().unwrap(), "json");

    let document = std::fs::read_to_string(&path).unwrap();
    assert_eq!(decode_report(&document).unwrap(), report);
}

#[test]
fn test_persisted_names_are_unique_and_flat() {
    let dir = tempdir().unwrap();
    let store = ReportStore::open(dir.path()).unwrap();

    let mut paths = Vec::new();
    for i in 0..20 {
        let report = ObservationReport::ingested(format!("p{i}"), Tool::Mmb);
        paths.push(store.persist(&report).unwrap());
    }

    let mut unique = paths.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), paths.len(), "timestamp-window collision");

    // no subdirectories, no manifest
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 20);
}

#[test]
fn test_list_all_empty_store() {
    let dir = tempdir().unwrap();
    let store = ReportStore::open(dir.path()).unwrap();
    assert!(store.list_all().is_empty());
}

#[test]
fn test_list_all_returns_acceptance_order() {
    let dir = tempdir().unwrap();
    let store = ReportStore::open(dir.path()).unwrap();

    for i in 0..10 {
        let report = ObservationReport::ingested(format!("seq-{i}"), Tool::Wireshark);
        store.persist(&report).unwrap();
    }

    let listed = store.list_all();
    assert_eq!(listed.len(), 10);
    for (i, report) in listed.iter().enumerate() {
        assert_eq!(report.observation_data, format!("seq-{i}"));
    }
}

#[test]
fn test_undecodable_file_is_skipped_not_fatal() {
    let dir = tempdir().unwrap();
    let store = ReportStore::open(dir.path()).unwrap();

    let good = ObservationReport::ingested("good".to_string(), Tool::Exiftool);
    store.persist(&good).unwrap();
    std::fs::write(dir.path().join("00000000000000000000000000.json"), "garbage").unwrap();

    let listed = store.list_all();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], good);
}

#[test]
fn test_non_report_files_are_ignored() {
    let dir = tempdir().unwrap();
    let store = ReportStore::open(dir.path()).unwrap();

    std::fs::write(dir.path().join("notes.txt"), "not a report").unwrap();
    std::fs::create_dir(dir.path().join("subdir")).unwrap();

    assert!(store.list_all().is_empty());
}

#[test]
fn test_persist_reports_error_when_directory_vanishes() {
    let dir = tempdir().unwrap();
    let store = ReportStore::open(dir.path()).unwrap();

    // out-of-band deletion of the backing directory
    std::fs::remove_dir_all(dir.path()).unwrap();

    let report = ObservationReport::ingested("orphan".to_string(), Tool::Exiftool);
    assert!(store.persist(&report).is_err());
}

#[test]
fn test_unreadable_directory_lists_empty_never_errors() {
    let dir = tempdir().unwrap();
    let store = ReportStore::open(dir.path()).unwrap();

    std::fs::remove_dir_all(dir.path()).unwrap();

    assert!(store.list_all().is_empty());
}

#[test]
fn test_open_creates_missing_directory() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("evidence").join("reports");
    assert!(!nested.exists());
    let _store = ReportStore::open(&nested).unwrap();
    assert!(nested.is_dir());
}
