//! Test helpers for lead service tests

use std::path::PathBuf;

use regex::Regex;
use tempfile::TempDir;

use crate::services::RealLeadStore;

/// Create a store inside a fresh temporary directory.
/// The directory is removed when the returned guard is dropped.
pub fn temp_store() -> (TempDir, RealLeadStore, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("leads.csv");
    let store = RealLeadStore::new(path.clone(), "MOB");
    (dir, store, path)
}

/// Matches `PREFIX-YYYYMMDD-NNNN`
pub fn lead_id_pattern(prefix: &str) -> Regex {
    Regex::new(&format!(r"^{}-\d{{8}}-\d{{4}}$", regex::escape(prefix))).expect("valid regex")
}
