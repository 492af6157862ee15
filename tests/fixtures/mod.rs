//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use keylibrary::key_db::KeyDb;
use keylibrary::models::KeyId;
use keylibrary::services::KeyRegistry;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Shorthand for a key identifier.
pub fn key(id: &str) -> KeyId {
    KeyId::new(id)
}

/// Registry over `ids` in the given mode.
pub fn registry(ids: &[&str], allow_multi: bool) -> KeyRegistry {
    KeyRegistry::new(ids.iter().map(|id| key(id)), allow_multi)
}

/// The embedded key catalog.
pub fn key_db() -> KeyDb {
    KeyDb::load().expect("Failed to load key catalog")
}

/// Writes `content` to a key list file inside a fresh temp directory.
///
/// The directory is deleted when the returned `TempDir` is dropped.
pub fn create_temp_key_list(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("keys.txt");
    fs::write(&path, content).expect("Failed to write key list");
    (path, temp_dir)
}
