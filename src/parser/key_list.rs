//! Key list file parsing.
//!
//! A key list names the keys a registry accepts, one identifier per line:
//!
//! ```text
//! # Movement
//! W
//! A
//! S
//! D
//! Space
//! ```
//!
//! Blank lines and `#` comments are ignored. Entries that do not resolve to a
//! drawable key are skipped with a warning rather than aborting the load.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::key_db::KeyDb;
use crate::models::KeyId;

/// Why a key list entry was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The entry names no known key
    UnknownKey,
    /// The key is known but has no place on the on-screen keyboard
    MissingAsset,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKey => write!(f, "unknown key"),
            Self::MissingAsset => write!(f, "no on-screen key"),
        }
    }
}

/// A key list line that did not make it into the valid key set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    /// 1-based line number
    pub line: usize,
    /// Entry text as written (trimmed)
    pub text: String,
    /// Why it was skipped
    pub reason: SkipReason,
}

/// Result of parsing a key list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyList {
    /// Resolved keys in file order, without duplicates
    pub keys: Vec<KeyId>,
    /// Entries that were dropped
    pub skipped: Vec<SkippedEntry>,
}

impl KeyList {
    /// Returns true if every entry resolved.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Parses key list text against the key catalog.
///
/// Duplicate entries (including different spellings of the same key) keep
/// their first position.
pub fn parse_key_list(text: &str, key_db: &KeyDb) -> KeyList {
    let mut list = KeyList::default();
    let mut seen = HashSet::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_number = idx + 1;
        let entry = raw.trim();
        if entry.is_empty() || entry.starts_with('#') {
            continue;
        }

        let reason = match key_db.resolve(entry) {
            Some(def) if def.geometry.is_some() => {
                if seen.insert(def.id.clone()) {
                    list.keys.push(def.id.clone());
                } else {
                    debug!("Duplicate key '{}' on line {}", entry, line_number);
                }
                continue;
            }
            Some(_) => SkipReason::MissingAsset,
            None => SkipReason::UnknownKey,
        };

        warn!("Skipping key list entry '{}' on line {}: {}", entry, line_number, reason);
        list.skipped.push(SkippedEntry {
            line: line_number,
            text: entry.to_string(),
            reason,
        });
    }

    list
}

/// Reads and parses a key list file.
///
/// # Errors
///
/// Returns an error if the file cannot be read. Unresolvable entries are not
/// errors; they are reported in [`KeyList::skipped`].
pub fn load_key_list(path: &Path, key_db: &KeyDb) -> Result<KeyList> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read key list: {}", path.display()))?;
    Ok(parse_key_list(&content, key_db))
}

/// Parses the key list embedded in the binary.
pub fn default_key_list(key_db: &KeyDb) -> KeyList {
    parse_key_list(KeyDb::default_key_list(), key_db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn db() -> KeyDb {
        KeyDb::load().expect("Failed to load key catalog")
    }

    #[test]
    fn test_parse_preserves_order() {
        let list = parse_key_list("S\nA\nD\n", &db());
        assert_eq!(
            list.keys,
            vec![KeyId::new("S"), KeyId::new("A"), KeyId::new("D")]
        );
        assert!(list.is_clean());
    }

    #[test]
    fn test_parse_ignores_blank_lines_and_comments() {
        let list = parse_key_list("# header\n\n  A  \n\t\n# W\n", &db());
        assert_eq!(list.keys, vec![KeyId::new("A")]);
        assert!(list.is_clean());
    }

    #[test]
    fn test_parse_skips_unknown_entries() {
        let list = parse_key_list("A\nNOPE\nB\n", &db());
        assert_eq!(list.keys, vec![KeyId::new("A"), KeyId::new("B")]);
        assert_eq!(
            list.skipped,
            vec![SkippedEntry {
                line: 2,
                text: "NOPE".to_string(),
                reason: SkipReason::UnknownKey,
            }]
        );
    }

    #[test]
    fn test_parse_skips_keys_without_asset() {
        let list = parse_key_list("NUM_LOCK\nSPACE\n", &db());
        assert_eq!(list.keys, vec![KeyId::new("SPACE")]);
        assert_eq!(list.skipped.len(), 1);
        assert_eq!(list.skipped[0].reason, SkipReason::MissingAsset);
    }

    #[test]
    fn test_parse_collapses_duplicate_spellings() {
        let list = parse_key_list("Enter\nRETURN\nenter\nTab\n", &db());
        assert_eq!(list.keys, vec![KeyId::new("ENTER"), KeyId::new("TAB")]);
        assert!(list.is_clean());
    }

    #[test]
    fn test_default_key_list_is_clean() {
        let list = default_key_list(&db());
        assert!(list.is_clean());
        assert!(list.keys.contains(&KeyId::new("SPACE")));
        assert!(list.keys.contains(&KeyId::new("F12")));
    }

    #[test]
    fn test_load_key_list_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("keys.txt");
        fs::write(&path, "W\nA\nS\nD\nBOGUS\n").unwrap();

        let list = load_key_list(&path, &db()).unwrap();
        assert_eq!(list.keys.len(), 4);
        assert_eq!(list.skipped.len(), 1);
        assert_eq!(list.skipped[0].line, 5);
    }

    #[test]
    fn test_load_key_list_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_key_list(&temp_dir.path().join("absent.txt"), &db()).unwrap_err();
        assert!(err.to_string().contains("Failed to read key list"));
    }
}
