//! Key catalog and name resolution.
//!
//! This module provides access to the embedded catalog of known keys. Every
//! entry pairs a canonical key identifier with the geometry used to draw it
//! on the on-screen keyboard.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{KeyGeometry, KeyId};

/// Default initialization list shipped with the binary.
const DEFAULT_KEY_LIST: &str = include_str!("../data/keys.txt");

/// Individual key definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDefinition {
    /// Canonical identifier (e.g., "`BACK_SPACE`")
    pub id: KeyId,
    /// Short display name (e.g., "Bksp")
    pub name: String,
    /// Alternative spellings accepted when resolving
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Position on the on-screen keyboard, if the key is drawn
    #[serde(default)]
    pub geometry: Option<KeyGeometry>,
}

/// Database schema from keys.json.
#[derive(Debug, Clone, Deserialize)]
struct KeyCatalog {
    #[allow(dead_code)]
    version: String,
    keys: Vec<KeyDefinition>,
}

/// Catalog of known keys with case-insensitive lookup.
///
/// The catalog is embedded in the binary at compile time. Lookups accept the
/// canonical id, the display name or any alias.
#[derive(Debug, Clone)]
pub struct KeyDb {
    /// All key definitions in catalog order
    keys: Vec<KeyDefinition>,
    /// Lowercased id/name/alias to index into `keys`
    lookup: HashMap<String, usize>,
}

impl KeyDb {
    /// Loads the key catalog from the embedded JSON file.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("keys.json");
        let catalog: KeyCatalog =
            serde_json::from_str(json_data).context("Failed to parse embedded keys.json")?;
        Ok(Self::from_definitions(catalog.keys))
    }

    /// Builds a catalog from explicit definitions.
    ///
    /// When two entries share a spelling, the first one keeps it.
    #[must_use]
    pub fn from_definitions(keys: Vec<KeyDefinition>) -> Self {
        let mut lookup = HashMap::new();

        for (idx, key) in keys.iter().enumerate() {
            let spellings = std::iter::once(key.id.as_str())
                .chain(std::iter::once(key.name.as_str()))
                .chain(key.aliases.iter().map(String::as_str));
            for spelling in spellings {
                lookup.entry(spelling.to_lowercase()).or_insert(idx);
            }
        }

        Self { keys, lookup }
    }

    /// Resolves a user-supplied key name to its definition.
    ///
    /// Matching ignores case and surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use keylibrary::key_db::KeyDb;
    ///
    /// let db = KeyDb::load().unwrap();
    /// assert_eq!(db.resolve("back space").unwrap().id.as_str(), "BACK_SPACE");
    /// assert!(db.resolve("NOT_A_KEY").is_none());
    /// ```
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&KeyDefinition> {
        let needle = name.trim();
        if needle.is_empty() {
            return None;
        }
        let idx = self.lookup.get(&needle.to_lowercase())?;
        self.keys.get(*idx)
    }

    /// Gets a key definition by its canonical id.
    #[must_use]
    pub fn get(&self, id: &KeyId) -> Option<&KeyDefinition> {
        self.resolve(id.as_str()).filter(|key| &key.id == id)
    }

    /// Display name for a key, falling back to the raw id.
    #[must_use]
    pub fn display_name<'a>(&'a self, id: &'a KeyId) -> &'a str {
        self.get(id).map_or(id.as_str(), |key| key.name.as_str())
    }

    /// All key definitions in catalog order.
    #[must_use]
    pub fn keys(&self) -> &[KeyDefinition] {
        &self.keys
    }

    /// Gets the total number of keys.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Number of visual rows on the on-screen keyboard.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.keys
            .iter()
            .filter_map(|key| key.geometry)
            .map(|geometry| usize::from(geometry.row) + 1)
            .max()
            .unwrap_or(0)
    }

    /// Width of the widest row in quarter-key units.
    #[must_use]
    pub fn row_span(&self) -> u16 {
        self.keys
            .iter()
            .filter_map(|key| key.geometry)
            .map(|geometry| geometry.end())
            .max()
            .unwrap_or(0)
    }

    /// Contents of the built-in key list used when no file is configured.
    #[must_use]
    pub fn default_key_list() -> &'static str {
        DEFAULT_KEY_LIST
    }
}
