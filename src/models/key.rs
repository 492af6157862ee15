//! Key identifier and on-screen key geometry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for one physical key (e.g., "A", "SPACE", "F1").
///
/// Identifiers are compared by their canonical name. Whether an identifier
/// is usable is decided by the `KeyDb` it is resolved against and by the
/// valid key set of the `KeyRegistry` it is used with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyId(String);

impl KeyId {
    /// Creates a key identifier from its canonical name.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the canonical name of this key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for KeyId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Placement of a key on the on-screen keyboard.
///
/// Horizontal values are in quarter-key units, so a standard key is
/// `width == 4` and a 2.25u Shift is `width == 9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyGeometry {
    /// Visual row (0 = function row)
    pub row: u8,
    /// Offset from the left edge in quarter-key units
    pub x: u16,
    /// Width in quarter-key units
    pub width: u16,
}

impl KeyGeometry {
    /// Creates a new geometry entry.
    #[must_use]
    pub const fn new(row: u8, x: u16, width: u16) -> Self {
        Self { row, x, width }
    }

    /// First quarter-unit column past the right edge of the key.
    #[must_use]
    pub const fn end(&self) -> u16 {
        self.x + self.width
    }
}
