//! Key registry: which labels are checked out to which keys.
//!
//! The registry owns the valid key set and, for each valid key, the ordered
//! labels currently assigned to it. It performs no I/O; the UI re-reads it
//! after every mutating call.

use std::collections::HashMap;

use super::selection::{KeySelector, PendingCheckout};
use crate::models::KeyId;

/// Registry of key assignments with checkout/return semantics.
///
/// # Invariants
///
/// - Every valid key maps to a (possibly empty) label sequence
/// - No key outside the valid set is ever stored
/// - Without multi mode, no sequence holds more than one label
#[derive(Debug, Clone)]
pub struct KeyRegistry {
    /// Valid keys in construction order
    order: Vec<KeyId>,
    /// Labels per valid key, in checkout order
    library: HashMap<KeyId, Vec<String>>,
    /// Whether a key may hold more than one label
    allow_multi: bool,
}

impl KeyRegistry {
    /// Creates a registry where every valid key starts unoccupied.
    ///
    /// Duplicate keys keep their first position.
    pub fn new(valid_keys: impl IntoIterator<Item = KeyId>, allow_multi: bool) -> Self {
        let mut order = Vec::new();
        let mut library = HashMap::new();

        for key in valid_keys {
            if library.contains_key(&key) {
                continue;
            }
            library.insert(key.clone(), Vec::new());
            order.push(key);
        }

        Self {
            order,
            library,
            allow_multi,
        }
    }

    /// Checks out `key` to `label`.
    ///
    /// Returns `false` without changing anything if the key is not valid, or
    /// if multi mode is off and the key is already occupied.
    pub fn checkout_key(&mut self, label: impl Into<String>, key: &KeyId) -> bool {
        let Some(labels) = self.library.get_mut(key) else {
            return false;
        };
        if !self.allow_multi && !labels.is_empty() {
            return false;
        }
        labels.push(label.into());
        true
    }

    /// Lets `selector` pick a key for `label`, then checks it out.
    ///
    /// Returns `None` if the selection was cancelled. Otherwise returns the
    /// picked key even when the checkout itself was refused; callers that
    /// need to know should consult [`Self::labels_for`] or use
    /// [`PendingCheckout::complete`] directly.
    pub fn checkout_key_interactive<S>(&mut self, label: &str, selector: &mut S) -> Option<KeyId>
    where
        S: KeySelector + ?Sized,
    {
        let pending = PendingCheckout::new(label);
        let choice = selector.select_key(pending.label(), self);
        pending.complete(self, choice).map(|outcome| outcome.key)
    }

    /// Returns the first occurrence of `label` from `key`.
    ///
    /// Returns `false` if the key is invalid or does not hold the label.
    pub fn return_key(&mut self, label: &str, key: &KeyId) -> bool {
        let Some(labels) = self.library.get_mut(key) else {
            return false;
        };
        match labels.iter().position(|held| held == label) {
            Some(idx) => {
                labels.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Returns `label` from every key currently holding it.
    ///
    /// Returns `true` if at least one key released it.
    pub fn return_label(&mut self, label: &str) -> bool {
        let mut released = false;
        for labels in self.library.values_mut() {
            if let Some(idx) = labels.iter().position(|held| held == label) {
                labels.remove(idx);
                released = true;
            }
        }
        released
    }

    /// Labels checked out to `key`, oldest first.
    ///
    /// Empty if the key is invalid or unoccupied.
    #[must_use]
    pub fn labels_for(&self, key: &KeyId) -> &[String] {
        self.library.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `key` holds at least one label.
    #[must_use]
    pub fn is_occupied(&self, key: &KeyId) -> bool {
        !self.labels_for(key).is_empty()
    }

    /// Whether `key` belongs to the valid key set.
    #[must_use]
    pub fn contains_key(&self, key: &KeyId) -> bool {
        self.library.contains_key(key)
    }

    /// Whether keys may hold more than one label.
    #[must_use]
    pub const fn allow_multi(&self) -> bool {
        self.allow_multi
    }

    /// Valid keys in construction order.
    #[must_use]
    pub fn keys(&self) -> &[KeyId] {
        &self.order
    }

    /// Number of valid keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the valid key set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Occupied keys in construction order.
    pub fn occupied_keys(&self) -> impl Iterator<Item = &KeyId> + '_ {
        self.order.iter().filter(|key| self.is_occupied(key))
    }

    /// Keys currently holding `label`, in construction order.
    #[must_use]
    pub fn keys_for_label(&self, label: &str) -> Vec<&KeyId> {
        self.order
            .iter()
            .filter(|key| self.labels_for(key).iter().any(|held| held == label))
            .collect()
    }
}
