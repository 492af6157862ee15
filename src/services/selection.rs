//! Interactive key selection for checkouts.
//!
//! Choosing a key is delegated to the presentation layer. A blocking caller
//! implements [`KeySelector`]; an event-driven caller (the TUI) holds a
//! [`PendingCheckout`] until the user confirms or cancels, then completes it.

use tracing::debug;

use super::key_registry::KeyRegistry;
use crate::models::KeyId;

/// Something that can ask the user to pick a key.
pub trait KeySelector {
    /// Blocks until a key is picked for `label`, or returns `None` on cancel.
    ///
    /// The registry is read-only here so the selector can show which keys
    /// are taken.
    fn select_key(&mut self, label: &str, registry: &KeyRegistry) -> Option<KeyId>;
}

impl<F> KeySelector for F
where
    F: FnMut(&str, &KeyRegistry) -> Option<KeyId>,
{
    fn select_key(&mut self, label: &str, registry: &KeyRegistry) -> Option<KeyId> {
        self(label, registry)
    }
}

/// Result of completing an interactive checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutOutcome {
    /// Key the user picked
    pub key: KeyId,
    /// Whether the registry accepted the checkout
    pub accepted: bool,
}

/// A checkout waiting for the user to pick a key.
///
/// Consumed by [`PendingCheckout::complete`], so a request can be resolved
/// at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCheckout {
    label: String,
}

impl PendingCheckout {
    /// Starts a selection for `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Label that will be checked out.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Resolves the request with the user's choice.
    ///
    /// `None` means the user cancelled and nothing changes. Otherwise the
    /// label is checked out to the picked key and the pick is reported
    /// whether or not the registry accepted it.
    pub fn complete(self, registry: &mut KeyRegistry, choice: Option<KeyId>) -> Option<CheckoutOutcome> {
        let Some(key) = choice else {
            debug!("Selection for '{}' cancelled", self.label);
            return None;
        };
        let accepted = registry.checkout_key(self.label, &key);
        debug!("Selection picked {} (accepted: {})", key, accepted);
        Some(CheckoutOutcome { key, accepted })
    }
}
