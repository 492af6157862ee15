//! Service layer for business logic.
//!
//! The key registry and the interactive selection flow that feeds it.

pub mod key_registry;
pub mod selection;

// Re-export commonly used types
pub use key_registry::KeyRegistry;
pub use selection::{CheckoutOutcome, KeySelector, PendingCheckout};
