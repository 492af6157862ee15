//! Data models shared by the registry, the key catalog and the UI.
//!
//! Models are independent of UI and business logic.

pub mod key;

pub use key::{KeyGeometry, KeyId};
