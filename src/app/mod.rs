//! Application orchestration layer
//!
//! Coordinates config, key catalog, registry and TUI without containing
//! detailed implementation logic.

/// Registry construction and terminal UI startup
pub mod launch;

pub use launch::{build_registry, launch, RegistrySetup};
