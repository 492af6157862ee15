//! CLI command handlers for KeyLibrary.
//!
//! Headless, scriptable access to the key catalog and key list checks for
//! automation and CI.

pub mod common;
pub mod keys;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use keys::KeysArgs;
pub use validate::ValidateArgs;
