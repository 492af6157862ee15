//! Validation command for key list files.

use crate::cli::common::{CliError, CliResult};
use crate::key_db::KeyDb;
use crate::models::KeyId;
use crate::parser::{self, SkippedEntry};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Check that every entry in a key list names a drawable key
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to key list file
    #[arg(short, long, value_name = "FILE")]
    pub keys: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat skipped entries as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Serialize)]
struct ValidationResponse {
    valid: bool,
    key_count: usize,
    keys: Vec<KeyId>,
    skipped: Vec<SkippedEntry>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let key_db = KeyDb::load()
            .map_err(|e| CliError::io(format!("Failed to load key catalog: {e}")))?;

        let key_list = parser::load_key_list(&self.keys, &key_db)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        let has_keys = !key_list.keys.is_empty();
        let response = ValidationResponse {
            valid: has_keys && (key_list.is_clean() || !self.strict),
            key_count: key_list.keys.len(),
            keys: key_list.keys,
            skipped: key_list.skipped,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            if response.valid {
                println!("✓ Validation passed");
            } else {
                println!("✗ Validation failed");
            }
            println!("\nKeys: {}", response.key_count);

            if !response.skipped.is_empty() {
                println!("\nSkipped entries:");
                for entry in &response.skipped {
                    println!("  ⚠ line {}: {} ({})", entry.line, entry.text, entry.reason);
                }
            }
        }

        if !has_keys {
            return Err(CliError::validation("Key list contains no usable keys"));
        }
        if !response.valid {
            return Err(CliError::validation("Skipped entries found in strict mode"));
        }

        Ok(())
    }
}
