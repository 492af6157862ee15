//! Key catalog listing command.

use crate::cli::common::{CliError, CliResult};
use crate::key_db::KeyDb;
use clap::Args;

/// List the keys the catalog knows about
#[derive(Debug, Clone, Args)]
pub struct KeysArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl KeysArgs {
    /// Execute the keys command
    pub fn execute(&self) -> CliResult<()> {
        let key_db = KeyDb::load()
            .map_err(|e| CliError::io(format!("Failed to load key catalog: {e}")))?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(key_db.keys())
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        println!("{:<14} {:<8} {:>3} {:>3} {:>5}  ALIASES", "ID", "NAME", "ROW", "X", "WIDTH");
        for key in key_db.keys() {
            let aliases = key.aliases.join(", ");
            match key.geometry {
                Some(g) => println!(
                    "{:<14} {:<8} {:>3} {:>3} {:>5}  {}",
                    key.id, key.name, g.row, g.x, g.width, aliases
                ),
                // Resolvable but never drawn, so key lists cannot use it
                None => println!(
                    "{:<14} {:<8} {:>3} {:>3} {:>5}  {}",
                    key.id, key.name, "-", "-", "-", aliases
                ),
            }
        }
        println!("\n{} keys", key_db.key_count());

        Ok(())
    }
}
