//! Registry construction and TUI startup.

use anyhow::Result;
use tracing::{info, warn};

use crate::config::{Assignment, Config};
use crate::key_db::KeyDb;
use crate::parser::{self, SkippedEntry};
use crate::services::KeyRegistry;
use crate::tui;

/// A freshly built registry plus what was dropped while building it.
#[derive(Debug, Clone)]
pub struct RegistrySetup {
    /// Registry with default assignments applied
    pub registry: KeyRegistry,
    /// Key list entries that did not resolve
    pub skipped: Vec<SkippedEntry>,
    /// Configured assignments the registry refused
    pub rejected: Vec<Assignment>,
}

/// Builds the registry described by `config`.
///
/// The key list comes from `registry.keys_file` when set, otherwise from the
/// built-in list. Default assignments are then checked out in order;
/// assignments naming an unknown or already taken key are logged and kept
/// in [`RegistrySetup::rejected`].
///
/// # Errors
///
/// Returns an error if the configured key list cannot be read.
pub fn build_registry(config: &Config, key_db: &KeyDb) -> Result<RegistrySetup> {
    let key_list = match &config.registry.keys_file {
        Some(path) => {
            info!("Loading key list from {}", path.display());
            parser::load_key_list(path, key_db)?
        }
        None => parser::default_key_list(key_db),
    };

    info!(
        "Key list: {} keys, {} skipped",
        key_list.keys.len(),
        key_list.skipped.len()
    );

    let mut registry = KeyRegistry::new(key_list.keys, config.registry.allow_multi);
    let mut rejected = Vec::new();

    for assignment in &config.assignments {
        let accepted = key_db
            .resolve(&assignment.key)
            .is_some_and(|def| registry.checkout_key(assignment.label.clone(), &def.id));
        if !accepted {
            warn!(
                "Could not check out '{}' to key '{}'",
                assignment.label, assignment.key
            );
            rejected.push(assignment.clone());
        }
    }

    Ok(RegistrySetup {
        registry,
        skipped: key_list.skipped,
        rejected,
    })
}

/// Builds the registry and runs the terminal UI until the user quits.
pub fn launch(config: Config) -> Result<()> {
    let key_db = KeyDb::load()?;
    let setup = build_registry(&config, &key_db)?;

    let mut app_state = tui::AppState::new(setup.registry, key_db, config);
    app_state.report_startup(&setup.skipped, &setup.rejected);

    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::KeyId;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn db() -> KeyDb {
        KeyDb::load().unwrap()
    }

    fn assignment(label: &str, key: &str) -> Assignment {
        Assignment {
            label: label.to_string(),
            key: key.to_string(),
        }
    }

    #[test]
    fn test_build_registry_uses_default_list() {
        let setup = build_registry(&Config::new(), &db()).unwrap();
        assert!(setup.registry.contains_key(&KeyId::new("SPACE")));
        assert!(setup.skipped.is_empty());
        assert!(setup.rejected.is_empty());
    }

    #[test]
    fn test_build_registry_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("keys.txt");
        fs::write(&path, "W\nA\nS\nD\nWHAT\n").unwrap();

        let mut config = Config::new();
        config.registry.keys_file = Some(path);

        let setup = build_registry(&config, &db()).unwrap();
        assert_eq!(setup.registry.len(), 4);
        assert_eq!(setup.skipped.len(), 1);
        assert!(!setup.registry.contains_key(&KeyId::new("SPACE")));
    }

    #[test]
    fn test_build_registry_missing_file_is_error() {
        let mut config = Config::new();
        config.registry.keys_file = Some(PathBuf::from("/definitely/not/here/keys.txt"));
        assert!(build_registry(&config, &db()).is_err());
    }

    #[test]
    fn test_build_registry_applies_assignments() {
        let mut config = Config::new();
        config.assignments = vec![
            assignment("Jump", "space"),
            assignment("Crouch", "Ctrl"),
            assignment("Dash", "Space"),
            assignment("Teleport", "NoSuchKey"),
        ];

        let setup = build_registry(&config, &db()).unwrap();
        assert_eq!(
            setup.registry.labels_for(&KeyId::new("SPACE")),
            &["Jump".to_string()]
        );
        assert!(setup.registry.is_occupied(&KeyId::new("CONTROL")));
        assert_eq!(
            setup.rejected,
            vec![assignment("Dash", "Space"), assignment("Teleport", "NoSuchKey")]
        );
    }

    #[test]
    fn test_build_registry_multi_mode_accepts_shared_key() {
        let mut config = Config::new();
        config.registry.allow_multi = true;
        config.assignments = vec![assignment("Jump", "Space"), assignment("Dash", "Space")];

        let setup = build_registry(&config, &db()).unwrap();
        assert!(setup.rejected.is_empty());
        assert_eq!(setup.registry.labels_for(&KeyId::new("SPACE")).len(), 2);
    }
}
