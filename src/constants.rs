//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "KeyLibrary";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "KeyLibrary";

/// Log file written while the terminal UI owns the screen.
pub const LOG_FILE_NAME: &str = "keylibrary.log";
