//! Error and exit code types shared by CLI commands.

use std::fmt;

/// Process exit codes for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Input was read but failed validation
    Validation = 1,
    /// Input could not be read or output could not be written
    Io = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// A CLI command failure carrying its exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process should end with
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Input failed validation.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// Reading or writing failed.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Io,
            message: message.into(),
        }
    }

    /// Numeric exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
