//! Shared CLI types: exit codes, errors and input checks.

use crate::constants::KEYLAYOUT_EXTENSION;
use std::fmt;
use std::path::Path;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Bad input, bad configuration or unusable file name
    ValidationError = 1,
    /// File system or parse failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process ends with
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// An I/O or parse failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// A validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Numeric process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Checks that an input path exists and carries the `.keylayout` suffix.
pub fn validate_input(path: &Path) -> CliResult<()> {
    if !path.exists() {
        return Err(CliError::validation(format!(
            "This input file does not exist: {}",
            path.display()
        )));
    }

    let is_keylayout = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(KEYLAYOUT_EXTENSION));
    if !is_keylayout {
        return Err(CliError::validation(format!(
            "Please use a xml-based .{} file: {}",
            KEYLAYOUT_EXTENSION,
            path.display()
        )));
    }

    Ok(())
}
