//! CLI-specific error types with exit codes.

use std::fmt;
use std::io::ErrorKind;

use fspath::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// I/O error outside the library (writing output).
    Io(std::io::Error),

    /// Configuration error.
    Config(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Path not found
    /// - 2: Permission denied
    /// - 3: Path already exists, or directory not empty
    /// - 4: Invalid mode or pattern
    /// - 5: Other I/O error
    /// - 6: Other library error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(lib_err) => Self::library_exit_code(lib_err),
            CliError::Io(e) => Self::io_exit_code(e.kind()),
            CliError::Config(_) => 7,
        }
    }

    fn library_exit_code(error: &LibError) -> i32 {
        if error.is_not_empty() {
            return 3;
        }
        match error {
            LibError::Io { source, .. } => Self::io_exit_code(source.kind()),
            LibError::InvalidMode { .. } | LibError::InvalidPattern { .. } => 4,
            LibError::Configuration(_) | LibError::Validation { .. } => 7,
            _ => 6,
        }
    }

    fn io_exit_code(kind: ErrorKind) -> i32 {
        match kind {
            ErrorKind::NotFound => 1,
            ErrorKind::PermissionDenied => 2,
            ErrorKind::AlreadyExists => 3,
            _ => 5,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
