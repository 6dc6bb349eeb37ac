//! Error types for the fspath library.
//!
//! Host filesystem failures are carried as-is inside [`Error::Io`], tagged
//! with the operation that failed and the path it was applied to. The
//! remaining variants cover input the library validates before it reaches
//! the filesystem.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an fspath error.
///
/// # Examples
///
/// ```
/// use fspath::{Error, Result};
///
/// fn example_operation() -> Result<u64> {
///     Ok(4096)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the fspath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A host filesystem call failed.
    #[error("{op} {}: {source}", path.display())]
    Io {
        /// The operation that failed (`"stat"`, `"mkdir"`, ...).
        op: &'static str,
        /// The path the operation was applied to.
        path: PathBuf,
        /// The error reported by the host.
        #[source]
        source: io::Error,
    },

    /// A permission mode string could not be interpreted as octal.
    #[error("invalid mode '{value}': {reason}")]
    InvalidMode {
        /// The rejected mode string.
        value: String,
        /// Why the mode was rejected.
        reason: String,
    },

    /// A glob pattern failed to compile.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The rejected pattern.
        pattern: String,
        /// The underlying compile error.
        #[source]
        source: globset::Error,
    },

    /// A path could not be expressed in the requested form.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// Why the path is invalid.
        reason: String,
    },

    /// A numeric owner id has no entry in the user or group database.
    #[error("no {kind} entry for id {id} (owner of {})", path.display())]
    UnknownOwner {
        /// `"user"` or `"group"`.
        kind: &'static str,
        /// The numeric id that was looked up.
        id: u32,
        /// The path whose owner was requested.
        path: PathBuf,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Wrap a host error with the operation name and path.
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// The host error kind, if this error came from the filesystem.
    #[must_use]
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Path;
    ///
    /// let err = Path::new("/nonexistent/fspath/doc").size().unwrap_err();
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.io_kind() == Some(io::ErrorKind::NotFound)
    }

    /// Check if error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        self.io_kind() == Some(io::ErrorKind::PermissionDenied)
    }

    /// Check if error reports that the target already exists.
    #[must_use]
    pub fn is_already_exists(&self) -> bool {
        self.io_kind() == Some(io::ErrorKind::AlreadyExists)
    }

    /// Check if error reports a non-empty directory.
    #[must_use]
    pub fn is_not_empty(&self) -> bool {
        match self {
            Self::Io { source, .. } => is_not_empty_error(source),
            _ => false,
        }
    }
}

#[cfg(unix)]
fn is_not_empty_error(err: &io::Error) -> bool {
    err.raw_os_error() == Some(libc::ENOTEMPTY)
}

#[cfg(not(unix))]
fn is_not_empty_error(err: &io::Error) -> bool {
    // ERROR_DIR_NOT_EMPTY
    err.raw_os_error() == Some(145)
}
