//! `stat` records.

use chrono::SecondsFormat;
use serde::Serialize;

use crate::error::Result;
use crate::path::Path;

/// What a path refers to, without following a final symlink.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory.
    Dir,
    /// A symbolic link.
    Symlink,
    /// Anything else (device, socket, fifo).
    Other,
}

impl EntryKind {
    /// Short name used in listings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Dir => "dir",
            Self::Symlink => "symlink",
            Self::Other => "other",
        }
    }
}

/// A snapshot of a path's metadata.
///
/// Fields that need the link target (size aside) are `None` when a
/// symlink dangles.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PathInfo {
    /// The path text.
    pub path: String,
    /// Entry type.
    pub kind: EntryKind,
    /// Size in bytes.
    pub size: u64,
    /// Octal permission string, e.g. `0644`.
    pub mode: Option<String>,
    /// Owning user name.
    pub user: Option<String>,
    /// Owning group name.
    pub group: Option<String>,
    /// Modification time, RFC 3339.
    pub modified: Option<String>,
}

impl PathInfo {
    /// Read the metadata of `path`.
    ///
    /// # Errors
    ///
    /// Returns the host `lstat` error if the path itself is missing.
    pub fn collect(path: &Path) -> Result<Self> {
        let own = path.symlink_metadata()?;
        let file_type = own.file_type();
        let kind = if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Dir
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };

        #[cfg(unix)]
        let (mode, user, group) = (path.mode().ok(), path.user().ok(), path.group().ok());
        #[cfg(not(unix))]
        let (mode, user, group) = (None, None, None);

        Ok(Self {
            path: path.as_str().to_string(),
            kind,
            size: path.size().unwrap_or_else(|_| own.len()),
            mode,
            user,
            group,
            modified: path
                .modified_datetime()
                .ok()
                .map(|time| time.to_rfc3339_opts(SecondsFormat::Secs, false)),
        })
    }
}
