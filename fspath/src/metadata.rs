//! Live filesystem queries on a [`Path`].
//!
//! Every call goes to the filesystem; nothing is cached on the value. The
//! existence and type predicates answer `false` for missing paths, every
//! other query fails with the host error.

use std::fs::{self, File, OpenOptions};
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Local};

use crate::error::{Error, Result};
use crate::path::Path;

/// Seconds since the epoch, negative for times before it.
fn epoch_seconds(time: SystemTime) -> f64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => after.as_secs_f64(),
        Err(before) => -before.duration().as_secs_f64(),
    }
}

impl Path {
    /// Metadata for the path, following symlinks.
    ///
    /// # Errors
    ///
    /// Returns the host `stat` error.
    pub fn metadata(&self) -> Result<fs::Metadata> {
        fs::metadata(self.as_std_path()).map_err(|e| Error::io("stat", self.as_str(), e))
    }

    /// Metadata for the path itself, without following a final symlink.
    ///
    /// # Errors
    ///
    /// Returns the host `lstat` error.
    pub fn symlink_metadata(&self) -> Result<fs::Metadata> {
        fs::symlink_metadata(self.as_std_path()).map_err(|e| Error::io("lstat", self.as_str(), e))
    }

    /// Numeric owner user id.
    ///
    /// # Errors
    ///
    /// Returns the host `stat` error.
    #[cfg(unix)]
    pub fn uid(&self) -> Result<u32> {
        use std::os::unix::fs::MetadataExt;
        Ok(self.metadata()?.uid())
    }

    /// Numeric owner group id.
    ///
    /// # Errors
    ///
    /// Returns the host `stat` error.
    #[cfg(unix)]
    pub fn gid(&self) -> Result<u32> {
        use std::os::unix::fs::MetadataExt;
        Ok(self.metadata()?.gid())
    }

    /// Name of the user owning the path.
    ///
    /// # Errors
    ///
    /// Returns the host `stat` error, or [`Error::UnknownOwner`] if the uid
    /// has no passwd entry.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fspath::Path;
    ///
    /// assert_eq!(Path::new("/etc").user().unwrap(), "root");
    /// ```
    #[cfg(unix)]
    pub fn user(&self) -> Result<String> {
        let uid = self.uid()?;
        crate::owner::user_name(uid)
            .map_err(|e| Error::io("getpwuid", self.as_str(), e))?
            .ok_or_else(|| Error::UnknownOwner {
                kind: "user",
                id: uid,
                path: self.as_std_path().to_path_buf(),
            })
    }

    /// Name of the group owning the path.
    ///
    /// # Errors
    ///
    /// Returns the host `stat` error, or [`Error::UnknownOwner`] if the gid
    /// has no group entry.
    #[cfg(unix)]
    pub fn group(&self) -> Result<String> {
        let gid = self.gid()?;
        crate::owner::group_name(gid)
            .map_err(|e| Error::io("getgrgid", self.as_str(), e))?
            .ok_or_else(|| Error::UnknownOwner {
                kind: "group",
                id: gid,
                path: self.as_std_path().to_path_buf(),
            })
    }

    /// Permission bits (including setuid, setgid and sticky).
    ///
    /// # Errors
    ///
    /// Returns the host `stat` error.
    #[cfg(unix)]
    pub fn mode_bits(&self) -> Result<u32> {
        use std::os::unix::fs::PermissionsExt;
        Ok(self.metadata()?.permissions().mode() & 0o7777)
    }

    /// Permission bits as an octal string with a leading zero.
    ///
    /// # Errors
    ///
    /// Returns the host `stat` error.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fspath::Path;
    ///
    /// assert_eq!(Path::new(".").mode().unwrap(), "0775");
    /// ```
    #[cfg(unix)]
    pub fn mode(&self) -> Result<String> {
        Ok(crate::mode::format_octal(self.mode_bits()?))
    }

    /// Last access time in seconds since the epoch.
    ///
    /// # Errors
    ///
    /// Returns the host error, or an unsupported error on platforms without
    /// access times.
    pub fn accessed(&self) -> Result<f64> {
        self.accessed_time().map(epoch_seconds)
    }

    /// Last access time as a local date-time.
    ///
    /// # Errors
    ///
    /// Same as [`Path::accessed`].
    pub fn accessed_datetime(&self) -> Result<DateTime<Local>> {
        self.accessed_time().map(DateTime::<Local>::from)
    }

    /// Last modification time in seconds since the epoch.
    ///
    /// # Errors
    ///
    /// Returns the host error, or an unsupported error on platforms without
    /// modification times.
    pub fn modified(&self) -> Result<f64> {
        self.modified_time().map(epoch_seconds)
    }

    /// Last modification time as a local date-time.
    ///
    /// # Errors
    ///
    /// Same as [`Path::modified`].
    pub fn modified_datetime(&self) -> Result<DateTime<Local>> {
        self.modified_time().map(DateTime::<Local>::from)
    }

    fn accessed_time(&self) -> Result<SystemTime> {
        self.metadata()?
            .accessed()
            .map_err(|e| Error::io("atime", self.as_str(), e))
    }

    fn modified_time(&self) -> Result<SystemTime> {
        self.metadata()?
            .modified()
            .map_err(|e| Error::io("mtime", self.as_str(), e))
    }

    /// Size in bytes, following symlinks.
    ///
    /// # Errors
    ///
    /// Returns the host `stat` error.
    pub fn size(&self) -> Result<u64> {
        Ok(self.metadata()?.len())
    }

    /// Whether the path refers to something that exists.
    ///
    /// Follows symlinks, so a broken link reports `false`.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.as_std_path().exists()
    }

    /// Whether the path is an existing directory, following symlinks.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.as_std_path().is_dir()
    }

    /// Whether the path is an existing regular file, following symlinks.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.as_std_path().is_file()
    }

    /// Whether the path itself is a symlink.
    #[must_use]
    pub fn is_symlink(&self) -> bool {
        self.as_std_path().is_symlink()
    }

    /// Full file contents decoded as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns the host `open`/`read` error, including `InvalidData` for
    /// content that is not valid UTF-8.
    pub fn content(&self) -> Result<String> {
        fs::read_to_string(self.as_std_path()).map_err(|e| Error::io("read", self.as_str(), e))
    }

    /// Open the path with caller-chosen options.
    ///
    /// # Errors
    ///
    /// Returns the host `open` error.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fspath::Path;
    /// use std::fs::OpenOptions;
    ///
    /// let log = Path::join_all(["/var/log", "syslog"]);
    /// let file = log.open(OpenOptions::new().read(true)).unwrap();
    /// ```
    pub fn open(&self, options: &OpenOptions) -> Result<File> {
        options
            .open(self.as_std_path())
            .map_err(|e| Error::io("open", self.as_str(), e))
    }
}
