//! Filesystem mutations on a [`Path`].
//!
//! Each method maps onto one host primitive and returns a `Path` (itself or
//! the target) so calls can be chained. Host failures are passed through in
//! [`Error::Io`] without translation.

use std::fs::{self, OpenOptions};

use log::debug;

use crate::error::{Error, Result};
use crate::mode::Mode;
use crate::path::Path;

impl Path {
    /// Create this directory. The parent must already exist.
    ///
    /// # Errors
    ///
    /// Fails if the parent is missing or the path already exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Path;
    ///
    /// let scratch = tempfile::tempdir().unwrap();
    /// let dir = Path::from(scratch.path()) / "dir";
    /// assert!(dir.mkdir().unwrap().exists());
    /// ```
    pub fn mkdir(&self) -> Result<Path> {
        debug!("mkdir {self}");
        fs::create_dir(self.as_std_path()).map_err(|e| Error::io("mkdir", self.as_str(), e))?;
        Ok(self.clone())
    }

    /// Create this directory and every missing parent.
    ///
    /// # Errors
    ///
    /// Fails with "already exists" if the final directory is already present,
    /// or with the host error if any component cannot be created.
    pub fn mkdir_all(&self) -> Result<Path> {
        debug!("mkdir -p {self}");
        let target = self.as_std_path();
        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::io("mkdir", parent, e))?;
        }
        fs::create_dir(target).map_err(|e| Error::io("mkdir", self.as_str(), e))?;
        Ok(self.clone())
    }

    /// Remove a file, symlink, or empty directory.
    ///
    /// # Errors
    ///
    /// Fails with "directory not empty" for a directory with contents, and
    /// with "not found" for a missing path.
    pub fn rm(&self) -> Result<Path> {
        self.remove(false)
    }

    /// Remove a file or symlink, or a directory along with its contents.
    ///
    /// # Errors
    ///
    /// Returns the first host error hit while deleting.
    pub fn rm_recursive(&self) -> Result<Path> {
        self.remove(true)
    }

    fn remove(&self, recursive: bool) -> Result<Path> {
        let target = self.as_std_path();
        if self.is_file() || self.is_symlink() {
            debug!("rm {self}");
            fs::remove_file(target).map_err(|e| Error::io("remove", self.as_str(), e))?;
        } else if recursive {
            debug!("rm -r {self}");
            fs::remove_dir_all(target).map_err(|e| Error::io("rmtree", self.as_str(), e))?;
        } else {
            debug!("rmdir {self}");
            fs::remove_dir(target).map_err(|e| Error::io("rmdir", self.as_str(), e))?;
        }
        Ok(self.clone())
    }

    /// Copy a file or a whole directory tree to `target`.
    ///
    /// A directory is copied recursively and `target` must not exist yet.
    /// A file is copied with its permission bits, replacing an existing
    /// target file, or into `target` when that is an existing directory.
    ///
    /// # Errors
    ///
    /// Returns the first host error hit while copying.
    pub fn cp(&self, target: impl Into<Path>) -> Result<Path> {
        let target = target.into();
        if self.is_dir() {
            debug!("cp -r {self} {target}");
            copy_tree(self, &target)?;
        } else {
            let destination = if target.is_dir() {
                &target / self.basename()
            } else {
                target.clone()
            };
            debug!("cp {self} {destination}");
            fs::copy(self.as_std_path(), destination.as_std_path())
                .map_err(|e| Error::io("copy", self.as_str(), e))?;
        }
        Ok(target)
    }

    /// Create a symlink at `target` pointing to the real path of `self`.
    ///
    /// # Errors
    ///
    /// Fails if `target` exists or the real path cannot be resolved.
    pub fn ln(&self, target: impl Into<Path>) -> Result<Path> {
        let target = target.into();
        let source = self.real_path()?;
        debug!("ln -s {source} {target}");
        symlink(&source, &target).map_err(|e| Error::io("symlink", target.as_str(), e))?;
        Ok(target)
    }

    /// Create a hard link at `target` to the real path of `self`.
    ///
    /// # Errors
    ///
    /// Fails if `target` exists, `self` is a directory, or the two are on
    /// different filesystems.
    pub fn ln_hard(&self, target: impl Into<Path>) -> Result<Path> {
        let target = target.into();
        let source = self.real_path()?;
        debug!("ln {source} {target}");
        fs::hard_link(source.as_std_path(), target.as_std_path())
            .map_err(|e| Error::io("link", target.as_str(), e))?;
        Ok(target)
    }

    /// Remove the directory entry at `self`, typically a symlink.
    ///
    /// # Errors
    ///
    /// Returns the host `unlink` error.
    pub fn unlink(&self) -> Result<Path> {
        debug!("unlink {self}");
        fs::remove_file(self.as_std_path()).map_err(|e| Error::io("unlink", self.as_str(), e))?;
        Ok(self.clone())
    }

    /// Create the file if missing; existing content is left alone.
    ///
    /// # Errors
    ///
    /// Returns the host `open` error.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Path;
    ///
    /// let scratch = tempfile::tempdir().unwrap();
    /// let file = (Path::from(scratch.path()) / "file").touch().unwrap();
    /// assert_eq!(file.size().unwrap(), 0);
    /// ```
    pub fn touch(&self) -> Result<Path> {
        debug!("touch {self}");
        OpenOptions::new()
            .append(true)
            .create(true)
            .open(self.as_std_path())
            .map_err(|e| Error::io("open", self.as_str(), e))?;
        Ok(self.clone())
    }

    /// Change permission bits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMode`] for unparseable octal text, otherwise
    /// the host `chmod` error.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Path;
    ///
    /// let scratch = tempfile::tempdir().unwrap();
    /// let file = (Path::from(scratch.path()) / "test").touch().unwrap();
    /// file.chmod("0775").unwrap();
    /// # #[cfg(unix)]
    /// assert_eq!(file.mode().unwrap(), "0775");
    /// ```
    pub fn chmod(&self, mode: impl Into<Mode>) -> Result<Path> {
        let bits = mode.into().bits()?;
        debug!("chmod {bits:o} {self}");
        fs::set_permissions(self.as_std_path(), permissions_from_bits(self, bits)?)
            .map_err(|e| Error::io("chmod", self.as_str(), e))?;
        Ok(self.clone())
    }

    /// Move `self` to `target`.
    ///
    /// # Errors
    ///
    /// Returns the host `rename` error.
    pub fn rename(&self, target: impl Into<Path>) -> Result<Path> {
        let target = target.into();
        debug!("mv {self} {target}");
        fs::rename(self.as_std_path(), target.as_std_path())
            .map_err(|e| Error::io("rename", self.as_str(), e))?;
        Ok(target)
    }
}

/// Recursively copy `source` into a new directory at `target`.
///
/// Symlinks inside the tree are followed and their targets copied.
fn copy_tree(source: &Path, target: &Path) -> Result<()> {
    let target_std = target.as_std_path();
    if let Some(parent) = target_std.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io("mkdir", parent, e))?;
    }
    fs::create_dir(target_std).map_err(|e| Error::io("mkdir", target.as_str(), e))?;

    let entries =
        fs::read_dir(source.as_std_path()).map_err(|e| Error::io("listdir", source.as_str(), e))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::io("listdir", source.as_str(), e))?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        let from = source / &*name;
        let to = target / &*name;

        if from.is_dir() {
            copy_tree(&from, &to)?;
        } else {
            fs::copy(from.as_std_path(), to.as_std_path())
                .map_err(|e| Error::io("copy", from.as_str(), e))?;
        }
    }

    let permissions = source.metadata()?.permissions();
    fs::set_permissions(target_std, permissions)
        .map_err(|e| Error::io("chmod", target.as_str(), e))?;
    Ok(())
}

#[cfg(unix)]
fn symlink(source: &Path, target: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(source.as_std_path(), target.as_std_path())
}

#[cfg(windows)]
fn symlink(source: &Path, target: &Path) -> std::io::Result<()> {
    if source.is_dir() {
        std::os::windows::fs::symlink_dir(source.as_std_path(), target.as_std_path())
    } else {
        std::os::windows::fs::symlink_file(source.as_std_path(), target.as_std_path())
    }
}

#[cfg(unix)]
#[allow(clippy::unnecessary_wraps)]
fn permissions_from_bits(_path: &Path, bits: u32) -> Result<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Ok(fs::Permissions::from_mode(bits))
}

/// Only the write bits mean anything here: no write bit means read-only.
#[cfg(not(unix))]
fn permissions_from_bits(path: &Path, bits: u32) -> Result<fs::Permissions> {
    let mut permissions = path.metadata()?.permissions();
    permissions.set_readonly(bits & 0o222 == 0);
    Ok(permissions)
}
