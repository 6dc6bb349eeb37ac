//! Symlink-resolving path canonicalization.
//!
//! [`real_path`] mirrors the host's `realpath`: every symlink in the existing
//! part of the path is resolved, and a missing tail is appended unchanged.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::normalize::absolutize;
use super::Path;
use crate::error::{Error, Result};

/// Canonicalize the existing portion of a path.
///
/// Walks up from `path` until an existing ancestor is found, canonicalizes
/// that ancestor, and returns it along with the missing components.
///
/// # Errors
///
/// Returns an error if the path cannot be absolutized or an existing
/// ancestor cannot be canonicalized.
pub fn canonicalize_existing(path: &std::path::Path) -> Result<(PathBuf, Option<PathBuf>)> {
    match fs::canonicalize(path) {
        Ok(canonical) => return Ok((canonical, None)),
        Err(e) if e.kind() != ErrorKind::NotFound => {
            return Err(Error::io("canonicalize", path, e));
        }
        Err(_) => {}
    }

    let mut current = absolutize(path)?;
    let mut missing = Vec::new();

    loop {
        if fs::symlink_metadata(&current).is_ok() {
            let canonical = match fs::canonicalize(&current) {
                Ok(canonical) => canonical,
                // Dangling symlink: keep it as the last resolvable point.
                Err(e) if e.kind() == ErrorKind::NotFound => current.clone(),
                Err(e) => return Err(Error::io("canonicalize", &current, e)),
            };

            let remainder = if missing.is_empty() {
                None
            } else {
                missing.reverse();
                Some(missing.into_iter().collect())
            };

            return Ok((canonical, remainder));
        }

        match current.file_name() {
            Some(name) => {
                missing.push(name.to_os_string());
                current.pop();
            }
            None => {
                return Err(Error::InvalidPath {
                    path: path.to_path_buf(),
                    reason: "no existing ancestor".to_string(),
                });
            }
        }
    }
}

/// Resolve symlinks like the host `realpath`.
///
/// # Errors
///
/// See [`canonicalize_existing`].
pub fn real_path(path: &std::path::Path) -> Result<PathBuf> {
    let (canonical, remainder) = canonicalize_existing(path)?;
    Ok(match remainder {
        Some(rest) => canonical.join(rest),
        None => canonical,
    })
}

impl Path {
    /// Canonical path with every symlink resolved.
    ///
    /// A missing tail is kept as-is, so this also works for paths that do
    /// not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing ancestor cannot be read.
    pub fn real_path(&self) -> Result<Path> {
        real_path(self.as_std_path()).map(Path::from)
    }
}
