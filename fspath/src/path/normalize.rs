//! Lexical path forms: absolute, relative, base name and directory.
//!
//! Nothing here follows symlinks. `.` and `..` are folded textually, the way
//! the host's `abspath` and `relpath` do it.

use std::env;
use std::path::{is_separator, Component, PathBuf};

use super::Path;
use crate::error::{Error, Result};

/// Fold `.` and `..` components of a path.
///
/// `..` directly under the root stays at the root. Leading `..` components of
/// a relative path are kept.
///
/// # Examples
///
/// ```
/// use fspath::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// # #[cfg(unix)]
/// # {
/// assert_eq!(resolve_components(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(resolve_components(Path::new("/a/../../c")), PathBuf::from("/c"));
/// assert_eq!(resolve_components(Path::new("../x/./y")), PathBuf::from("../x/y"));
/// # }
/// ```
#[must_use]
pub fn resolve_components(path: &std::path::Path) -> PathBuf {
    let mut result = PathBuf::new();
    let mut depth = 0usize;
    let mut rooted = false;

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => result.push(prefix.as_os_str()),
            Component::RootDir => {
                result.push(component);
                rooted = true;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    result.pop();
                    depth -= 1;
                } else if !rooted {
                    result.push("..");
                }
            }
            Component::Normal(name) => {
                result.push(name);
                depth += 1;
            }
        }
    }

    if result.as_os_str().is_empty() {
        result.push(".");
    }
    result
}

/// Absolutize a path against the current directory and fold its components.
///
/// # Errors
///
/// Returns an error if the path is relative and the current directory cannot
/// be determined.
pub fn absolutize(path: &std::path::Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = env::current_dir().map_err(|e| Error::io("getcwd", path, e))?;
        cwd.join(path)
    };
    Ok(resolve_components(&absolute))
}

/// Express `path` relative to `base`.
///
/// Both sides are absolutized first. Identical paths give `.`.
///
/// # Errors
///
/// Returns an error if either side cannot be absolutized, or if the two live
/// under different prefixes (drive letters on Windows).
pub fn relative(path: &std::path::Path, base: &std::path::Path) -> Result<PathBuf> {
    let path_abs = absolutize(path)?;
    let base_abs = absolutize(base)?;

    let path_parts: Vec<Component<'_>> = path_abs.components().collect();
    let base_parts: Vec<Component<'_>> = base_abs.components().collect();

    if path_parts.first() != base_parts.first() {
        return Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("not on the same root as {}", base.display()),
        });
    }

    let common = path_parts
        .iter()
        .zip(base_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut result = PathBuf::new();
    for _ in common..base_parts.len() {
        result.push("..");
    }
    for part in &path_parts[common..] {
        result.push(part.as_os_str());
    }

    if result.as_os_str().is_empty() {
        result.push(".");
    }
    Ok(result)
}

impl Path {
    /// Normalized, absolutized form of the path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is relative and the current directory
    /// cannot be determined.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Path;
    ///
    /// let abs = Path::new("some/../relative/./path").absolute().unwrap();
    /// assert!(abs.is_absolute());
    /// assert!(abs.ends_with("path"));
    /// ```
    pub fn absolute(&self) -> Result<Path> {
        absolutize(self.as_std_path()).map(Path::from)
    }

    /// This path expressed relative to `target`.
    ///
    /// # Errors
    ///
    /// See [`relative`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Path;
    ///
    /// # #[cfg(unix)]
    /// # {
    /// let rel = Path::new("/srv/www/site").relative_to("/srv/cache").unwrap();
    /// assert_eq!(rel, "../www/site");
    /// # }
    /// ```
    pub fn relative_to(&self, target: impl AsRef<str>) -> Result<Path> {
        relative(self.as_std_path(), std::path::Path::new(target.as_ref())).map(Path::from)
    }

    /// Final component: the text after the last separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Path;
    ///
    /// assert_eq!(Path::new("/home/user/Projects/osome").basename(), "osome");
    /// assert_eq!(Path::new("/var/log/").basename(), "");
    /// ```
    #[must_use]
    pub fn basename(&self) -> Path {
        let text = self.as_str();
        let start = last_separator_end(text);
        Path::from(&text[start..])
    }

    /// Everything before the final component.
    ///
    /// Trailing separators are dropped unless the result is made of nothing
    /// but separators.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Path;
    ///
    /// assert_eq!(Path::new("/var/log/syslog").dir(), "/var/log");
    /// assert_eq!(Path::new("/syslog").dir(), "/");
    /// assert_eq!(Path::new("syslog").dir(), "");
    /// ```
    #[must_use]
    pub fn dir(&self) -> Path {
        let text = self.as_str();
        let head = &text[..last_separator_end(text)];
        if head.chars().all(is_separator) {
            return Path::from(head);
        }
        Path::from(head.trim_end_matches(is_separator))
    }
}

/// Byte offset just past the last separator, or 0.
fn last_separator_end(text: &str) -> usize {
    text.char_indices()
        .filter(|(_, c)| is_separator(*c))
        .last()
        .map_or(0, |(index, c)| index + c.len_utf8())
}
