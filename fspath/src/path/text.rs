//! Text operations that stay path-typed.
//!
//! Each method here mirrors the `str` method of the same name but wraps the
//! result back into a [`Path`]. Anything not listed is reachable through
//! `Deref<Target = str>` or [`Path::as_str`], with the result re-wrapped by
//! the caller through `Path::from`.

use std::slice::SliceIndex;

use super::Path;

impl Path {
    /// Uppercase copy of the path.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Path;
    ///
    /// let upper: Path = Path::new("smallfile").to_uppercase();
    /// assert_eq!(upper, "SMALLFILE");
    /// ```
    #[must_use]
    pub fn to_uppercase(&self) -> Path {
        Path::from(self.as_str().to_uppercase())
    }

    /// Lowercase copy of the path.
    #[must_use]
    pub fn to_lowercase(&self) -> Path {
        Path::from(self.as_str().to_lowercase())
    }

    /// Replace every occurrence of `from` with `to`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Path;
    ///
    /// let dashed = Path::new("/tmp/file with spaces").replace(" ", "-");
    /// assert_eq!(dashed, "/tmp/file-with-spaces");
    /// ```
    #[must_use]
    pub fn replace(&self, from: &str, to: &str) -> Path {
        Path::from(self.as_str().replace(from, to))
    }

    /// Replace the first `count` occurrences of `from` with `to`.
    #[must_use]
    pub fn replacen(&self, from: &str, to: &str, count: usize) -> Path {
        Path::from(self.as_str().replacen(from, to, count))
    }

    /// Strip leading and trailing whitespace.
    #[must_use]
    pub fn trim(&self) -> Path {
        Path::from(self.as_str().trim())
    }

    /// Strip leading whitespace.
    #[must_use]
    pub fn trim_start(&self) -> Path {
        Path::from(self.as_str().trim_start())
    }

    /// Strip trailing whitespace.
    #[must_use]
    pub fn trim_end(&self) -> Path {
        Path::from(self.as_str().trim_end())
    }

    /// Strip every leading and trailing `ch`.
    #[must_use]
    pub fn trim_matches(&self, ch: char) -> Path {
        Path::from(self.as_str().trim_matches(ch))
    }

    /// Remove `prefix` once, if present.
    #[must_use]
    pub fn strip_prefix(&self, prefix: &str) -> Option<Path> {
        self.as_str().strip_prefix(prefix).map(Path::from)
    }

    /// Remove `suffix` once, if present.
    #[must_use]
    pub fn strip_suffix(&self, suffix: &str) -> Option<Path> {
        self.as_str().strip_suffix(suffix).map(Path::from)
    }

    /// Byte-range slice of the text.
    ///
    /// Returns `None` when the range is out of bounds or does not fall on
    /// character boundaries.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Path;
    ///
    /// assert_eq!(Path::new("/tmp/file.txt").slice(..5).unwrap(), "/tmp/");
    /// assert!(Path::new("/tmp").slice(..10).is_none());
    /// ```
    #[must_use]
    pub fn slice<R>(&self, range: R) -> Option<Path>
    where
        R: SliceIndex<str, Output = str>,
    {
        self.as_str().get(range).map(Path::from)
    }

    /// The text repeated `n` times.
    #[must_use]
    pub fn repeat(&self, n: usize) -> Path {
        Path::from(self.as_str().repeat(n))
    }

    /// Plain concatenation, same as the `+` operator.
    #[must_use]
    pub fn concat(&self, tail: impl AsRef<str>) -> Path {
        self.clone() + tail
    }
}
