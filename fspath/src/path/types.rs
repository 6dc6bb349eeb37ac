//! The [`Path`] value type.
//!
//! `Path` wraps the text of a filesystem path. It compares, orders and hashes
//! by that text, prints as that text, and composes with other fragments into
//! new `Path` values. Filesystem facts are never stored on the value; the
//! query and mutation methods live in [`crate::metadata`], [`crate::ops`],
//! [`crate::listing`] and [`crate::walk`].

use std::borrow::Borrow;
use std::convert::Infallible;
use std::ffi::OsStr;
use std::fmt;
use std::ops::{Add, Deref, Div};
use std::path::{is_separator, PathBuf, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A string-like filesystem path.
///
/// # Examples
///
/// ```
/// use fspath::Path;
///
/// let log = Path::join_all(["/var", "log", "syslog"]);
/// assert_eq!(log, "/var/log/syslog");
///
/// let same = Path::new("/var") / "log" / "syslog";
/// assert_eq!(log, same);
/// assert_eq!(log.basename(), "syslog");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    text: String,
}

impl Path {
    /// Create a path from a single fragment.
    #[must_use]
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            text: fragment.into(),
        }
    }

    /// Join fragments with the platform separator.
    ///
    /// A fragment that is itself absolute discards everything before it, and
    /// no separator is inserted after text that already ends in one.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Path;
    ///
    /// assert_eq!(Path::join_all(["a", "b", "c"]), Path::new("a") / "b" / "c");
    /// assert_eq!(Path::join_all(["/etc/", "hosts"]), "/etc/hosts");
    /// # #[cfg(unix)]
    /// assert_eq!(Path::join_all(["/etc", "/var", "log"]), "/var/log");
    /// ```
    pub fn join_all<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for (index, fragment) in fragments.into_iter().enumerate() {
            push_fragment(&mut text, fragment.as_ref(), index == 0);
        }
        Self { text }
    }

    /// Join `other` onto this path.
    #[must_use]
    pub fn compose(&self, other: impl AsRef<str>) -> Self {
        let mut text = self.text.clone();
        push_fragment(&mut text, other.as_ref(), false);
        Self { text }
    }

    /// Call the path with further fragments.
    ///
    /// With no fragments this is the identity; otherwise the fragments are
    /// joined and composed onto `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Path;
    ///
    /// let base = Path::new("/var");
    /// assert_eq!(base.call::<_, &str>([]), base);
    /// assert_eq!(base.call(["log", "syslog"]), "/var/log/syslog");
    /// ```
    pub fn call<I, S>(&self, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut fragments = fragments.into_iter().peekable();
        if fragments.peek().is_none() {
            return self.clone();
        }
        self / Self::join_all(fragments)
    }

    /// Split on the platform separator, dropping empty components.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Path;
    ///
    /// # #[cfg(unix)]
    /// # {
    /// let parts = Path::new("/tmp/directory/file").split();
    /// assert_eq!(parts, ["tmp", "directory", "file"]);
    /// # }
    /// ```
    #[must_use]
    pub fn split(&self) -> Vec<Self> {
        self.split_by(MAIN_SEPARATOR_STR)
    }

    /// Split on an arbitrary separator, dropping empty components.
    #[must_use]
    pub fn split_by(&self, separator: &str) -> Vec<Self> {
        self.text
            .split(separator)
            .filter(|part| !part.is_empty())
            .map(Self::from)
            .collect()
    }

    /// The path text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Borrow as a standard library path.
    #[must_use]
    pub fn as_std_path(&self) -> &std::path::Path {
        std::path::Path::new(&self.text)
    }

    /// Convert into the underlying `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    /// Whether the text denotes an absolute path on this platform.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.as_std_path().is_absolute()
    }
}

/// Append one fragment following host `join` rules.
fn push_fragment(text: &mut String, fragment: &str, first: bool) {
    if first || std::path::Path::new(fragment).has_root() {
        text.clear();
        text.push_str(fragment);
        return;
    }
    if !text.is_empty() && !text.chars().next_back().is_some_and(is_separator) {
        text.push(MAIN_SEPARATOR);
    }
    text.push_str(fragment);
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Deref for Path {
    type Target = str;

    fn deref(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl AsRef<std::path::Path> for Path {
    fn as_ref(&self) -> &std::path::Path {
        self.as_std_path()
    }
}

impl AsRef<OsStr> for Path {
    fn as_ref(&self) -> &OsStr {
        OsStr::new(&self.text)
    }
}

impl Borrow<str> for Path {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl FromStr for Path {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<&str> for Path {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Path {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&String> for Path {
    fn from(text: &String) -> Self {
        Self::new(text.as_str())
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}

/// Non-UTF-8 sequences are replaced with `U+FFFD`.
impl From<PathBuf> for Path {
    fn from(path: PathBuf) -> Self {
        match path.into_os_string().into_string() {
            Ok(text) => Self::new(text),
            Err(os) => Self::new(os.to_string_lossy().into_owned()),
        }
    }
}

impl From<&std::path::Path> for Path {
    fn from(path: &std::path::Path) -> Self {
        Self::new(path.to_string_lossy().into_owned())
    }
}

impl From<Path> for String {
    fn from(path: Path) -> Self {
        path.text
    }
}

impl From<Path> for PathBuf {
    fn from(path: Path) -> Self {
        PathBuf::from(path.text)
    }
}

impl<T: AsRef<str>> Div<T> for Path {
    type Output = Path;

    fn div(self, rhs: T) -> Path {
        let mut text = self.text;
        push_fragment(&mut text, rhs.as_ref(), false);
        Path { text }
    }
}

impl<T: AsRef<str>> Div<T> for &Path {
    type Output = Path;

    fn div(self, rhs: T) -> Path {
        self.compose(rhs)
    }
}

/// Plain text concatenation, no separator inserted.
impl<T: AsRef<str>> Add<T> for Path {
    type Output = Path;

    fn add(mut self, rhs: T) -> Path {
        self.text.push_str(rhs.as_ref());
        self
    }
}

impl PartialEq<str> for Path {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Path {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl PartialEq<String> for Path {
    fn eq(&self, other: &String) -> bool {
        &self.text == other
    }
}

impl PartialEq<Path> for str {
    fn eq(&self, other: &Path) -> bool {
        self == other.text
    }
}

impl PartialEq<Path> for &str {
    fn eq(&self, other: &Path) -> bool {
        *self == other.text
    }
}

impl PartialEq<Path> for String {
    fn eq(&self, other: &Path) -> bool {
        *self == other.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_and_display() {
        let path = Path::new("/var/log");
        assert_eq!(path.to_string(), "/var/log");
        assert_eq!(format!("{path}"), "/var/log");
        assert_eq!(path.as_str(), "/var/log");
    }

    #[test]
    fn test_join_all_uses_separator() {
        let joined = Path::join_all(["var", "log", "syslog"]);
        let expected = ["var", "log", "syslog"].join(MAIN_SEPARATOR_STR);
        assert_eq!(joined, expected);
    }

    #[test]
    fn test_join_all_empty() {
        let joined = Path::join_all(Vec::<&str>::new());
        assert_eq!(joined, "");
    }

    #[test]
    #[cfg(unix)]
    fn test_join_absolute_fragment_resets() {
        assert_eq!(Path::join_all(["/etc", "/var", "log"]), "/var/log");
        assert_eq!(Path::new("/etc") / "/tmp", "/tmp");
    }

    #[test]
    #[cfg(unix)]
    fn test_join_trailing_separator_not_doubled() {
        assert_eq!(Path::new("/etc/") / "hosts", "/etc/hosts");
        assert_eq!(Path::new("a") / "", "a/");
    }

    #[test]
    fn test_compose_matches_div() {
        let base = Path::new("root");
        let file = Path::new("file_1");
        assert_eq!(base.compose(&file), &base / &file);
        assert_eq!(base.compose("x"), base.clone() / "x");
        assert_eq!(base.compose(String::from("y")), &base / String::from("y"));
    }

    #[test]
    fn test_compose_chain_is_associative_with_join() {
        let chained = Path::new("a") / "b" / Path::new("c");
        assert_eq!(chained, Path::join_all(["a", "b", "c"]));
    }

    #[test]
    fn test_call_identity() {
        let base = Path::new("/srv");
        assert_eq!(base.call(Vec::<String>::new()), base);
        assert_eq!(base.call(["www"]), Path::new("/srv") / "www");
    }

    #[test]
    #[cfg(unix)]
    fn test_split_drops_empty_components() {
        let parts = Path::new("/tmp//directory/file/").split();
        assert_eq!(parts, vec![Path::new("tmp"), Path::new("directory"), Path::new("file")]);
    }

    #[test]
    fn test_split_by_custom_separator() {
        let parts = Path::new("a.b..c").split_by(".");
        assert_eq!(parts, ["a", "b", "c"]);
    }

    #[test]
    fn test_string_equality_both_ways() {
        let path = Path::new("abc");
        assert_eq!(path, "abc");
        assert_eq!("abc", path);
        assert_eq!(path, String::from("abc"));
        assert_eq!(String::from("abc"), path);
        assert_ne!(path, "abd");
    }

    #[test]
    fn test_ordering_is_textual() {
        let mut paths = vec![Path::new("b"), Path::new("a/z"), Path::new("a")];
        paths.sort();
        assert_eq!(paths, ["a", "a/z", "b"]);
    }

    #[test]
    fn test_hash_lookup_by_str() {
        let set: HashSet<Path> = [Path::new("one"), Path::new("two")].into_iter().collect();
        assert!(set.contains("one"));
        assert!(!set.contains("three"));
    }

    #[test]
    fn test_conversions() {
        let path: Path = "x/y".parse().unwrap();
        let text: String = path.clone().into();
        assert_eq!(text, "x/y");
        let buf: PathBuf = path.clone().into();
        assert_eq!(Path::from(buf), path);
        assert_eq!(Path::from(std::path::Path::new("x/y")), path);
    }

    #[test]
    fn test_deref_exposes_str_api() {
        let path = Path::new("/tmp/file.txt");
        assert!(path.ends_with(".txt"));
        assert_eq!(path.len(), 13);
    }

    #[test]
    fn test_add_concatenates_without_separator() {
        assert_eq!(Path::new("file") + ".bak", "file.bak");
    }

    #[test]
    fn test_serde_transparent() {
        let path = Path::new("/etc/hosts");
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"/etc/hosts\"");
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }
}
