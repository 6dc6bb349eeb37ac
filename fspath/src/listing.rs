//! Directory listing with glob filtering and ordering.
//!
//! A listing reads the immediate children of a directory, keeps those whose
//! base name matches a shell-style glob, and orders them. The default order
//! puts directories before files and sorts each group by path text.
//!
//! Globs follow `fnmatch`: `*` and `?` are wildcards and `[...]` is a class,
//! negated by a leading `!`. Everything else is literal, including braces,
//! backslashes and a `[` with no closing `]`.

use std::cmp::Ordering;
use std::fmt;
use std::fs;
use std::sync::Arc;

use globset::{GlobBuilder, GlobMatcher};

use crate::error::{Error, Result};
use crate::path::Path;

/// Pattern that matches every entry.
pub const MATCH_ALL: &str = "*";

/// Comparator used by [`SortOrder::Custom`].
pub type Comparator = Arc<dyn Fn(&Path, &Path) -> Ordering + Send + Sync>;

/// How listed entries are ordered.
#[derive(Clone, Default)]
pub enum SortOrder {
    /// Directories first, then by path text.
    #[default]
    DirsFirst,
    /// By path text only.
    Lexical,
    /// Caller-supplied comparator.
    Custom(Comparator),
}

impl SortOrder {
    /// Wrap a comparator closure.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::SortOrder;
    ///
    /// // Reverse lexical order
    /// let order = SortOrder::custom(|a, b| b.cmp(a));
    /// ```
    pub fn custom<F>(compare: F) -> Self
    where
        F: Fn(&Path, &Path) -> Ordering + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(compare))
    }

    /// Parse a named order: `dirs-first` or `lexical`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for any other name.
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "dirs-first" | "dirsfirst" | "default" => Ok(Self::DirsFirst),
            "lexical" | "name" => Ok(Self::Lexical),
            _ => Err(Error::Validation {
                field: "sort".to_string(),
                message: format!("unknown sort order '{name}' (expected dirs-first or lexical)"),
            }),
        }
    }

    pub(crate) fn sort(&self, entries: &mut Vec<Path>) {
        match self {
            Self::DirsFirst => {
                let mut keyed: Vec<(bool, Path)> =
                    entries.drain(..).map(|p| (!p.is_dir(), p)).collect();
                keyed.sort();
                entries.extend(keyed.into_iter().map(|(_, p)| p));
            }
            Self::Lexical => entries.sort(),
            Self::Custom(compare) => entries.sort_by(|a, b| compare(a, b)),
        }
    }
}

impl fmt::Debug for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirsFirst => write!(f, "DirsFirst"),
            Self::Lexical => write!(f, "Lexical"),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Options for [`Path::ls_with`] and friends.
///
/// # Examples
///
/// ```
/// use fspath::{ListOptions, SortOrder};
///
/// let options = ListOptions::new()
///     .with_pattern("*.log")
///     .with_sort(SortOrder::Lexical);
/// assert_eq!(options.pattern(), "*.log");
/// ```
#[derive(Debug, Clone)]
pub struct ListOptions {
    pattern: String,
    sort: SortOrder,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            pattern: MATCH_ALL.to_string(),
            sort: SortOrder::default(),
        }
    }
}

impl ListOptions {
    /// Match everything, directories first.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the glob applied to base names.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Set the ordering.
    #[must_use]
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// The glob applied to base names.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The ordering.
    #[must_use]
    pub fn sort(&self) -> &SortOrder {
        &self.sort
    }
}

/// Compile a shell-style glob for matching base names.
///
/// # Errors
///
/// Returns [`Error::InvalidPattern`] if globset rejects the rewritten glob.
///
/// # Examples
///
/// ```
/// use fspath::listing::compile_pattern;
///
/// let matcher = compile_pattern("*.{log,txt}").unwrap();
/// assert!(matcher.is_match("a.{log,txt}"));
/// assert!(!matcher.is_match("a.log"));
/// ```
pub fn compile_pattern(pattern: &str) -> Result<GlobMatcher> {
    GlobBuilder::new(&to_globset(pattern))
        .backslash_escape(false)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Rewrite an `fnmatch` glob into globset syntax with the same meaning.
fn to_globset(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            '*' => {
                // A run of stars means the same as one; globset gives `**`
                // a meaning of its own.
                while chars.get(i) == Some(&'*') {
                    i += 1;
                }
                out.push('*');
            }
            '?' => out.push('?'),
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    push_class(&mut out, &chars[i..end]);
                    i = end + 1;
                }
                None => push_literal(&mut out, '['),
            },
            c => push_literal(&mut out, c),
        }
    }
    out
}

/// Index of the `]` closing a class whose body starts at `start`.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    while j < chars.len() && chars[j] != ']' {
        j += 1;
    }
    (j < chars.len()).then_some(j)
}

fn push_literal(out: &mut String, c: char) {
    if matches!(c, '*' | '?' | '[' | ']' | '{' | '}') {
        out.push('[');
        out.push(c);
        out.push(']');
    } else {
        out.push(c);
    }
}

/// Parse a class body (without the brackets) into inclusive ranges.
///
/// Reversed ranges such as `z-a` match nothing and are dropped.
fn class_ranges(body: &[char]) -> Vec<(char, char)> {
    let mut ranges = Vec::new();
    let mut k = 0;
    while k < body.len() {
        let lo = body[k];
        if k + 2 < body.len() && body[k + 1] == '-' {
            let hi = body[k + 2];
            if lo <= hi {
                ranges.push((lo, hi));
            }
            k += 3;
        } else {
            ranges.push((lo, lo));
            k += 1;
        }
    }
    ranges
}

fn push_class(out: &mut String, body: &[char]) {
    let (negated, body) = match body.split_first() {
        Some(('!', rest)) => (true, rest),
        _ => (false, body),
    };

    // `]` and `-` are only literal at fixed positions in a globset class, so
    // they are pulled out of the ranges and placed first and last.
    let mut close = false;
    let mut dash = false;
    let mut plain = Vec::new();
    for (lo, hi) in class_ranges(body) {
        let mut from = lo;
        for (special, before, after) in [('-', ',', '.'), (']', '\\', '^')] {
            if from <= special && special <= hi {
                if from < special {
                    plain.push((from, before));
                }
                if special == '-' {
                    dash = true;
                } else {
                    close = true;
                }
                from = after;
            }
        }
        if from <= hi {
            plain.push((from, hi));
        }
    }

    if !negated && !close && !dash {
        if plain.is_empty() {
            // Names never contain a separator, so this never matches.
            out.push('/');
            return;
        }
        // A leading `!` or `^` would read as negation.
        let starts_plainly = |&(lo, _): &(char, char)| lo != '!' && lo != '^';
        if let Some(pos) = plain.iter().position(starts_plainly) {
            plain.swap(0, pos);
        } else if let Some(pos) = plain.iter().position(|&(lo, hi)| lo < hi) {
            let (lo, hi) = plain[pos];
            let next = if lo == '!' { '"' } else { '_' };
            plain[pos] = (next, hi);
            plain.push((lo, lo));
            plain.swap(0, pos);
        } else {
            // Only `!` and `^` remain, each a single character.
            let alternatives: Vec<String> = plain.iter().map(|&(c, _)| c.to_string()).collect();
            if let [single] = alternatives.as_slice() {
                out.push_str(single);
            } else {
                out.push('{');
                out.push_str(&alternatives.join(","));
                out.push('}');
            }
            return;
        }
    }

    if negated && !close && !dash && plain.is_empty() {
        out.push('?');
        return;
    }

    out.push('[');
    if negated {
        out.push('!');
    }
    if close {
        out.push(']');
    } else if dash && !negated {
        out.push('-');
        dash = false;
    }
    for (lo, hi) in plain {
        out.push(lo);
        if hi != lo {
            out.push('-');
            out.push(hi);
        }
    }
    if dash {
        out.push('-');
    }
    out.push(']');
}

impl Path {
    /// Children of this directory, directories first.
    ///
    /// # Errors
    ///
    /// Returns the host `listdir` error.
    pub fn ls(&self) -> Result<Vec<Path>> {
        self.ls_with(&ListOptions::default())
    }

    /// Children whose base name matches `options.pattern()`, in
    /// `options.sort()` order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] for a malformed glob, otherwise the
    /// host `listdir` error.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fspath::{ListOptions, Path};
    ///
    /// let logs = Path::new("/var/log").ls_with(&ListOptions::new().with_pattern("*log")).unwrap();
    /// ```
    pub fn ls_with(&self, options: &ListOptions) -> Result<Vec<Path>> {
        let matcher = compile_pattern(&options.pattern)?;
        let entries =
            fs::read_dir(self.as_std_path()).map_err(|e| Error::io("listdir", self.as_str(), e))?;

        let mut children = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io("listdir", self.as_str(), e))?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if matcher.is_match(&*name) {
                children.push(self / &*name);
            }
        }

        options.sort.sort(&mut children);
        Ok(children)
    }

    /// Regular files among the children, directories-first order.
    ///
    /// # Errors
    ///
    /// Same as [`Path::ls`].
    pub fn ls_files(&self) -> Result<Vec<Path>> {
        self.ls_files_with(&ListOptions::default())
    }

    /// Regular files among the matching children.
    ///
    /// # Errors
    ///
    /// Same as [`Path::ls_with`].
    pub fn ls_files_with(&self, options: &ListOptions) -> Result<Vec<Path>> {
        let mut children = self.ls_with(options)?;
        children.retain(Path::is_file);
        Ok(children)
    }

    /// Directories among the children.
    ///
    /// # Errors
    ///
    /// Same as [`Path::ls`].
    pub fn ls_dirs(&self) -> Result<Vec<Path>> {
        self.ls_dirs_with(&ListOptions::default())
    }

    /// Directories among the matching children.
    ///
    /// # Errors
    ///
    /// Same as [`Path::ls_with`].
    pub fn ls_dirs_with(&self, options: &ListOptions) -> Result<Vec<Path>> {
        let mut children = self.ls_with(options)?;
        children.retain(Path::is_dir);
        Ok(children)
    }
}
