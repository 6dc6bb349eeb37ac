//! Lazy directory traversal.
//!
//! [`Walk`] yields the children of a directory in listing order and, when
//! recursive, descends into each directory right after yielding it. The glob
//! only filters the first level; nested levels yield every entry. Each
//! directory is read when the walk reaches it, and a new walk reads the disk
//! again from the start.
//!
//! Symlinked directories are only entered with [`WalkOptions::follow_links`],
//! and never when the link points back at a directory the walk is inside.

use std::fs;
use std::path::PathBuf;

use crate::error::Result;
use crate::listing::{ListOptions, SortOrder, MATCH_ALL};
use crate::path::Path;

/// Options for [`Path::walk_with`].
///
/// # Examples
///
/// ```
/// use fspath::WalkOptions;
///
/// let options = WalkOptions::new().with_pattern("*.rs").recursive(true);
/// assert!(options.is_recursive());
/// ```
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    list: ListOptions,
    recursive: bool,
    follow_links: bool,
}

impl WalkOptions {
    /// Match everything at the top level, directories first, no recursion.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the glob applied to top-level base names.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.list = self.list.with_pattern(pattern);
        self
    }

    /// Set the ordering used at every level.
    #[must_use]
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.list = self.list.with_sort(sort);
        self
    }

    /// Descend into subdirectories.
    #[must_use]
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Also descend into symlinked directories.
    #[must_use]
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Whether symlinked directories are entered.
    #[must_use]
    pub fn is_following_links(&self) -> bool {
        self.follow_links
    }

    /// Whether subdirectories are visited.
    #[must_use]
    pub fn is_recursive(&self) -> bool {
        self.recursive
    }

    /// The glob applied to top-level base names.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.list.pattern()
    }
}

/// Iterator returned by [`Path::walk`] and [`Path::walk_with`].
///
/// Directory read failures are yielded as `Err` items; the walk then
/// carries on with the remaining siblings.
#[derive(Debug)]
pub struct Walk {
    top: ListOptions,
    nested: ListOptions,
    recursive: bool,
    follow_links: bool,
    pending: Option<(Path, bool)>,
    stack: Vec<Level>,
}

#[derive(Debug)]
struct Level {
    /// Resolved directory, tracked only when following links.
    real: Option<PathBuf>,
    entries: std::vec::IntoIter<Path>,
}

impl Walk {
    fn new(root: Path, options: WalkOptions) -> Self {
        let nested = options.list.clone().with_pattern(MATCH_ALL);
        Self {
            top: options.list,
            nested,
            recursive: options.recursive,
            follow_links: options.follow_links,
            pending: Some((root, true)),
            stack: Vec::new(),
        }
    }

    fn should_enter(&self, child: &Path) -> bool {
        if !self.recursive || !child.is_dir() {
            return false;
        }
        if !child.is_symlink() {
            return true;
        }
        if !self.follow_links {
            return false;
        }
        match fs::canonicalize(child.as_std_path()) {
            Ok(real) => !self
                .stack
                .iter()
                .any(|level| level.real.as_ref() == Some(&real)),
            Err(_) => false,
        }
    }
}

impl Iterator for Walk {
    type Item = Result<Path>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((dir, top_level)) = self.pending.take() {
                let options = if top_level { &self.top } else { &self.nested };
                match dir.ls_with(options) {
                    Ok(children) => {
                        let real = if self.follow_links {
                            fs::canonicalize(dir.as_std_path()).ok()
                        } else {
                            None
                        };
                        self.stack.push(Level {
                            real,
                            entries: children.into_iter(),
                        });
                    }
                    Err(e) => return Some(Err(e)),
                }
            }

            let level = self.stack.last_mut()?;
            let Some(child) = level.entries.next() else {
                self.stack.pop();
                continue;
            };

            if self.should_enter(&child) {
                self.pending = Some((child.clone(), false));
            }
            return Some(Ok(child));
        }
    }
}

impl Path {
    /// Walk the immediate children with default options.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Path;
    ///
    /// let scratch = tempfile::tempdir().unwrap();
    /// let root = Path::from(scratch.path());
    /// (&root / "dir").mkdir().unwrap();
    /// (&root / "file").touch().unwrap();
    ///
    /// let names: Vec<Path> = root.walk().map(|p| p.unwrap().basename()).collect();
    /// assert_eq!(names, ["dir", "file"]);
    /// ```
    #[must_use]
    pub fn walk(&self) -> Walk {
        self.walk_with(WalkOptions::default())
    }

    /// Walk with explicit options.
    ///
    /// A malformed pattern or unreadable root surfaces as the first item.
    #[must_use]
    pub fn walk_with(&self, options: WalkOptions) -> Walk {
        Walk::new(self.clone(), options)
    }
}

impl IntoIterator for &Path {
    type Item = Result<Path>;
    type IntoIter = Walk;

    fn into_iter(self) -> Walk {
        self.walk()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    /// root/
    ///   dir_1/ file_3, nested/ deep
    ///   dir_2/ file_4
    ///   file_1
    ///   file_2
    fn tree() -> (tempfile::TempDir, Path) {
        let dir = tempdir().unwrap();
        let root = Path::from(dir.path());
        (&root / "dir_1" / "nested").mkdir_all().unwrap();
        (&root / "dir_2").mkdir().unwrap();
        for file in ["file_1", "file_2", "dir_1/file_3", "dir_2/file_4", "dir_1/nested/deep"] {
            fs::write(dir.path().join(file), "").unwrap();
        }
        (dir, root)
    }

    fn relative(root: &Path, walked: Walk) -> Vec<String> {
        walked
            .map(|p| {
                let p = p.unwrap();
                p.relative_to(root)
                    .unwrap()
                    .replace(std::path::MAIN_SEPARATOR_STR, "/")
                    .into_string()
            })
            .collect()
    }

    #[test]
    fn test_walk_top_level_only() {
        let (_dir, root) = tree();
        assert_eq!(
            relative(&root, root.walk()),
            ["dir_1", "dir_2", "file_1", "file_2"]
        );
    }

    #[test]
    fn test_walk_recursive_is_preorder() {
        let (_dir, root) = tree();
        let walked = root.walk_with(WalkOptions::new().recursive(true));
        assert_eq!(
            relative(&root, walked),
            [
                "dir_1",
                "dir_1/nested",
                "dir_1/nested/deep",
                "dir_1/file_3",
                "dir_2",
                "dir_2/file_4",
                "file_1",
                "file_2",
            ]
        );
    }

    #[test]
    fn test_walk_pattern_applies_to_first_level_only() {
        let (_dir, root) = tree();
        let walked = root.walk_with(WalkOptions::new().with_pattern("dir_2").recursive(true));
        assert_eq!(relative(&root, walked), ["dir_2", "dir_2/file_4"]);
    }

    #[test]
    fn test_walk_is_restartable() {
        let (_dir, root) = tree();
        let first: Vec<_> = root.walk().map(|p| p.unwrap()).collect();
        (&root / "file_0").touch().unwrap();
        let second: Vec<_> = root.walk().map(|p| p.unwrap()).collect();
        assert_eq!(second.len(), first.len() + 1);
    }

    #[test]
    fn test_walk_is_lazy() {
        let (_dir, root) = tree();
        let mut walk = root.walk_with(WalkOptions::new().recursive(true));
        assert_eq!(walk.next().unwrap().unwrap().basename(), "dir_1");
        // dir_1 has not been read yet, so changes to it are still observed.
        (&root / "dir_1" / "added").touch().unwrap();
        let rest: Vec<Path> = walk.map(|p| p.unwrap().basename()).collect();
        assert!(rest.contains(&Path::new("added")));
    }

    #[test]
    fn test_for_loop_iterates_walk() {
        let (_dir, root) = tree();
        let mut count = 0;
        for entry in &root {
            entry.unwrap();
            count += 1;
        }
        assert_eq!(count, 4);
    }

    #[test]
    fn test_walk_missing_root_yields_error_then_ends() {
        let (_dir, root) = tree();
        let mut walk = (&root / "missing").walk();
        assert!(walk.next().unwrap().unwrap_err().is_not_found());
        assert!(walk.next().is_none());
    }

    #[test]
    fn test_walk_open_bracket_is_literal() {
        let (_dir, root) = tree();
        (&root / "[x").mkdir().unwrap();
        (&root / "[x" / "inside").touch().unwrap();
        let walked = root.walk_with(WalkOptions::new().with_pattern("[x").recursive(true));
        assert_eq!(relative(&root, walked), ["[x", "[x/inside"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_does_not_follow_symlink_cycles() {
        let (dir, root) = tree();
        std::os::unix::fs::symlink(dir.path(), dir.path().join("dir_1").join("loop")).unwrap();
        let walked: Vec<_> = root
            .walk_with(WalkOptions::new().recursive(true))
            .collect::<Result<_>>()
            .unwrap();
        assert!(walked.iter().any(|p| p.basename() == "loop"));
        assert_eq!(walked.len(), 9);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_follows_symlinked_dirs_when_asked() {
        let (dir, root) = tree();
        std::os::unix::fs::symlink(dir.path().join("dir_2"), dir.path().join("link")).unwrap();

        let plain = root.walk_with(WalkOptions::new().with_pattern("link").recursive(true));
        assert_eq!(relative(&root, plain), ["link"]);

        let followed = root.walk_with(
            WalkOptions::new()
                .with_pattern("link")
                .recursive(true)
                .follow_links(true),
        );
        assert_eq!(relative(&root, followed), ["link", "link/file_4"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_following_links_still_stops_at_cycles() {
        let (dir, root) = tree();
        std::os::unix::fs::symlink(dir.path(), dir.path().join("dir_1").join("loop")).unwrap();
        let walked: Vec<_> = root
            .walk_with(WalkOptions::new().recursive(true).follow_links(true))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(walked.len(), 9);
    }
}
