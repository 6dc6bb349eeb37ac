//! Common fixtures for integration tests.

use fspath::Path;
use tempfile::TempDir;

/// A scratch directory laid out as
///
/// ```text
/// root/
///   dir_1/
///   dir_2/
///     inner
///   file_1   ("first")
///   file_2   ("second")
/// ```
///
/// The directory is removed when the fixture is dropped.
pub struct Tree {
    _scratch: TempDir,
    /// The `root` directory.
    pub root: Path,
}

impl Tree {
    pub fn new() -> Self {
        let scratch = tempfile::tempdir().unwrap();
        let root = (Path::from(scratch.path()) / "root").mkdir().unwrap();
        (&root / "dir_1").mkdir().unwrap();
        (&root / "dir_2").mkdir().unwrap();
        (&root / "dir_2" / "inner").touch().unwrap();
        std::fs::write((&root / "file_1").as_std_path(), "first").unwrap();
        std::fs::write((&root / "file_2").as_std_path(), "second").unwrap();
        Self {
            _scratch: scratch,
            root,
        }
    }

    /// `root / name`.
    pub fn child(&self, name: &str) -> Path {
        &self.root / name
    }
}

/// Base names of `paths`, in order.
#[allow(dead_code)]
pub fn names(paths: &[Path]) -> Vec<String> {
    paths.iter().map(|p| p.basename().into_string()).collect()
}
