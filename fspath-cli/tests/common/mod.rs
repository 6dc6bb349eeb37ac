//! Common helpers for CLI integration tests.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An isolated scratch directory and `HOME` for running `fsp`.
///
/// ```text
/// root/
///   dir_1/
///   dir_2/
///     inner.txt
///   file_1   ("first\n")
///   file_2   ("second\n")
/// ```
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// The populated `root` directory.
    pub root: PathBuf,
    home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = temp_dir.path().join("root");
        let home = temp_dir.path().join("home");
        std::fs::create_dir_all(root.join("dir_1")).unwrap();
        std::fs::create_dir_all(root.join("dir_2")).unwrap();
        std::fs::create_dir_all(&home).unwrap();
        std::fs::write(root.join("dir_2").join("inner.txt"), "").unwrap();
        std::fs::write(root.join("file_1"), "first\n").unwrap();
        std::fs::write(root.join("file_2"), "second\n").unwrap();
        Self {
            temp_dir,
            root,
            home,
        }
    }

    /// `fsp` with `HOME` pointed at the scratch home and no `FSPATH_*`
    /// variables inherited.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("fsp").expect("Failed to find fsp binary");
        cmd.env("HOME", &self.home)
            .env_remove("FSPATH_PATTERN")
            .env_remove("FSPATH_SORT")
            .env_remove("FSPATH_FORMAT")
            .env_remove("FSPATH_RECURSIVE")
            .env_remove("FSPATH_CONFIG")
            .env_remove("FSPATH_LOG_MODE");
        cmd
    }

    /// `root / name`.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Write `~/.fspath/config.yaml`.
    pub fn write_user_config(&self, contents: &str) {
        let dir = self.home.join(".fspath");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.yaml"), contents).unwrap();
    }

    /// Stdout of a successful run, as lines.
    pub fn lines(&self, args: &[&str]) -> Vec<String> {
        let output = self.command().args(args).output().unwrap();
        assert!(output.status.success(), "fsp {args:?} failed: {output:?}");
        String::from_utf8(output.stdout)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// The last component of each line.
    pub fn basenames(lines: &[String]) -> Vec<String> {
        lines
            .iter()
            .map(|l| {
                Path::new(l)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default()
            })
            .collect()
    }

    pub fn root_str(&self) -> &str {
        self.root.to_str().unwrap()
    }
}
