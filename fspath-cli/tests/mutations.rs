//! Integration tests for the commands that change the filesystem.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_mkdir_and_rm() {
    let env = TestEnv::new();
    let fresh = env.path("fresh");
    env.command().arg("mkdir").arg(&fresh).assert().success();
    assert!(fresh.is_dir());

    env.command().arg("rm").arg(&fresh).assert().success();
    assert!(!fresh.exists());
}

#[test]
fn test_mkdir_parents() {
    let env = TestEnv::new();
    let deep = env.path("a").join("b").join("c");
    env.command().arg("mkdir").arg(&deep).assert().code(1);
    env.command()
        .args(["mkdir", "-p"])
        .arg(&deep)
        .assert()
        .success();
    assert!(deep.is_dir());
}

#[test]
fn test_rm_non_empty_requires_recursive() {
    let env = TestEnv::new();
    let dir_2 = env.path("dir_2");
    env.command()
        .arg("rm")
        .arg(&dir_2)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("rmdir"));
    assert!(dir_2.join("inner.txt").exists());

    env.command()
        .args(["rm", "--recursive"])
        .arg(&dir_2)
        .assert()
        .success();
    assert!(!dir_2.exists());
}

#[test]
fn test_touch_keeps_content() {
    let env = TestEnv::new();
    let new_file = env.path("new_file");
    env.command()
        .arg("touch")
        .arg(&new_file)
        .arg(env.path("file_1"))
        .assert()
        .success();
    assert_eq!(std::fs::read(&new_file).unwrap().len(), 0);
    assert_eq!(std::fs::read_to_string(env.path("file_1")).unwrap(), "first\n");
}

#[test]
fn test_cp_file_into_directory() {
    let env = TestEnv::new();
    env.command()
        .arg("cp")
        .arg(env.path("file_1"))
        .arg(env.path("dir_1"))
        .assert()
        .success();
    assert_eq!(
        std::fs::read_to_string(env.path("dir_1").join("file_1")).unwrap(),
        "first\n"
    );
}

#[test]
fn test_cp_directory_tree() {
    let env = TestEnv::new();
    env.command()
        .arg("cp")
        .arg(env.path("dir_2"))
        .arg(env.path("dir_3"))
        .assert()
        .success();
    assert!(env.path("dir_3").join("inner.txt").is_file());
}

#[test]
fn test_mv() {
    let env = TestEnv::new();
    env.command()
        .arg("mv")
        .arg(env.path("file_2"))
        .arg(env.path("renamed"))
        .assert()
        .success();
    assert!(!env.path("file_2").exists());
    assert_eq!(std::fs::read_to_string(env.path("renamed")).unwrap(), "second\n");
}

#[cfg(unix)]
#[test]
fn test_ln_then_unlink() {
    let env = TestEnv::new();
    let link = env.path("symlink");
    env.command()
        .arg("ln")
        .arg(env.path("file_1"))
        .arg(&link)
        .assert()
        .success();
    assert!(link.symlink_metadata().unwrap().file_type().is_symlink());
    assert_eq!(std::fs::read_to_string(&link).unwrap(), "first\n");

    env.command().arg("unlink").arg(&link).assert().success();
    assert!(link.symlink_metadata().is_err());
    assert!(env.path("file_1").exists());
}

#[cfg(unix)]
#[test]
fn test_ln_hard() {
    use std::os::unix::fs::MetadataExt;

    let env = TestEnv::new();
    let link = env.path("hard");
    env.command()
        .args(["ln", "--hard"])
        .arg(env.path("file_1"))
        .arg(&link)
        .assert()
        .success();
    assert_eq!(std::fs::metadata(&link).unwrap().nlink(), 2);
}

#[cfg(unix)]
#[test]
fn test_chmod() {
    use std::os::unix::fs::PermissionsExt;

    let env = TestEnv::new();
    env.command()
        .args(["chmod", "0775"])
        .arg(env.path("dir_1"))
        .arg(env.path("file_1"))
        .assert()
        .success();
    for name in ["dir_1", "file_1"] {
        let mode = std::fs::metadata(env.path(name)).unwrap().permissions().mode();
        assert_eq!(mode & 0o7777, 0o775);
    }
}

#[test]
fn test_verbose_logs_mutations() {
    let env = TestEnv::new();
    env.command()
        .arg("--verbose")
        .arg("mkdir")
        .arg(env.path("logged"))
        .assert()
        .success()
        .stderr(predicate::str::contains("mkdir"));
}
