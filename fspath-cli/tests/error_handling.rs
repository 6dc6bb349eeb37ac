//! Exit codes for each class of failure.
//!
//! - 0: Success
//! - 1: Path not found
//! - 2: Permission denied
//! - 3: Already exists / directory not empty
//! - 4: Invalid arguments
//! - 5: Other I/O error
//! - 7: Configuration error

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_success_exit_code() {
    let env = TestEnv::new();
    env.command().args(["ls", env.root_str()]).assert().code(0);
}

#[test]
fn test_not_found_exit_code() {
    let env = TestEnv::new();
    env.command()
        .arg("ls")
        .arg(env.path("missing"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("listdir"));
    env.command()
        .arg("cat")
        .arg(env.path("missing"))
        .assert()
        .code(1);
}

#[cfg(unix)]
#[test]
fn test_permission_denied_exit_code() {
    use std::os::unix::fs::PermissionsExt;

    // Root ignores permission bits
    if unsafe { libc::geteuid() } == 0 {
        return;
    }

    let env = TestEnv::new();
    let locked = env.path("dir_1");
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();
    let result = env.command().arg("ls").arg(&locked).assert();
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
    result.code(2);
}

#[test]
fn test_already_exists_exit_code() {
    let env = TestEnv::new();
    env.command()
        .arg("mkdir")
        .arg(env.path("dir_1"))
        .assert()
        .code(3);
}

#[test]
fn test_invalid_mode_exit_code() {
    let env = TestEnv::new();
    env.command()
        .args(["chmod", "0789"])
        .arg(env.path("file_1"))
        .assert()
        .code(4)
        .stderr(predicate::str::contains("0789"));
}

#[test]
fn test_empty_pattern_is_config_error() {
    let env = TestEnv::new();
    env.command()
        .args(["ls", "--pattern", "", env.root_str()])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("pattern"));
}

#[test]
fn test_invalid_utf8_content_exit_code() {
    let env = TestEnv::new();
    let binary = env.path("binary");
    std::fs::write(&binary, b"\xff\xfe").unwrap();
    env.command().arg("cat").arg(&binary).assert().code(5);
}

#[test]
fn test_bad_config_file_exit_code() {
    let env = TestEnv::new();
    env.write_user_config("colour: blue\n");
    env.command()
        .args(["ls", env.root_str()])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_bad_environment_exit_code() {
    let env = TestEnv::new();
    env.command()
        .env("FSPATH_SORT", "size")
        .args(["ls", env.root_str()])
        .assert()
        .code(7);
}

#[test]
fn test_unknown_flag_rejected() {
    let env = TestEnv::new();
    env.command()
        .args(["ls", "--colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--colour"));
}

#[test]
fn test_quiet_suppresses_error_message() {
    let env = TestEnv::new();
    env.command()
        .arg("--quiet")
        .arg("cat")
        .arg(env.path("missing"))
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());
}
