use crate::common::{read_all, send_signal, spawn_dirwatch_in, wait_within};
use assert_cmd::Command;
use predicates::prelude::*;
use std::ffi::OsStr;
use std::fs;
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

fn dirwatch() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dirwatch"))
}

#[test]
fn missing_argument_exits_with_usage() {
    dirwatch()
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage:").and(predicate::str::contains("<directory>")));
}

#[test]
fn extra_argument_exits_with_usage() {
    dirwatch()
        .args(["one", "two"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn hyphen_leading_directory_is_watched() {
    let parent = TempDir::new().unwrap();
    for name in ["-x", "-V", "--help"] {
        fs::create_dir(parent.path().join(name)).unwrap();
        fs::write(parent.path().join(name).join("inside.txt"), "first line\n").unwrap();

        let mut child = spawn_dirwatch_in(parent.path(), OsStr::new(name));
        thread::sleep(Duration::from_millis(500));
        send_signal(&child, libc::SIGINT);

        let status =
            wait_within(&mut child, Duration::from_secs(5)).expect("dirwatch did not exit");
        assert_eq!(status.code(), Some(0), "{name}");

        let stdout = read_all(child.stdout.take());
        let stderr = read_all(child.stderr.take());
        assert!(!stderr.contains("Usage:"), "{name}: {stderr}");
        assert!(stdout.contains("NAME "), "{name}: {stdout}");
        assert!(
            stdout
                .lines()
                .any(|row| row.starts_with("inside.txt ") && row.ends_with(" first line")),
            "{name}: {stdout}"
        );
    }
}

#[test]
fn hyphen_leading_name_with_extra_argument_is_still_usage() {
    dirwatch()
        .args(["-x", "more"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage:"));
}
