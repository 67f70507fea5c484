// tests/common/mod.rs
//! Shared fixtures for the binary tests.

use std::ffi::OsStr;
use std::fs;
use std::os::unix::fs::symlink;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Directory with a two-line file, a subdirectory and a link to it.
pub fn scenario_dir() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("greeting.txt"), "hello\nworld").unwrap();
    fs::create_dir(temp.path().join("sub")).unwrap();
    symlink("sub", temp.path().join("link")).unwrap();
    temp
}

pub fn spawn_dirwatch(dir: &Path) -> Child {
    spawn_dirwatch_in(Path::new("."), dir.as_os_str())
}

/// Run with `cwd` as working directory and `arg` passed through verbatim.
pub fn spawn_dirwatch_in(cwd: &Path, arg: &OsStr) -> Child {
    Command::new(env!("CARGO_BIN_EXE_dirwatch"))
        .current_dir(cwd)
        .arg(arg)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap()
}

pub fn send_signal(child: &Child, sig: libc::c_int) {
    let pid = libc::pid_t::try_from(child.id()).unwrap();
    let rc = unsafe { libc::kill(pid, sig) };
    assert_eq!(rc, 0, "kill({pid}, {sig}) failed");
}

/// Poll for exit; kills the child and returns `None` past `limit`.
pub fn wait_within(child: &mut Child, limit: Duration) -> Option<ExitStatus> {
    let start = Instant::now();
    loop {
        if let Some(status) = child.try_wait().unwrap() {
            return Some(status);
        }
        if start.elapsed() > limit {
            let _ = child.kill();
            let _ = child.wait();
            return None;
        }
        thread::sleep(Duration::from_millis(20));
    }
}

pub fn read_all(stream: Option<impl std::io::Read>) -> String {
    let mut text = String::new();
    if let Some(mut stream) = stream {
        stream.read_to_string(&mut text).unwrap();
    }
    text
}
