use crate::common::{read_all, scenario_dir, send_signal, spawn_dirwatch, wait_within};
use std::thread;
use std::time::{Duration, Instant};

const CLEAR_SCREEN: &str = "\x1B[H\x1B[J";

#[test]
fn sigint_during_sleep_exits_cleanly() {
    let dir = scenario_dir();
    let mut child = spawn_dirwatch(dir.path());

    // first cycle is done well before this; the loop is in its wait phase
    thread::sleep(Duration::from_millis(1200));
    let sent = Instant::now();
    send_signal(&child, libc::SIGINT);

    let status = wait_within(&mut child, Duration::from_secs(5)).expect("dirwatch did not exit");
    assert!(status.success(), "{status:?}");
    assert!(sent.elapsed() < Duration::from_millis(2500));

    let stdout = read_all(child.stdout.take());
    assert!(stdout.starts_with(CLEAR_SCREEN));
    assert_eq!(stdout.matches("NAME ").count(), 1, "{stdout}");

    let rows: Vec<_> = stdout.lines().skip(2).collect();
    assert_eq!(rows.len(), 3, "{stdout}");
    assert!(rows.iter().any(|r| r.starts_with("greeting.txt ") && r.ends_with(" hello")));
    assert!(rows.iter().any(|r| r.starts_with("sub ") && r.ends_with(" (directory)")));
    assert!(rows.iter().any(|r| r.starts_with("link ") && r.ends_with(" -> sub")));
}

#[test]
fn sigterm_also_stops_the_loop() {
    let dir = scenario_dir();
    let mut child = spawn_dirwatch(dir.path());

    thread::sleep(Duration::from_millis(500));
    send_signal(&child, libc::SIGTERM);

    let status = wait_within(&mut child, Duration::from_secs(5)).expect("dirwatch did not exit");
    assert_eq!(status.code(), Some(0));
}

#[test]
fn missing_directory_keeps_running_and_reports() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("not-there");
    let mut child = spawn_dirwatch(&missing);

    thread::sleep(Duration::from_millis(500));
    send_signal(&child, libc::SIGINT);

    let status = wait_within(&mut child, Duration::from_secs(5)).expect("dirwatch did not exit");
    assert!(status.success(), "{status:?}");

    let stdout = read_all(child.stdout.take());
    let stderr = read_all(child.stderr.take());
    assert!(!stdout.contains("NAME"));
    assert!(stderr.contains("Unable to open"), "{stderr}");
    assert!(stderr.contains("not-there"), "{stderr}");
}
