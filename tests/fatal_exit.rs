//! `fatal!` with the default exit handler terminates the process.
//!
//! The test re-runs this test binary as a child restricted to
//! `fatal_child`, which calls `fatal!` on the untouched global logger. The
//! parent checks the child's exit status and stderr.

use std::process::Command;

const CHILD_ENV: &str = "LEVELED_LOGGER_FATAL_CHILD";

#[test]
fn fatal_child() {
    if std::env::var_os(CHILD_ENV).is_none() {
        return;
    }

    leveled_logger::fatal!("boom");
    unreachable!("fatal! returned control to the caller");
}

#[test]
fn test_fatal_exits_with_status_one() {
    let exe = std::env::current_exe().expect("test binary path");
    let output = Command::new(exe)
        .args(["fatal_child", "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .output()
        .expect("spawn child test process");

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    let line = stderr
        .lines()
        .find(|line| line.contains("[FATAL]"))
        .expect("fatal line on stderr");
    assert!(line.contains("[fatal_exit.rs:"));
    assert!(line.contains(":fatal_child]"));
    assert!(line.ends_with("] boom"));
}
