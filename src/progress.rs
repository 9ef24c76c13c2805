//! Where progress output goes.
//!
//! Status lines and child-process output go to stdout, unless stdout is
//! reserved for a machine-readable result, in which case they go to stderr.

use std::process::Stdio;
use std::sync::atomic::{AtomicBool, Ordering};

static TO_STDERR: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Stdout,
    Stderr,
}

/// Reserve stdout for the final result (`--json`)
pub fn reserve_stdout(reserved: bool) {
    TO_STDERR.store(reserved, Ordering::Relaxed);
}

pub fn target() -> Target {
    if TO_STDERR.load(Ordering::Relaxed) {
        Target::Stderr
    } else {
        Target::Stdout
    }
}

/// Print one status line to the current target
pub fn line(message: impl std::fmt::Display) {
    match target() {
        Target::Stdout => println!("{message}"),
        Target::Stderr => eprintln!("{message}"),
    }
}

/// Stdout handle for a child process
pub fn child_stdout() -> Stdio {
    match target() {
        Target::Stdout => Stdio::inherit(),
        Target::Stderr => Stdio::from(std::io::stderr()),
    }
}
