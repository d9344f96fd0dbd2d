use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Turn verbose diagnostics on or off for the rest of the process.
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Write a diagnostic line to stderr. Dropped unless verbose mode is on.
pub fn debug(msg: String) {
    if is_verbose() {
        eprintln!("{}", msg);
    }
}

/// Works like `eprintln!` but only prints when `--verbose` was given.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        $crate::log::debug(format!($($arg)*))
    };
}
