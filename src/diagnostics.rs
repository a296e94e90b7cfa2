use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Turn verbose diagnostics on or off for the whole process.
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Write a diagnostic line to stderr, but only in verbose mode.
pub fn verbose(msg: String) {
    if is_verbose() {
        eprintln!("{}", msg);
    }
}

/// Write a warning to stderr. Warnings are always shown.
pub fn warn(msg: String) {
    eprintln!("warning: {}", msg);
}

/// Works like `eprintln!` but only prints when `--verbose` is set.
#[macro_export]
macro_rules! verbose_eprintln {
    ($($arg:tt)*) => {
        $crate::diagnostics::verbose(format!($($arg)*))
    };
}

/// Works like `eprintln!` with a `warning:` prefix.
#[macro_export]
macro_rules! warn_eprintln {
    ($($arg:tt)*) => {
        $crate::diagnostics::warn(format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_toggle() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }
}
