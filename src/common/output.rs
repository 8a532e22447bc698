//! Output sink for warnings and status messages.
//!
//! The core never writes to stderr directly; everything goes through an
//! `Output` handle so callers can raise or silence verbosity and tests
//! can count emitted warnings.

use std::sync::atomic::{AtomicU64, Ordering};

/// Warning and status sink shared by configuration and the hart.
pub struct Output {
    verbose: u32,
    warnings: AtomicU64,
}

impl Output {
    /// Creates a sink with the given verbosity level.
    ///
    /// Level 0 emits warnings only; higher levels also emit status
    /// messages of the matching level.
    pub fn new(verbose: u32) -> Self {
        Self {
            verbose,
            warnings: AtomicU64::new(0),
        }
    }

    /// Emits a warning and counts it.
    pub fn warn(&self, msg: &str) {
        self.warnings.fetch_add(1, Ordering::Relaxed);
        eprintln!("[warn] {}", msg);
    }

    /// Emits a status message if the sink is at least this verbose.
    pub fn verbose(&self, level: u32, msg: &str) {
        if self.verbose >= level {
            eprintln!("[sim] {}", msg);
        }
    }

    /// Number of warnings emitted so far.
    pub fn warnings_emitted(&self) -> u64 {
        self.warnings.load(Ordering::Relaxed)
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new(0)
    }
}
