//! Common utilities and types used throughout the hart simulator.
//!
//! This module provides the error taxonomy shared across configuration,
//! decode, and debug paths, plus the output sink the core reports
//! warnings through.

/// Error types for configuration, execution, and debug access.
pub mod error;

/// Warning and status output sink.
pub mod output;

pub use error::{ConfigError, DebugAccessError, ExecFault, MemFault};
pub use output::Output;
