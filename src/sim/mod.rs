//! Simulation harness utilities.

/// Binary image loading.
pub mod loader;
