//! Memory collaborator interface.
//!
//! The hart consumes memory through a single read-word-at-address
//! operation; nothing about the memory's internal format is assumed
//! beyond that contract. `Ram` is the flat backing store used by the
//! CLI and the test suites.

/// Flat RAM implementation.
pub mod ram;

pub use ram::Ram;

use crate::common::MemFault;

/// Read-side memory contract the core decodes against.
///
/// Every fetch during decode is a single, non-reentrant `&self` read;
/// implementations shared across harts must tolerate concurrent reads
/// but need no further atomicity.
pub trait Memory: Send + Sync {
    /// Reads the 32-bit little-endian word at `addr`.
    fn read_word(&self, addr: u64) -> Result<u32, MemFault>;
}
