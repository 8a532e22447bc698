//! Extension modules.
//!
//! Each module owns a private instruction list the registry merges at
//! configuration time. The core only ever reads these lists; semantic
//! dispatch back into a module happens through the registry's
//! back-reference map, outside this crate's scope.

use crate::isa::entry::InstEntry;

/// Base integer ISA.
pub mod rv32i;
/// RV64I additions to the base ISA.
pub mod rv64i;
/// Integer multiply/divide.
pub mod rv32m;
/// RV64 multiply/divide additions.
pub mod rv64m;
/// Atomics.
pub mod rv32a;
/// RV64 atomics additions.
pub mod rv64a;
/// Single-precision floating point.
pub mod rv32f;
/// RV64 single-precision additions.
pub mod rv64f;
/// Double-precision floating point.
pub mod rv32d;
/// RV64 double-precision additions.
pub mod rv64d;

/// A pluggable source of instruction descriptors.
///
/// Modules expose only their name and instruction list; the merge
/// algorithm needs nothing else. Implementations are stateless unit
/// structs, so the registry can hold them for the processor's lifetime
/// and share them read-only across harts.
pub trait Extension: Send + Sync {
    /// Short module name, used in reports and conflict messages.
    fn name(&self) -> &'static str;

    /// The module's private instruction list, in declaration order.
    fn instructions(&self) -> Vec<InstEntry>;
}
