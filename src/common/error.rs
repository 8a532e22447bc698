//! Error taxonomy for the hart simulator.
//!
//! Configuration-time errors abort setup before any decode occurs;
//! runtime faults and debug-access failures are returned as values so
//! the hosting scheduler decides recovery policy. Nothing in this crate
//! aborts the process on a runtime condition.

use thiserror::Error;

/// Fatal configuration errors.
///
/// Any of these aborts model construction entirely; a partially built
/// instruction registry is never exposed.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A feature-string token names no known extension.
    #[error("unknown feature token '{0}'")]
    UnknownFeature(String),

    /// Two feature tokens select conflicting base register widths.
    #[error("conflicting base widths: '{first}' vs '{second}'")]
    ConflictingBase {
        /// The base token seen first.
        first: String,
        /// The later, incompatible token.
        second: String,
    },

    /// The feature string selects no base integer ISA.
    #[error("feature string '{0}' selects no base integer ISA")]
    MissingBase(String),

    /// Two distinct mnemonics compress to the same encoding key.
    #[error(
        "encoding conflict: '{mnemonic}' collides with '{existing}' on key {key:#x}"
    )]
    EncodingConflict {
        /// Mnemonic of the instruction being merged.
        mnemonic: &'static str,
        /// Mnemonic already holding the key.
        existing: &'static str,
        /// The compressed encoding key both map to.
        key: u32,
    },

    /// The same mnemonic was declared twice with different encodings.
    #[error("duplicate mnemonic '{0}' with a different encoding")]
    DuplicateMnemonic(&'static str),

    /// The cost-override table could not be read.
    #[error("cost table '{path}': {source}")]
    CostTableIo {
        /// Path of the table file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The cost-override table could not be parsed.
    #[error("cost table '{path}': {source}")]
    CostTableParse {
        /// Path of the table file.
        path: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Faults raised by the memory collaborator during a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MemFault {
    /// The address falls outside the backing store.
    #[error("access out of bounds at {0:#x}")]
    OutOfBounds(u64),

    /// The address is not word aligned.
    #[error("misaligned word access at {0:#x}")]
    Misaligned(u64),
}

/// Runtime faults surfaced to the execution controller.
///
/// These are reported to the scheduler as a core-stop, not a crash;
/// the system may route them to a trap path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExecFault {
    /// The fetched word's compressed encoding has no registry match.
    #[error("illegal instruction {word:#010x} at pc {pc:#x}")]
    IllegalInstruction {
        /// The raw fetched word.
        word: u32,
        /// The executing PC the word was fetched from.
        pc: u64,
    },

    /// The fetch itself faulted.
    #[error("fetch fault at pc {pc:#x}: {fault}")]
    Fetch {
        /// The executing PC.
        pc: u64,
        /// The underlying memory fault.
        fault: MemFault,
    },
}

/// Failures of the debug-mode register accessors.
///
/// Returned to the caller regardless of run/halt state; never aborts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DebugAccessError {
    /// The register index is outside the architectural file.
    #[error("register index {0} out of range")]
    OutOfRange(usize),

    /// The value does not fit the active register width.
    #[error("value {0:#x} does not fit an RV32 register")]
    WidthMismatch(u64),
}
