//! Instruction Set Architecture definitions and decoders.
//!
//! This module owns everything between a feature string and a decoded
//! instruction record: feature resolution, extension modules, the
//! merged instruction registry with its two lookup indices, encoding
//! compression, and the seven format-specific operand extractors.

/// Cost-override table loading.
pub mod cost;

/// Format-specific operand extraction.
pub mod decode;

/// Encoding compression into dense lookup keys.
pub mod encoding;

/// Instruction descriptors and format tags.
pub mod entry;

/// Pluggable extension modules and their instruction lists.
pub mod ext;

/// Feature-string resolution.
pub mod feature;

/// Decoded instruction records.
pub mod inst;

/// RISC-V major opcode constants.
pub mod opcodes;

/// The instruction registry and its builder.
pub mod registry;

pub use cost::CostTable;
pub use entry::{InstEntry, InstFormat, RegClass};
pub use feature::{ExtLetter, FeatureSet, Xlen};
pub use inst::InstRecord;
pub use registry::{InstRegistry, RegistryBuilder};
