//! Decoded instruction records.
//!
//! An `InstRecord` is the per-fetch payload: the raw word, the registry
//! entry it resolved to, and the operand fields populated according to
//! the entry's format tag. The hart owns one record as scratch space
//! and resets it before every decode; records are never retained across
//! cycles.

use crate::isa::entry::InstFormat;

/// Fully decoded instruction payload for one fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstRecord {
    /// The raw fetched word.
    pub raw: u32,
    /// Registry entry id the word resolved to.
    pub entry: usize,
    /// Binary layout the operands were extracted under.
    pub format: InstFormat,
    /// Destination register number.
    pub rd: u8,
    /// First source register number.
    pub rs1: u8,
    /// Second source register number.
    pub rs2: u8,
    /// Third source register number (R4 only).
    pub rs3: u8,
    /// Sign-extended immediate, per format rules.
    pub imm: i64,
    /// Shift amount for immediate-shift encodings.
    pub shamt: u8,
    /// funct3 field of the word.
    pub funct3: u8,
    /// funct7 field of the word.
    pub funct7: u8,
    /// Whether the record holds a successfully decoded instruction.
    pub valid: bool,
}

impl InstRecord {
    /// Clears every field back to the pre-decode state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for InstRecord {
    fn default() -> Self {
        Self {
            raw: 0,
            entry: 0,
            format: InstFormat::R,
            rd: 0,
            rs1: 0,
            rs2: 0,
            rs3: 0,
            imm: 0,
            shamt: 0,
            funct3: 0,
            funct7: 0,
            valid: false,
        }
    }
}
