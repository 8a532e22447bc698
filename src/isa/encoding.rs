//! Encoding compression.
//!
//! Maps an instruction's structural fields into a single dense key used
//! by the registry's encoding index. The same packing rules are applied
//! to table entries at merge time (`compress_entry`) and to fetched
//! words at decode time (`compress_word`); both sides must agree
//! bit-for-bit or reverse lookup breaks.
//!
//! Key layout: bits 0..6 opcode, 8..10 funct3, 11..17 funct7, 18..29
//! secondary selector. Which fields participate depends only on the
//! opcode (and funct3/funct7 where noted), never on merge order, so the
//! key is a pure function of an entry's fields.

use crate::isa::entry::InstEntry;
use crate::isa::opcodes;

const FUNCT3_SHIFT: u32 = 8;
const FUNCT7_SHIFT: u32 = 11;
const SEL_SHIFT: u32 = 18;

/// aq/rl bits of an AMO funct7 are ignored for identity.
const AMO_ORDERING_MASK: u8 = 0b111_1100;
/// Only the arithmetic-shift bit distinguishes immediate shifts.
const SHIFT_FUNCT7_MASK: u8 = 0b010_0000;
/// R4 funct7 carries only the two fmt bits.
const FMT_MASK: u8 = 0b000_0011;

/// OP-FP funct7 classes whose funct3 is a rounding mode, not identity.
const FP_RM_FUNCT7: [u8; 16] = [
    0x00, 0x01, // fadd
    0x04, 0x05, // fsub
    0x08, 0x09, // fmul
    0x0C, 0x0D, // fdiv
    0x2C, 0x2D, // fsqrt
    0x20, 0x21, // fcvt between fp formats
    0x60, 0x61, // fcvt int <- fp
    0x68, 0x69, // fcvt fp <- int
];

/// OP-FP funct7 classes where the rs2 field discriminates variants.
const FP_RS2_SEL_FUNCT7: [u8; 6] = [0x20, 0x21, 0x60, 0x61, 0x68, 0x69];

fn is_r4(opcode: u8) -> bool {
    matches!(
        opcode,
        opcodes::OP_FMADD | opcodes::OP_FMSUB | opcodes::OP_FNMSUB | opcodes::OP_FNMADD
    )
}

fn funct3_included(opcode: u8, funct7: u8) -> bool {
    match opcode {
        opcodes::OP_LUI | opcodes::OP_AUIPC | opcodes::OP_JAL => false,
        opcodes::OP_FP => !FP_RM_FUNCT7.contains(&funct7),
        _ => !is_r4(opcode),
    }
}

fn funct7_mask(opcode: u8, funct3: u8) -> u8 {
    match opcode {
        opcodes::OP_REG | opcodes::OP_REG_32 | opcodes::OP_FP => 0x7F,
        opcodes::OP_AMO => AMO_ORDERING_MASK,
        opcodes::OP_IMM | opcodes::OP_IMM_32 if funct3 == 0x1 || funct3 == 0x5 => {
            SHIFT_FUNCT7_MASK
        }
        _ if is_r4(opcode) => FMT_MASK,
        _ => 0,
    }
}

/// How the secondary selector participates for a given encoding class.
enum SelRule {
    None,
    /// SYSTEM with funct3 0: imm12 distinguishes ecall/ebreak.
    SystemImm,
    /// FP-convert classes: the rs2 field distinguishes w/wu/l/lu.
    FcvtRs2,
}

fn sel_rule(opcode: u8, funct3: u8, funct7: u8) -> SelRule {
    if opcode == opcodes::OP_SYSTEM && funct3 == 0 {
        SelRule::SystemImm
    } else if opcode == opcodes::OP_FP && FP_RS2_SEL_FUNCT7.contains(&funct7) {
        SelRule::FcvtRs2
    } else {
        SelRule::None
    }
}

fn pack(opcode: u8, funct3: u8, funct7: u8, sel: u16) -> u32 {
    let mut key = u32::from(opcode);
    if funct3_included(opcode, funct7) {
        key |= u32::from(funct3) << FUNCT3_SHIFT;
    }
    let mask = funct7_mask(opcode, funct3);
    key |= u32::from(funct7 & mask) << FUNCT7_SHIFT;
    match sel_rule(opcode, funct3, funct7) {
        SelRule::None => {}
        SelRule::SystemImm | SelRule::FcvtRs2 => {
            key |= u32::from(sel) << SEL_SHIFT;
        }
    }
    key
}

/// Compresses a table entry's structural fields into its lookup key.
pub fn compress_entry(entry: &InstEntry) -> u32 {
    pack(entry.opcode, entry.funct3, entry.funct7, entry.sel)
}

/// Compresses a fetched word into the key its entry was merged under.
pub fn compress_word(word: u32) -> u32 {
    let opcode = (word & 0x7F) as u8;
    let funct3 = ((word >> 12) & 0x7) as u8;
    let funct7 = ((word >> 25) & 0x7F) as u8;
    let sel = match sel_rule(opcode, funct3, funct7) {
        SelRule::None => 0,
        SelRule::SystemImm => ((word >> 20) & 0xFFF) as u16,
        SelRule::FcvtRs2 => ((word >> 20) & 0x1F) as u16,
    };
    pack(opcode, funct3, funct7, sel)
}
