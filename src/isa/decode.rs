//! Format-specific operand extraction.
//!
//! Seven pure extractors, one per instruction format, each reproducing
//! RISC-V's exact bit-field reassembly and sign-extension rules. A
//! malformed immediate here is a silent-correctness bug rather than a
//! crash, so the test suites pin exact values for every format.
//!
//! Decoding is a pure function of (word, entry): the same inputs always
//! yield byte-identical records.

use crate::isa::entry::{InstEntry, InstFormat};
use crate::isa::inst::InstRecord;
use crate::isa::opcodes;

fn rd(word: u32) -> u8 {
    ((word >> 7) & 0x1F) as u8
}

fn rs1(word: u32) -> u8 {
    ((word >> 15) & 0x1F) as u8
}

fn rs2(word: u32) -> u8 {
    ((word >> 20) & 0x1F) as u8
}

fn rs3(word: u32) -> u8 {
    ((word >> 27) & 0x1F) as u8
}

fn funct3(word: u32) -> u8 {
    ((word >> 12) & 0x7) as u8
}

fn funct7(word: u32) -> u8 {
    ((word >> 25) & 0x7F) as u8
}

/// Sign-extends the low `bits` bits of `value`.
fn sext(value: u32, bits: u32) -> i64 {
    let shift = 64 - bits;
    ((i64::from(value)) << shift) >> shift
}

fn record(word: u32, entry_id: usize, format: InstFormat) -> InstRecord {
    InstRecord {
        raw: word,
        entry: entry_id,
        format,
        funct3: funct3(word),
        funct7: funct7(word),
        valid: true,
        ..InstRecord::default()
    }
}

/// R-type: rd, rs1, rs2, funct fields, no immediate.
pub fn decode_r(word: u32, entry_id: usize) -> InstRecord {
    let mut rec = record(word, entry_id, InstFormat::R);
    rec.rd = rd(word);
    rec.rs1 = rs1(word);
    rec.rs2 = rs2(word);
    rec
}

/// I-type: rd, rs1, sign-extended 12-bit immediate.
///
/// Shift encodings additionally expose the low immediate bits as the
/// shift amount; CSR encodings zero-extend the immediate since it is a
/// CSR number, not a signed offset.
pub fn decode_i(word: u32, entry_id: usize) -> InstRecord {
    let mut rec = record(word, entry_id, InstFormat::I);
    rec.rd = rd(word);
    rec.rs1 = rs1(word);

    let imm12 = (word >> 20) & 0xFFF;
    let opcode = (word & 0x7F) as u8;
    let f3 = funct3(word);

    let is_shift = (opcode == opcodes::OP_IMM || opcode == opcodes::OP_IMM_32)
        && (f3 == 0x1 || f3 == 0x5);
    if is_shift {
        rec.shamt = (imm12 & 0x3F) as u8;
    }

    if opcode == opcodes::OP_SYSTEM {
        rec.imm = i64::from(imm12);
    } else {
        rec.imm = sext(imm12, 12);
    }
    rec
}

/// S-type: rs1, rs2, 12-bit immediate split across two word regions.
pub fn decode_s(word: u32, entry_id: usize) -> InstRecord {
    let mut rec = record(word, entry_id, InstFormat::S);
    rec.rs1 = rs1(word);
    rec.rs2 = rs2(word);
    let imm = ((word >> 25) << 5) | ((word >> 7) & 0x1F);
    rec.imm = sext(imm, 12);
    rec
}

/// U-type: rd, 20-bit immediate left-shifted into the upper bits.
pub fn decode_u(word: u32, entry_id: usize) -> InstRecord {
    let mut rec = record(word, entry_id, InstFormat::U);
    rec.rd = rd(word);
    rec.imm = i64::from((word & 0xFFFF_F000) as i32);
    rec
}

/// B-type: rs1, rs2, 13-bit immediate from four disjoint regions,
/// low bit implicitly zero.
pub fn decode_b(word: u32, entry_id: usize) -> InstRecord {
    let mut rec = record(word, entry_id, InstFormat::B);
    rec.rs1 = rs1(word);
    rec.rs2 = rs2(word);
    let imm = ((word >> 31) & 0x1) << 12
        | ((word >> 7) & 0x1) << 11
        | ((word >> 25) & 0x3F) << 5
        | ((word >> 8) & 0xF) << 1;
    rec.imm = sext(imm, 13);
    rec
}

/// J-type: rd, 21-bit immediate from four disjoint regions, low bit
/// implicitly zero.
pub fn decode_j(word: u32, entry_id: usize) -> InstRecord {
    let mut rec = record(word, entry_id, InstFormat::J);
    rec.rd = rd(word);
    let imm = ((word >> 31) & 0x1) << 20
        | ((word >> 12) & 0xFF) << 12
        | ((word >> 20) & 0x1) << 11
        | ((word >> 21) & 0x3FF) << 1;
    rec.imm = sext(imm, 21);
    rec
}

/// R4-type: rd, rs1, rs2, rs3, funct fields.
pub fn decode_r4(word: u32, entry_id: usize) -> InstRecord {
    let mut rec = record(word, entry_id, InstFormat::R4);
    rec.rd = rd(word);
    rec.rs1 = rs1(word);
    rec.rs2 = rs2(word);
    rec.rs3 = rs3(word);
    rec
}

/// Dispatches to the extractor named by the entry's format tag.
pub fn decode(word: u32, entry_id: usize, entry: &InstEntry) -> InstRecord {
    match entry.format {
        InstFormat::R => decode_r(word, entry_id),
        InstFormat::I => decode_i(word, entry_id),
        InstFormat::S => decode_s(word, entry_id),
        InstFormat::U => decode_u(word, entry_id),
        InstFormat::B => decode_b(word, entry_id),
        InstFormat::J => decode_j(word, entry_id),
        InstFormat::R4 => decode_r4(word, entry_id),
    }
}
